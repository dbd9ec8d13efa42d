/// Metadata shared by every backend resource the dashboard manages.
///
/// Instance data is limited to the identifier; the static part names the
/// resource for the UI and for the REST path.
pub trait AggregateRoot {
    /// Opaque backend identifier (`_id` on the wire)
    fn id(&self) -> &str;

    // ============================================================================
    // Static metadata
    // ============================================================================

    /// Index of the aggregate in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// REST collection name (e.g. "prices")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Prenda")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Precios")
    fn list_name() -> &'static str;

    // ============================================================================
    // Defaults
    // ============================================================================

    /// "a001_prices"
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Collection path relative to the API base ("/api/prices")
    fn api_path() -> String {
        format!("/api/{}", Self::collection_name())
    }

    /// Path of a single record ("/api/prices/<id>")
    fn record_path(id: &str) -> String {
        format!("{}/{}", Self::api_path(), id)
    }
}
