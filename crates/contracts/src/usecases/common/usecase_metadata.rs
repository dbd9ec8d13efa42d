/// Identification metadata of a use case
pub trait UseCaseMetadata {
    /// Use case index (e.g. "u101")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "create_order")
    fn usecase_name() -> &'static str;

    /// Name shown in the UI (e.g. "Nueva orden")
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u101_create_order"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
