use super::api;
use crate::shared::download::{receipt_file_name, save_bytes};
use crate::shared::http::ApiClient;

/// Downloads the order receipt and hands it to the browser as
/// `comprobante_<id>.pdf`.
pub async fn download_receipt(client: ApiClient, order_id: &str) -> Result<(), String> {
    let bytes = api::fetch_receipt(client, order_id)
        .await
        .map_err(|e| e.user_message("No se pudo descargar el comprobante"))?;
    save_bytes(&bytes, &receipt_file_name(order_id), "application/pdf")
}
