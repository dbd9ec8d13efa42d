use contracts::domain::a004_payment::{CreatePaymentRequest, Payment};
use contracts::domain::common::AggregateRoot;
use contracts::shared::ListEnvelope;

use crate::shared::http::{ApiClient, ApiError};

/// Payments registered against one order
pub async fn fetch_payments(client: ApiClient, order_id: &str) -> Result<Vec<Payment>, ApiError> {
    let path = format!(
        "{}?orderId={}",
        Payment::api_path(),
        urlencoding::encode(order_id)
    );
    let envelope: ListEnvelope<Payment> = client.get(&path).await?;
    Ok(envelope.into_items())
}

pub async fn create_payment(client: ApiClient, request: &CreatePaymentRequest) -> Result<(), ApiError> {
    client.post_unit(&Payment::api_path(), request).await
}

pub async fn delete_payment(client: ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&Payment::record_path(id)).await
}
