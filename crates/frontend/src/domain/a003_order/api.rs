use contracts::domain::a003_order::{Order, OrderListQuery, UpdateOrderRequest};
use contracts::domain::common::AggregateRoot;
use contracts::shared::{ListEnvelope, Page};
use contracts::usecases::u101_create_order::CreateOrderRequest;

use crate::shared::api_utils::with_query;
use crate::shared::http::{ApiClient, ApiError};

/// Fetch one page of orders matching the list filters
pub async fn fetch_orders(client: ApiClient, query: &OrderListQuery) -> Result<Page<Order>, ApiError> {
    let path = with_query(&Order::api_path(), query).map_err(ApiError::Decode)?;
    let envelope: ListEnvelope<Order> = client.get(&path).await?;
    Ok(envelope.into_page(query.page))
}

pub async fn fetch_order(client: ApiClient, id: &str) -> Result<Order, ApiError> {
    client.get(&Order::record_path(id)).await
}

pub async fn create_order(client: ApiClient, request: &CreateOrderRequest) -> Result<Order, ApiError> {
    client.post(&Order::api_path(), request).await
}

/// Partial update: status and/or items
pub async fn update_order(
    client: ApiClient,
    id: &str,
    request: &UpdateOrderRequest,
) -> Result<(), ApiError> {
    client.put_unit(&Order::record_path(id), request).await
}

pub async fn delete_order(client: ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&Order::record_path(id)).await
}

/// PDF receipt rendered by the backend
pub async fn fetch_receipt(client: ApiClient, id: &str) -> Result<Vec<u8>, ApiError> {
    client.get_bytes(&format!("/api/pdf/order/{}", id)).await
}
