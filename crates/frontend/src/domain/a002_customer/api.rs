use contracts::domain::a002_customer::{Customer, CustomerDto, CustomerListQuery, CustomerStats};
use contracts::domain::a003_order::Order;
use contracts::domain::common::AggregateRoot;
use contracts::shared::{ListEnvelope, Page};

use crate::shared::api_utils::with_query;
use crate::shared::http::{ApiClient, ApiError};

/// Fetch one page of customers, optionally filtered by `search`
pub async fn fetch_customers(
    client: ApiClient,
    query: &CustomerListQuery,
) -> Result<Page<Customer>, ApiError> {
    let path = with_query(&Customer::api_path(), query).map_err(ApiError::Decode)?;
    let envelope: ListEnvelope<Customer> = client.get(&path).await?;
    Ok(envelope.into_page(query.page))
}

pub async fn fetch_customer(client: ApiClient, id: &str) -> Result<Customer, ApiError> {
    client.get(&Customer::record_path(id)).await
}

/// Create a customer and return it with its new id
pub async fn create_customer(client: ApiClient, dto: &CustomerDto) -> Result<Customer, ApiError> {
    client.post(&Customer::api_path(), dto).await
}

pub async fn update_customer(client: ApiClient, id: &str, dto: &CustomerDto) -> Result<(), ApiError> {
    client.put_unit(&Customer::record_path(id), dto).await
}

pub async fn delete_customer(client: ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&Customer::record_path(id)).await
}

pub async fn fetch_customer_stats(client: ApiClient, id: &str) -> Result<CustomerStats, ApiError> {
    client.get(&format!("{}/stats", Customer::record_path(id))).await
}

/// Order history of one customer, newest first as sent by the backend
pub async fn fetch_customer_orders(client: ApiClient, id: &str) -> Result<Vec<Order>, ApiError> {
    let envelope: ListEnvelope<Order> = client.get(&format!("/api/orders/customer/{}", id)).await?;
    Ok(envelope.into_items())
}
