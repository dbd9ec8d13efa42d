use contracts::dashboards::d100_summary::{DashboardStats, DelayedOrders, TopCustomer};
use contracts::shared::ListEnvelope;

use crate::shared::http::{ApiClient, ApiError};

/// KPI block: today's orders, revenue, outstanding balance, status counts
pub async fn fetch_stats(client: ApiClient) -> Result<DashboardStats, ApiError> {
    client.get("/api/orders/stats/dashboard").await
}

pub async fn fetch_top_customers(client: ApiClient) -> Result<Vec<TopCustomer>, ApiError> {
    let envelope: ListEnvelope<TopCustomer> = client.get("/api/customers/top").await?;
    Ok(envelope.into_items())
}

/// Orders not completed within three days, oldest first
pub async fn fetch_delayed_orders(client: ApiClient) -> Result<DelayedOrders, ApiError> {
    client.get("/api/orders/delayed").await
}
