use contracts::domain::a002_customer::{Customer, CustomerDto};
use contracts::domain::a003_order::Order;
use contracts::usecases::u101_create_order::CreateOrderRequest;

use crate::domain::a002_customer::api as customers_api;
use crate::domain::a003_order::{api as orders_api, receipt};
use crate::shared::http::{ApiClient, ApiError};

/// Backend calls made when an order is finalized.
#[allow(async_fn_in_trait)]
pub trait OrderGateway {
    async fn create_customer(&self, dto: &CustomerDto) -> Result<Customer, ApiError>;

    async fn create_order(&self, request: &CreateOrderRequest) -> Result<Order, ApiError>;

    /// Fetches the receipt and hands it to the browser.
    async fn download_receipt(&self, order_id: &str) -> Result<(), String>;
}

/// Gateway backed by the REST API.
#[derive(Clone, Copy)]
pub struct HttpOrderGateway {
    client: ApiClient,
}

impl HttpOrderGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl OrderGateway for HttpOrderGateway {
    async fn create_customer(&self, dto: &CustomerDto) -> Result<Customer, ApiError> {
        customers_api::create_customer(self.client, dto).await
    }

    async fn create_order(&self, request: &CreateOrderRequest) -> Result<Order, ApiError> {
        orders_api::create_order(self.client, request).await
    }

    async fn download_receipt(&self, order_id: &str) -> Result<(), String> {
        receipt::download_receipt(self.client, order_id).await
    }
}
