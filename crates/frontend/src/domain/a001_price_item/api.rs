use contracts::domain::a001_price_item::{PriceItem, PriceItemDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::ListEnvelope;

use crate::shared::http::{ApiClient, ApiError};

pub async fn fetch_prices(client: ApiClient) -> Result<Vec<PriceItem>, ApiError> {
    let envelope: ListEnvelope<PriceItem> = client.get(&PriceItem::api_path()).await?;
    Ok(envelope.into_items())
}

pub async fn create_price(client: ApiClient, dto: &PriceItemDto) -> Result<(), ApiError> {
    client.post_unit(&PriceItem::api_path(), dto).await
}

pub async fn update_price(client: ApiClient, id: &str, dto: &PriceItemDto) -> Result<(), ApiError> {
    client.put_unit(&PriceItem::record_path(id), dto).await
}

pub async fn delete_price(client: ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&PriceItem::record_path(id)).await
}
