use contracts::shared::{ListEnvelope, Page};
use contracts::system::users::{CreateUserDto, UpdateUserDto, User, UserListQuery};

use crate::shared::api_utils::with_query;
use crate::shared::http::{ApiClient, ApiError};

/// Fetch one page of users
pub async fn fetch_users(client: ApiClient, query: &UserListQuery) -> Result<Page<User>, ApiError> {
    let path = with_query("/api/users", query).map_err(ApiError::Decode)?;
    let envelope: ListEnvelope<User> = client.get(&path).await?;
    Ok(envelope.into_page(query.page))
}

pub async fn fetch_user(client: ApiClient, id: &str) -> Result<User, ApiError> {
    client.get(&format!("/api/users/{}", id)).await
}

/// Create new user
pub async fn create_user(client: ApiClient, dto: &CreateUserDto) -> Result<(), ApiError> {
    client.post_unit("/api/users", dto).await
}

/// Update user
pub async fn update_user(client: ApiClient, id: &str, dto: &UpdateUserDto) -> Result<(), ApiError> {
    client
        .patch::<_, serde_json::Value>(&format!("/api/users/{}", id), dto)
        .await
        .map(|_| ())
}

/// Delete user
pub async fn delete_user(client: ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/api/users/{}", id)).await
}
