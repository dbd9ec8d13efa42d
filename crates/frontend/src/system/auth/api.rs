use contracts::system::auth::{
    ChangePasswordRequest, LoginRequest, LoginResponse, UpdateProfileRequest, UserInfo,
};

use crate::shared::config::AUTH_CHECK_TIMEOUT_MS;
use crate::shared::http::{ApiClient, ApiError};

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    ApiClient::detached()
        .post("/api/auth/login", &request)
        .await
}

/// Session check. Bounded by `AUTH_CHECK_TIMEOUT_MS` and never expires the
/// session itself: a 401 here just means "not signed in".
pub async fn check_session() -> Result<UserInfo, ApiError> {
    ApiClient::detached()
        .with_timeout(AUTH_CHECK_TIMEOUT_MS)
        .get("/api/auth/me")
        .await
}

/// Logout (drops the server-side session cookie)
pub async fn logout() -> Result<(), ApiError> {
    ApiClient::detached()
        .post_unit("/api/auth/logout", &serde_json::Value::Null)
        .await
}

/// Get current user info
pub async fn get_current_user(client: ApiClient) -> Result<UserInfo, ApiError> {
    client.get("/api/auth/me").await
}

/// Saves the profile; callers re-read `/api/auth/me` afterwards.
pub async fn update_profile(
    client: ApiClient,
    request: &UpdateProfileRequest,
) -> Result<(), ApiError> {
    client
        .patch::<_, serde_json::Value>("/api/auth/me", request)
        .await
        .map(|_| ())
}

pub async fn change_password(
    client: ApiClient,
    request: &ChangePasswordRequest,
) -> Result<(), ApiError> {
    client.post_unit("/api/auth/change-password", request).await
}
