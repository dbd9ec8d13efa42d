use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::http::{ApiClient, ApiError};
use crate::shared::notify::Notifier;

pub const SESSION_EXPIRED: &str = "Tu sesión expiró. Volvé a iniciar sesión.";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthStatus {
    /// Startup session check in flight
    #[default]
    Checking,
    Anonymous,
    Authenticated(UserInfo),
}

impl AuthStatus {
    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            AuthStatus::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user().map(UserInfo::is_admin).unwrap_or(false)
    }
}

/// Session state shared through context and injected into `ApiClient`.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub status: RwSignal<AuthStatus>,
    notifier: Notifier,
}

impl AuthContext {
    pub fn new(notifier: Notifier) -> Self {
        Self {
            status: RwSignal::new(AuthStatus::Checking),
            notifier,
        }
    }

    /// Restores the session on startup. The backend may keep the session in
    /// a cookie, so the check runs even without a stored token.
    pub fn init(&self) {
        let this = *self;
        this.status.set(AuthStatus::Checking);
        spawn_local(async move {
            match api::check_session().await {
                Ok(user) => {
                    log::info!("Session restored for {}", user.display_name());
                    this.status.set(AuthStatus::Authenticated(user));
                }
                Err(e) => {
                    log::debug!("No session: {}", e);
                    if e == ApiError::NotAuthenticated {
                        storage::clear_tokens();
                    }
                    this.status.set(AuthStatus::Anonymous);
                }
            }
        });
    }

    /// Re-reads the signed-in user, e.g. after a profile change.
    pub fn refresh(&self) {
        let this = *self;
        spawn_local(async move {
            match api::get_current_user(ApiClient::new(this)).await {
                Ok(user) => this.status.set(AuthStatus::Authenticated(user)),
                Err(e) => log::warn!("Failed to refresh current user: {}", e),
            }
        });
    }

    pub async fn login(&self, email: String, password: String) -> Result<(), ApiError> {
        let response = api::login(email, password).await?;
        if let Some(token) = response.token.as_deref() {
            storage::save_access_token(token);
        }
        let user = match response.user {
            Some(user) => user,
            None => api::get_current_user(ApiClient::new(*self)).await?,
        };
        log::info!("Signed in as {}", user.display_name());
        self.status.set(AuthStatus::Authenticated(user));
        Ok(())
    }

    pub fn logout(&self) {
        let this = *self;
        spawn_local(async move {
            if let Err(e) = api::logout().await {
                log::warn!("Logout request failed: {}", e);
            }
            this.clear();
        });
    }

    /// Forgets the session locally.
    pub fn clear(&self) {
        storage::clear_tokens();
        self.status.set(AuthStatus::Anonymous);
    }

    /// Called by the API client on a 401.
    pub fn expire(&self) {
        let was_signed_in = self
            .status
            .with_untracked(|s| matches!(s, AuthStatus::Authenticated(_)));
        self.clear();
        if was_signed_in {
            self.notifier.warning(SESSION_EXPIRED);
        }
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.status.with(|s| s.user().cloned())
    }

    pub fn is_admin(&self) -> bool {
        self.status.with(AuthStatus::is_admin)
    }

    pub fn is_admin_untracked(&self) -> bool {
        self.status.with_untracked(AuthStatus::is_admin)
    }
}

/// Hook to access auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::users::UserRole;

    fn user(role: UserRole) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            first_name: Some("Ana".into()),
            last_name: Some("Gómez".into()),
            email: None,
            role,
            avatar_url: None,
        }
    }

    #[test]
    fn test_status_admin_flag() {
        assert!(AuthStatus::Authenticated(user(UserRole::Admin)).is_admin());
        assert!(!AuthStatus::Authenticated(user(UserRole::Editor)).is_admin());
        assert!(!AuthStatus::Anonymous.is_admin());
        assert!(!AuthStatus::Checking.is_admin());
    }

    #[test]
    fn test_status_user() {
        assert!(AuthStatus::Anonymous.user().is_none());
        let status = AuthStatus::Authenticated(user(UserRole::Editor));
        assert_eq!(status.user().map(|u| u.id.as_str()), Some("u1"));
    }
}
