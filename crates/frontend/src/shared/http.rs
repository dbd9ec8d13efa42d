//! HTTP client shared by every API module.
//!
//! All requests go through [`ApiClient`]: it attaches the bearer token,
//! sends cookies, decodes the backend's error body and expires the session
//! on a 401.

use contracts::shared::ApiErrorBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::{AbortController, RequestCredentials};

use super::api_utils::api_url;
use crate::system::auth::context::AuthContext;
use crate::system::auth::storage;

/// Generic message used when neither the backend nor the caller has one.
pub const UNKNOWN_ERROR: &str = "Error desconocido";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401: no session or the session expired.
    #[error("La sesión expiró. Iniciá sesión nuevamente.")]
    NotAuthenticated,
    /// 403: authenticated but not allowed.
    #[error("No tenés permisos para realizar esta acción.")]
    Unauthorized { message: Option<String> },
    #[error("{}", .message.as_deref().unwrap_or(UNKNOWN_ERROR))]
    Backend { status: u16, message: Option<String> },
    #[error("No se pudo conectar con el servidor: {0}")]
    Network(String),
    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
    #[error("El servidor tardó demasiado en responder")]
    Timeout,
}

impl ApiError {
    /// Text shown to the user: the backend's own message when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Backend {
                message: Some(m), ..
            }
            | ApiError::Unauthorized { message: Some(m) } => m.clone(),
            ApiError::NotAuthenticated => self.to_string(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotAuthenticated => Some(401),
            ApiError::Unauthorized { .. } => Some(403),
            ApiError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Maps a non-2xx status and its raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(ApiErrorBody::into_message);
        match status {
            401 => ApiError::NotAuthenticated,
            403 => ApiError::Unauthorized { message },
            _ => ApiError::Backend { status, message },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Client bound to the session. `Copy`, so it can be moved into closures.
#[derive(Clone, Copy)]
pub struct ApiClient {
    auth: Option<AuthContext>,
    timeout_ms: Option<u32>,
}

impl ApiClient {
    pub fn new(auth: AuthContext) -> Self {
        Self {
            auth: Some(auth),
            timeout_ms: None,
        }
    }

    /// Client taken from the surrounding `AuthContext`.
    pub fn from_context() -> Self {
        Self::new(crate::system::auth::context::use_auth())
    }

    /// Client that never touches the session on a 401. Used by the login
    /// and session-check calls.
    pub fn detached() -> Self {
        Self {
            auth: None,
            timeout_ms: None,
        }
    }

    /// Aborts the request after `ms` milliseconds.
    pub fn with_timeout(mut self, ms: u32) -> Self {
        self.timeout_ms = Some(ms);
        self
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Verb::Get, path, None::<&()>).await?;
        decode(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(Verb::Post, path, Some(body)).await?;
        decode(response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(Verb::Put, path, Some(body)).await?;
        decode(response).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(Verb::Patch, path, Some(body)).await?;
        decode(response).await
    }

    /// POST whose answer body is ignored.
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(Verb::Post, path, Some(body)).await.map(|_| ())
    }

    /// PUT whose answer body is ignored.
    pub async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(Verb::Put, path, Some(body)).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Verb::Delete, path, None::<&()>).await.map(|_| ())
    }

    /// Raw response body, for binary downloads.
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.send(Verb::Get, path, None::<&()>).await?;
        response
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn builder(&self, verb: Verb, path: &str) -> RequestBuilder {
        let url = api_url(path);
        let builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Patch => Request::patch(&url),
            Verb::Delete => Request::delete(&url),
        }
        .credentials(RequestCredentials::Include)
        .header("Accept", "application/json");

        match storage::get_access_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn send<B: Serialize>(
        &self,
        verb: Verb,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        let mut builder = self.builder(verb, path);

        let controller = match self.timeout_ms {
            Some(ms) => {
                let controller =
                    AbortController::new().map_err(|e| ApiError::Network(format!("{:?}", e)))?;
                builder = builder.abort_signal(Some(&controller.signal()));
                let timer = controller.clone();
                spawn_local(async move {
                    TimeoutFuture::new(ms).await;
                    timer.abort();
                });
                Some(controller)
            }
            None => None,
        };

        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?;

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                if controller.map(|c| c.signal().aborted()).unwrap_or(false) {
                    log::warn!("{:?} {} timed out", verb, path);
                    return Err(ApiError::Timeout);
                }
                log::error!("{:?} {} failed: {}", verb, path, e);
                return Err(ApiError::Network(e.to_string()));
            }
        };

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let error = ApiError::from_status(status, &text);
        log::warn!("{:?} {} -> {}: {}", verb, path, status, error);

        if error == ApiError::NotAuthenticated {
            if let Some(auth) = self.auth {
                auth.expire();
            }
        }
        Err(error)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    // Some endpoints answer 204 or an empty body on success
    let text = if text.trim().is_empty() { "null" } else { text.as_str() };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_prefers_error_field() {
        let err = ApiError::from_status(400, r#"{"error":"Cliente no encontrado"}"#);
        assert_eq!(
            err,
            ApiError::Backend {
                status: 400,
                message: Some("Cliente no encontrado".to_string())
            }
        );
        assert_eq!(err.user_message("x"), "Cliente no encontrado");
    }

    #[test]
    fn test_from_status_uses_message_field() {
        let err = ApiError::from_status(500, r#"{"message":"Error interno"}"#);
        assert_eq!(err.user_message("x"), "Error interno");
    }

    #[test]
    fn test_non_json_body_falls_back() {
        let err = ApiError::from_status(502, "<html>Bad gateway</html>");
        assert_eq!(err.user_message("No se pudo guardar"), "No se pudo guardar");
        assert_eq!(err.to_string(), UNKNOWN_ERROR);
    }

    #[test]
    fn test_auth_statuses() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::NotAuthenticated);
        let forbidden = ApiError::from_status(403, "{}");
        assert_eq!(forbidden, ApiError::Unauthorized { message: None });
        assert_eq!(forbidden.status(), Some(403));
    }

    #[test]
    fn test_transport_errors_use_fallback() {
        assert_eq!(ApiError::Timeout.user_message("Falló"), "Falló");
        assert_eq!(ApiError::Network("down".into()).user_message("Falló"), "Falló");
    }
}
