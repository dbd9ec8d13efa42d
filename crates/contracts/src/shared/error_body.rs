use serde::{Deserialize, Serialize};

/// Error payload returned by the backend on non-2xx responses.
///
/// Endpoints are not consistent: some send `{ "error": "..." }`, others
/// `{ "message": "..." }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// First non-blank message, `error` wins over `message`.
    pub fn into_message(self) -> Option<String> {
        self.error
            .filter(|m| !m.trim().is_empty())
            .or(self.message.filter(|m| !m.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_preferred() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error":"Cliente no encontrado","message":"x"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Cliente no encontrado"));
    }

    #[test]
    fn test_falls_back_to_message() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"  ","message":"Datos inválidos"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Datos inválidos"));
    }

    #[test]
    fn test_empty_body() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.into_message(), None);
    }
}
