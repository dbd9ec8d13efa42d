use serde::{Deserialize, Serialize};

use super::users::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login answer. The session may travel as a cookie only, so the bearer
/// token is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

/// Signed-in user as returned by `GET /api/auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(rename = "avatarUrl", default)]
    pub avatar_url: Option<String>,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn display_name(&self) -> String {
        let name = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        );
        let name = name.trim();
        if name.is_empty() {
            self.email.clone().unwrap_or_default()
        } else {
            name.to_string()
        }
    }

    /// Two-letter avatar fallback ("AG"), or the first letter of the email
    pub fn initials(&self) -> String {
        let first = self.first_name.as_deref().and_then(|s| s.chars().next());
        let last = self.last_name.as_deref().and_then(|s| s.chars().next());
        match (first, last) {
            (Some(f), Some(l)) => format!("{}{}", f, l).to_uppercase(),
            _ => self
                .email
                .as_deref()
                .and_then(|e| e.chars().next())
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_else(|| "?".to_string()),
        }
    }
}

/// Body of `PATCH /api/auth/me`. `avatarUrl: null` clears the avatar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: Option<String>,
}

impl UpdateProfileRequest {
    pub fn from_form(first_name: &str, last_name: &str, avatar_url: &str) -> Result<Self, String> {
        let first_name = first_name.trim();
        let last_name = last_name.trim();
        if first_name.is_empty() || last_name.is_empty() {
            return Err("Nombre y apellido son obligatorios".into());
        }
        let avatar_url = avatar_url.trim();
        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            avatar_url: (!avatar_url.is_empty()).then(|| avatar_url.to_string()),
        })
    }
}

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    #[serde(rename = "currentPassword")]
    pub current_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

/// Password change form with its confirmation field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChangeForm {
    pub fn validate(&self) -> Result<ChangePasswordRequest, String> {
        if self.new_password != self.confirm_password {
            return Err("La nueva contraseña y la confirmación no coinciden".into());
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "La contraseña debe tener al menos {} caracteres",
                MIN_PASSWORD_LEN
            ));
        }
        Ok(ChangePasswordRequest {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_from_wire() {
        let json = r#"{"_id":"u1","firstName":"Ana","lastName":"Gómez","email":"ana@x.com","role":"admin"}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert!(user.is_admin());
        assert_eq!(user.display_name(), "Ana Gómez");
        assert_eq!(user.initials(), "AG");
    }

    #[test]
    fn test_initials_fall_back_to_email() {
        let user = UserInfo {
            id: "u2".into(),
            first_name: None,
            last_name: None,
            email: Some("zoe@x.com".into()),
            role: UserRole::Editor,
            avatar_url: None,
        };
        assert_eq!(user.initials(), "Z");
        assert_eq!(user.display_name(), "zoe@x.com");
    }

    #[test]
    fn test_profile_request_requires_names_and_nulls_blank_avatar() {
        assert!(UpdateProfileRequest::from_form(" ", "Gómez", "").is_err());
        let req = UpdateProfileRequest::from_form(" Ana ", "Gómez", "  ").unwrap();
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"firstName":"Ana","lastName":"Gómez","avatarUrl":null}"#
        );
    }

    #[test]
    fn test_password_form() {
        let mut form = PasswordChangeForm {
            current_password: "old".into(),
            new_password: "abcdef".into(),
            confirm_password: "abcdeg".into(),
        };
        assert!(form.validate().unwrap_err().contains("no coinciden"));

        form.new_password = "abc".into();
        form.confirm_password = "abc".into();
        assert!(form.validate().unwrap_err().contains("al menos 6"));

        form.new_password = "abcdef".into();
        form.confirm_password = "abcdef".into();
        let req = form.validate().unwrap();
        assert_eq!(req.new_password, "abcdef");
    }
}
