use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Editor,
}

impl UserRole {
    pub fn all() -> [UserRole; 2] {
        [UserRole::Admin, UserRole::Editor]
    }

    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Editor => "editor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrador",
            UserRole::Editor => "Editor",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.code() == code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(rename = "avatarUrl", default)]
    pub avatar_url: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserDto {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    #[serde(rename = "avatarUrl", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl CreateUserDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err("Nombre y apellido son obligatorios".into());
        }
        if !self.email.contains('@') {
            return Err("El email no es válido".into());
        }
        if self.password.chars().count() < super::auth::MIN_PASSWORD_LEN {
            return Err(format!(
                "La contraseña debe tener al menos {} caracteres",
                super::auth::MIN_PASSWORD_LEN
            ));
        }
        Ok(())
    }
}

/// Body of `PATCH /api/users/:id`. `avatarUrl: null` clears the avatar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserDto {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: Option<String>,
}

impl UpdateUserDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err("Nombre y apellido son obligatorios".into());
        }
        if !self.email.contains('@') {
            return Err("El email no es válido".into());
        }
        Ok(())
    }
}

impl From<&User> for UpdateUserDto {
    fn from(u: &User) -> Self {
        Self {
            first_name: u.first_name.clone(),
            last_name: u.last_name.clone(),
            email: u.email.clone(),
            role: u.role,
            avatar_url: u.avatar_url.clone(),
        }
    }
}

/// Query parameters of `GET /api/users`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserListQuery {
    pub page: usize,
    pub limit: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_values() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), r#""admin""#);
        let role: UserRole = serde_json::from_str(r#""editor""#).unwrap();
        assert_eq!(role.label(), "Editor");
    }

    #[test]
    fn test_create_user_validation() {
        let mut dto = CreateUserDto {
            first_name: "Ana".into(),
            last_name: "Gómez".into(),
            email: "ana@x.com".into(),
            password: "123".into(),
            role: UserRole::Editor,
            avatar_url: None,
        };
        assert!(dto.validate().is_err());
        dto.password = "123456".into();
        assert!(dto.validate().is_ok());
        dto.email = "ana".into();
        assert!(dto.validate().is_err());
    }
}
