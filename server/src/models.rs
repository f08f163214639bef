use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

/// Rol guardado en la cookie `user-role`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Unset,
    Operator,
    Admin,
    Other(String),
}

impl Role {
    pub fn parse(raw: Option<&str>) -> Role {
        match raw.map(str::trim) {
            None | Some("") => Role::Unset,
            Some("operator") => Role::Operator,
            Some("admin") => Role::Admin,
            Some(other) => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Role::Unset => None,
            Role::Operator => Some("operator"),
            Role::Admin => Some("admin"),
            Role::Other(other) => Some(other),
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_str() {
            Some(role) => serializer.serialize_some(role),
            None => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub role: Role,
    pub user_info: Option<Value>,
}
