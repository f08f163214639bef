use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Información de usuario de la cookie `user-info`.
/// El contenido es opaco: solo se garantiza que es un objeto JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserInfo(Map<String, Value>);

impl UserInfo {
    /// Solo acepta objetos JSON
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    fn str_field(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|k| self.0.get(*k))
            .filter_map(Value::as_str)
            .map(str::trim)
            .find(|s| !s.is_empty())
    }

    pub fn display_name(&self) -> Option<&str> {
        self.str_field(&["name", "full_name", "username"])
    }

    pub fn email(&self) -> Option<&str> {
        self.str_field(&["email"])
    }
}

/// Estado de sesión visible desde el cliente
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub user: Option<UserInfo>,
}
