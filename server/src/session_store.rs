// ============================================================================
// SESSION STORE - cookies de sesión (lectura, escritura y borrado)
// ============================================================================

use std::fmt;

use axum::http::{header, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::error::ServerError;
use crate::models::{Role, SessionState};

const EXPIRED: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SameSite::Strict => write!(f, "Strict"),
            SameSite::Lax => write!(f, "Lax"),
            SameSite::None => write!(f, "None"),
        }
    }
}

/// Atributos comunes a las tres cookies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookiePolicy {
    pub secure: bool,
    pub same_site: SameSite,
    pub path: String,
}

impl CookiePolicy {
    /// `Secure` solo en producción
    pub fn for_environment(production: bool) -> Self {
        Self {
            secure: production,
            same_site: SameSite::Lax,
            path: "/".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCookie {
    AuthToken,
    UserRole,
    UserInfo,
}

impl SessionCookie {
    pub const ALL: [SessionCookie; 3] = [
        SessionCookie::AuthToken,
        SessionCookie::UserRole,
        SessionCookie::UserInfo,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SessionCookie::AuthToken => "auth-token",
            SessionCookie::UserRole => "user-role",
            SessionCookie::UserInfo => "user-info",
        }
    }

    /// `user-info` lo lee el navegador; las otras dos no
    pub fn http_only(&self) -> bool {
        !matches!(self, SessionCookie::UserInfo)
    }
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    policy: CookiePolicy,
}

impl SessionStore {
    pub fn new(policy: CookiePolicy) -> Self {
        Self { policy }
    }

    /// Valor de una cookie en las cabeceras `Cookie` de la petición
    pub fn get(&self, headers: &HeaderMap, cookie: SessionCookie) -> Option<String> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|raw| raw.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == cookie.name())
            .map(|(_, value)| value.to_string())
            .filter(|value| !value.is_empty())
    }

    /// Cabecera `Set-Cookie`; `max_age` None deja una cookie de sesión
    pub fn set(
        &self,
        cookie: SessionCookie,
        value: &str,
        max_age: Option<i64>,
    ) -> Result<HeaderValue, ServerError> {
        let mut parts = vec![
            format!("{}={}", cookie.name(), value),
            format!("Path={}", self.policy.path),
        ];
        if let Some(max_age) = max_age {
            parts.push(format!("Max-Age={}", max_age));
            if max_age <= 0 {
                parts.push(format!("Expires={}", EXPIRED));
            }
        }
        parts.push(format!("SameSite={}", self.policy.same_site));
        if cookie.http_only() {
            parts.push("HttpOnly".to_string());
        }
        if self.policy.secure {
            parts.push("Secure".to_string());
        }

        Ok(HeaderValue::from_str(&parts.join("; "))?)
    }

    pub fn clear(&self, cookie: SessionCookie) -> Result<HeaderValue, ServerError> {
        self.set(cookie, "", Some(0))
    }

    /// Las tres cookies de sesión expiradas, en orden fijo
    pub fn clear_all(&self) -> Result<Vec<HeaderValue>, ServerError> {
        SessionCookie::ALL.iter().map(|c| self.clear(*c)).collect()
    }

    pub fn session(&self, headers: &HeaderMap) -> SessionState {
        let user_info = self
            .get(headers, SessionCookie::UserInfo)
            .and_then(|raw| decode_user_info(&raw));

        // Mismo criterio que el gate del cliente: hay sesión si `user-info` es un objeto JSON
        SessionState {
            is_authenticated: user_info.is_some(),
            role: Role::parse(self.get(headers, SessionCookie::UserRole).as_deref()),
            user_info,
        }
    }
}

/// `user-info` es JSON url-encoded; cualquier otra cosa se trata como ausente
pub fn decode_user_info(raw: &str) -> Option<Value> {
    let decoded = match urlencoding::decode(raw) {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::warn!("⚠️ [SESSION] user-info no es url-encoding válido: {}", e);
            return None;
        }
    };
    match serde_json::from_str::<Value>(&decoded) {
        Ok(value @ Value::Object(_)) => Some(value),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!("⚠️ [SESSION] user-info no es JSON: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store(production: bool) -> SessionStore {
        SessionStore::new(CookiePolicy::for_environment(production))
    }

    fn with_cookies(raw: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(raw).unwrap());
        headers
    }

    #[test]
    fn clear_all_expires_three_cookies() {
        let cleared = store(false).clear_all().unwrap();
        let cleared: Vec<&str> = cleared.iter().map(|v| v.to_str().unwrap()).collect();

        assert_eq!(cleared.len(), 3);
        assert!(cleared[0].starts_with("auth-token=;"));
        assert!(cleared[1].starts_with("user-role=;"));
        assert!(cleared[2].starts_with("user-info=;"));
        for value in &cleared {
            assert!(value.contains("Max-Age=0"));
            assert!(value.contains("Path=/"));
            assert!(value.contains("SameSite=Lax"));
            assert!(value.contains(EXPIRED));
            assert!(!value.contains("Secure"));
        }
    }

    #[test]
    fn http_only_except_user_info() {
        let cleared = store(false).clear_all().unwrap();
        assert!(cleared[0].to_str().unwrap().contains("HttpOnly"));
        assert!(cleared[1].to_str().unwrap().contains("HttpOnly"));
        assert!(!cleared[2].to_str().unwrap().contains("HttpOnly"));
    }

    #[test]
    fn secure_only_in_production() {
        for value in store(true).clear_all().unwrap() {
            assert!(value.to_str().unwrap().ends_with("Secure"));
        }
    }

    #[test]
    fn set_without_max_age_is_session_cookie() {
        let value = store(false).set(SessionCookie::UserRole, "admin", None).unwrap();
        assert_eq!(value.to_str().unwrap(), "user-role=admin; Path=/; SameSite=Lax; HttpOnly");
    }

    #[test]
    fn get_reads_named_cookie() {
        let headers = with_cookies("theme=dark; auth-token=abc123; user-role=operator");
        let store = store(false);
        assert_eq!(store.get(&headers, SessionCookie::AuthToken).as_deref(), Some("abc123"));
        assert_eq!(store.get(&headers, SessionCookie::UserRole).as_deref(), Some("operator"));
        assert_eq!(store.get(&headers, SessionCookie::UserInfo), None);
    }

    #[test]
    fn session_from_cookies() {
        let info = urlencoding::encode(r#"{"name":"Ana Pérez","email":"ana@example.com"}"#);
        let headers = with_cookies(&format!("auth-token=t; user-role=admin; user-info={}", info));

        let session = store(false).session(&headers);
        assert!(session.is_authenticated);
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.user_info, Some(json!({"name": "Ana Pérez", "email": "ana@example.com"})));
    }

    #[test]
    fn malformed_user_info_is_absent() {
        assert_eq!(decode_user_info("not-json"), None);
        assert_eq!(decode_user_info("%5B1%2C2%5D"), None);
        assert_eq!(decode_user_info(""), None);
    }

    #[test]
    fn token_without_readable_user_info_is_anonymous() {
        let headers = with_cookies("auth-token=t; user-info=not-json");
        let session = store(false).session(&headers);
        assert!(!session.is_authenticated);
        assert_eq!(session.user_info, None);
    }

    #[test]
    fn user_info_alone_is_authenticated() {
        let info = urlencoding::encode(r#"{"name":"Ana"}"#);
        let session = store(false).session(&with_cookies(&format!("user-info={}", info)));
        assert!(session.is_authenticated);
    }

    #[test]
    fn empty_headers_are_anonymous() {
        let session = store(false).session(&HeaderMap::new());
        assert_eq!(session, SessionState::default());
    }
}
