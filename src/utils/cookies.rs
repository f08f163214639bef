// ============================================================================
// COOKIES - Lectura de document.cookie
// ============================================================================
// Solo lectura: las cookies de sesión las emite y borra el servidor.
// `auth-token` y `user-role` son httpOnly y nunca llegan aquí.
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

use crate::models::UserInfo;
use crate::utils::constants::COOKIE_USER_INFO;

/// Contenido bruto de `document.cookie` (vacío si no hay documento)
pub fn document_cookies() -> String {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default()
}

/// Busca el valor (sin decodificar) de una cookie en una cabecera `a=1; b=2`
pub fn cookie_value<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim())
}

/// Decodifica la cookie `user-info`: JSON de objeto codificado en URL.
/// Cualquier fallo degrada a "sin usuario".
pub fn parse_user_info(cookie_header: &str) -> Option<UserInfo> {
    let raw = cookie_value(cookie_header, COOKIE_USER_INFO)?;
    if raw.is_empty() {
        return None;
    }

    let decoded = match urlencoding::decode(raw) {
        Ok(decoded) => decoded,
        Err(e) => {
            log::warn!("⚠️ [AUTH] Cookie user-info con codificación inválida: {}", e);
            return None;
        }
    };

    match serde_json::from_str::<serde_json::Value>(&decoded) {
        Ok(value) => UserInfo::from_value(value),
        Err(e) => {
            log::warn!("⚠️ [AUTH] Cookie user-info no es JSON: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cookie_among_others() {
        let header = "theme=dark; user-info=abc;  other = x ";
        assert_eq!(cookie_value(header, "user-info"), Some("abc"));
        assert_eq!(cookie_value(header, "other"), Some("x"));
        assert_eq!(cookie_value(header, "missing"), None);
    }

    #[test]
    fn cookie_names_match_exactly() {
        assert_eq!(cookie_value("my-user-info=1", "user-info"), None);
    }

    #[test]
    fn user_info_absent_or_empty_is_none() {
        assert!(parse_user_info("").is_none());
        assert!(parse_user_info("theme=dark").is_none());
        assert!(parse_user_info("user-info=").is_none());
    }

    #[test]
    fn user_info_not_json_is_none() {
        assert!(parse_user_info("user-info=not%20json").is_none());
        assert!(parse_user_info("user-info=%7B%22name%22").is_none());
    }

    #[test]
    fn user_info_non_object_json_is_none() {
        assert!(parse_user_info("user-info=null").is_none());
        assert!(parse_user_info("user-info=42").is_none());
    }

    #[test]
    fn user_info_valid_url_encoded_json() {
        let encoded = urlencoding::encode(r#"{"name":"Ana Pérez","email":"ana@example.com"}"#);
        let header = format!("theme=dark; user-info={}", encoded);

        let user = parse_user_info(&header).expect("user");
        assert_eq!(user.display_name(), Some("Ana Pérez"));
        assert_eq!(user.email(), Some("ana@example.com"));
    }

    #[test]
    fn user_info_with_equals_in_value() {
        // `=` en el valor no corta la cookie
        let header = r#"user-info={"name":"a=b"}"#;
        let user = parse_user_info(header).expect("user");
        assert_eq!(user.display_name(), Some("a=b"));
    }
}
