use std::future::Future;

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::{SessionState, UserInfo};
use crate::services::rpc_client::error_from_payload;
use crate::utils::{
    document_cookies, hard_navigate, parse_user_info, with_timeout, LOGOUT_ENDPOINT,
    LOGOUT_TIMEOUT_MS, PUBLIC_ENTRY_PATH,
};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LogoutResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Pide al servidor que borre las cookies de sesión
pub async fn request_logout() -> Result<LogoutResponse, ApiError> {
    let response = Request::post(LOGOUT_ENDPOINT).send().await?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(error_from_payload(status, &body));
    }

    response.json::<LogoutResponse>().await.map_err(ApiError::from)
}

/// Espera a `request` y navega a la entrada pública pase lo que pase
pub async fn logout_then<F, N>(request: F, navigate: N)
where
    F: Future<Output = Result<LogoutResponse, ApiError>>,
    N: FnOnce(&str),
{
    match request.await {
        Ok(response) => {
            log::info!("👋 [AUTH] Logout: {}", response.message.as_deref().unwrap_or("ok"));
        }
        Err(e) => {
            // Si la petición no llegó al servidor las cookies siguen hasta que expiren
            log::warn!("⚠️ [AUTH] Logout remoto falló, se redirige igualmente: {}", e);
        }
    }
    navigate(PUBLIC_ENTRY_PATH);
}

pub async fn logout() {
    let request = with_timeout(
        request_logout(),
        TimeoutFuture::new(LOGOUT_TIMEOUT_MS),
        LOGOUT_TIMEOUT_MS,
    );
    logout_then(request, hard_navigate).await;
}

/// Usuario de la cookie `user-info`; `None` si falta o no se puede leer
pub fn current_user() -> Option<UserInfo> {
    parse_user_info(&document_cookies())
}

pub fn is_authenticated() -> bool {
    is_authenticated_from(&document_cookies())
}

/// Hay sesión si `user-info` decodifica a un objeto JSON
pub fn is_authenticated_from(cookie_header: &str) -> bool {
    parse_user_info(cookie_header).is_some()
}

/// Estado de sesión a partir de una cabecera de cookies
pub fn session_from(cookie_header: &str) -> SessionState {
    SessionState {
        is_authenticated: is_authenticated_from(cookie_header),
        user: parse_user_info(cookie_header),
    }
}

pub fn current_session() -> SessionState {
    session_from(&document_cookies())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready};
    use std::cell::RefCell;

    fn run_logout<F>(request: F) -> Vec<String>
    where
        F: Future<Output = Result<LogoutResponse, ApiError>>,
    {
        let visited = RefCell::new(Vec::new());
        block_on(logout_then(request, |path| visited.borrow_mut().push(path.to_string())));
        visited.into_inner()
    }

    #[test]
    fn navigates_after_success() {
        let ok = LogoutResponse {
            success: true,
            message: Some("Logged out successfully".to_string()),
        };
        assert_eq!(run_logout(ready(Ok(ok))), vec!["/"]);
    }

    #[test]
    fn navigates_after_server_error() {
        let err = ApiError::Http { status: 500, message: "boom".to_string() };
        assert_eq!(run_logout(ready(Err(err))), vec!["/"]);
    }

    #[test]
    fn navigates_after_network_failure() {
        let err = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(run_logout(ready(Err(err))), vec!["/"]);
    }

    #[test]
    fn navigates_after_timeout() {
        let request = with_timeout(pending::<Result<LogoutResponse, ApiError>>(), ready(()), 10);
        assert_eq!(run_logout(request), vec!["/"]);
    }

    #[test]
    fn authenticated_only_with_object_user_info() {
        assert!(!is_authenticated_from(""));
        assert!(!is_authenticated_from("auth-token=abc; user-role=admin"));
        assert!(!is_authenticated_from("user-info="));
        assert!(!is_authenticated_from("user-info=not-json"));
        assert!(!is_authenticated_from("user-info=%5B1%2C2%5D"));
        assert!(is_authenticated_from("theme=dark; user-info=%7B%22name%22%3A%22Lee%22%7D"));
    }

    #[test]
    fn session_from_cookie_header() {
        let state = session_from("user-info=%7B%22name%22%3A%22Lee%22%7D");
        assert!(state.is_authenticated);
        assert_eq!(state.user.as_ref().and_then(|u| u.display_name()), Some("Lee"));

        assert_eq!(session_from("auth-token=abc"), SessionState::default());
    }

    #[test]
    fn logout_response_parses_server_body() {
        let parsed: LogoutResponse =
            serde_json::from_str(r#"{"success":true,"message":"Logged out successfully"}"#).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.message.as_deref(), Some("Logged out successfully"));
    }
}
