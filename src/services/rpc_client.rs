// ============================================================================
// RPC CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Procedimientos remotos estilo PostgREST:
//   POST {url}/rest/v1/rpc/{nombre}  body: {}
// Devuelven un escalar numérico o null.
// ============================================================================

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;

use crate::config::{AppConfig, BackendConfig};
use crate::error::ApiError;
use crate::utils::with_timeout;

#[derive(Clone, Debug, PartialEq)]
pub struct RpcClient {
    base_url: String,
    key: String,
    timeout_ms: u32,
}

impl RpcClient {
    pub fn new(backend: &BackendConfig, timeout_ms: u32) -> Self {
        Self {
            base_url: backend.url.clone(),
            key: backend.key.clone(),
            timeout_ms,
        }
    }

    /// Cliente a partir de la configuración global; falla si falta URL o clave
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        let backend = config.backend()?;
        Ok(Self::new(&backend, config.network_timeout_ms()))
    }

    pub fn rpc_url(&self, name: &str) -> String {
        format!("{}/rest/v1/rpc/{}", self.base_url, name)
    }

    /// Llama a un procedimiento sin argumentos que devuelve un contador
    pub async fn call_scalar(&self, name: &str) -> Result<Option<i64>, ApiError> {
        let request = self.send_rpc(name);
        with_timeout(request, TimeoutFuture::new(self.timeout_ms), self.timeout_ms).await
    }

    async fn send_rpc(&self, name: &str) -> Result<Option<i64>, ApiError> {
        let url = self.rpc_url(name);
        log::debug!("📡 [RPC] {}", name);

        let response = Request::post(&url)
            .header("apikey", &self.key)
            .header("Authorization", &format!("Bearer {}", self.key))
            .json(&serde_json::json!({}))?
            .send()
            .await?;

        let status = response.status();
        let ok = response.ok();
        let body = response.text().await?;

        if !ok {
            return Err(error_from_payload(status, &body));
        }

        parse_scalar(&body)
    }
}

/// Cuerpo de respuesta → contador. `null` o cuerpo vacío → `None`.
pub fn parse_scalar(body: &str) -> Result<Option<i64>, ApiError> {
    let body = body.trim();
    if body.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| ApiError::Parse(e.to_string()))?;

    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .map(Some)
            .ok_or_else(|| ApiError::Parse(format!("number out of range: {}", n))),
        // bigint puede llegar como string
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ApiError::Parse(format!("expected a number, got \"{}\"", s))),
        other => Err(ApiError::Parse(format!("expected a scalar, got {}", other))),
    }
}

/// Respuesta no-2xx → error. Si el cuerpo trae `message`, es un error del procedimiento.
pub fn error_from_payload(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
        });

    match message {
        Some(message) => ApiError::Rpc(message),
        None => ApiError::Http {
            status,
            message: if body.trim().is_empty() {
                "empty response".to_string()
            } else {
                body.trim().to_string()
            },
        },
    }
}
