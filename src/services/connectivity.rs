use serde::Serialize;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::MetricKind;
use crate::services::rpc_client::RpcClient;

/// Resultado estructurado de la prueba de conexión; nunca es un panic ni un Err
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionReport {
    pub success: bool,
    pub error: Option<String>,
}

impl ConnectionReport {
    pub fn ok() -> Self {
        Self { success: true, error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self { success: false, error: Some(error.into()) }
    }
}

/// Comprueba que el backend está configurado y responde a un RPC
pub async fn test_connection(config: &AppConfig) -> ConnectionReport {
    let client = match RpcClient::from_config(config) {
        Ok(client) => client,
        Err(ApiError::Config(e)) => {
            log::error!("❌ [CONN] {}", e);
            return ConnectionReport::failed(e.to_string());
        }
        Err(e) => return ConnectionReport::failed(e.to_string()),
    };
    match client.call_scalar(MetricKind::TotalOrders.rpc_name()).await {
        Ok(_) => {
            log::info!("✅ [CONN] Backend accesible");
            ConnectionReport::ok()
        }
        Err(e) => {
            log::warn!("⚠️ [CONN] Backend no accesible: {}", e);
            ConnectionReport::failed(e.to_string())
        }
    }
}
