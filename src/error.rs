use thiserror::Error;

/// Errores al hablar con el backend RPC
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// El procedimiento remoto devolvió un error explícito; el mensaje se muestra tal cual
    #[error("{0}")]
    Rpc(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u32),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not configured")]
    Missing(&'static str),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
