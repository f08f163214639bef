use clap::Parser;

use crate::session_store::CookiePolicy;

#[derive(Parser, Debug, Clone)]
#[command(name = "ops-dashboard-server")]
#[command(about = "Session endpoints for the ops dashboard (logout, session, health)")]
pub struct Args {
    #[arg(short, long, env = "DASHBOARD_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    #[arg(long, env = "DASHBOARD_SERVER_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Marca las cookies como `Secure`
    #[arg(long, env = "DASHBOARD_PRODUCTION")]
    pub production: bool,

    /// Orígenes permitidos para CORS (separados por comas); vacío = mismo origen
    #[arg(long, env = "DASHBOARD_ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,
}

impl Args {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    pub fn cookie_policy(&self) -> CookiePolicy {
        CookiePolicy::for_environment(self.production)
    }
}
