/// Rutas accesibles sin sesión
pub const PUBLIC_PATHS: &[&str] = &["/", "/login"];

/// Destino tras logout
pub const PUBLIC_ENTRY_PATH: &str = "/";

/// Destino cuando una ruta autenticada no tiene sesión
pub const LOGIN_PATH: &str = "/login";

pub const DASHBOARD_PATH: &str = "/dashboard";
pub const MONITORING_PATH: &str = "/monitoring";

/// Primer segmento que selecciona el shell de monitorización
pub const MONITORING_SEGMENT: &str = "monitoring";

pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
pub const LOGOUT_TIMEOUT_MS: u32 = 5_000;

/// Única cookie de sesión legible desde el cliente (las otras dos son httpOnly)
pub const COOKIE_USER_INFO: &str = "user-info";

/// Filas visibles por página en las tablas de monitorización
pub const TABLE_PAGE_SIZE: usize = 10;

/// Endpoint del proveedor de identidad; crea las cookies de sesión
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
