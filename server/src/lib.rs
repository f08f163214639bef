//! Servicio de sesión del dashboard: logout, introspección de sesión y health.
//!
//! Las cookies las crea el proveedor de identidad en el login; aquí solo se
//! leen y se expiran.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod session_store;

pub use api::{router, start_server, AppState};
pub use session_store::{CookiePolicy, SameSite, SessionCookie, SessionStore};
