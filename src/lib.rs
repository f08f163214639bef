// ============================================================================
// OPS DASHBOARD - FRONTEND (YEW + WASM)
// ============================================================================
// - models: rutas, sesión y métricas (lógica pura)
// - polling: recurso con intervalo, sin dependencias del navegador
// - services: RPC, logout y lectura de cookies
// - hooks: estado reactivo sobre services/polling
// - components / pages: vista
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod polling;
pub mod services;
pub mod utils;

pub use app::App;
