use wasm_bindgen::JsValue;
use web_sys::{window, Event};

/// Evento propio que se lanza tras un pushState para que los hooks relean la ruta
pub const ROUTE_CHANGED_EVENT: &str = "routechange";

pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| "/".to_string())
}

/// Navegación dentro de la app (sin recargar)
pub fn push_path(path: &str) {
    let Some(win) = window() else {
        return;
    };

    if let Ok(history) = win.history() {
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
            log::error!("❌ [NAV] pushState a {} falló: {:?}", path, e);
            return;
        }
    }

    match Event::new(ROUTE_CHANGED_EVENT) {
        Ok(event) => {
            let _ = win.dispatch_event(&event);
        }
        Err(e) => log::error!("❌ [NAV] No se pudo crear evento de ruta: {:?}", e),
    }
}

/// Navegación completa: descarta todo el estado en memoria
pub fn hard_navigate(path: &str) {
    if let Some(win) = window() {
        log::info!("↪️ [NAV] Redirigiendo a {}", path);
        if let Err(e) = win.location().set_href(path) {
            log::error!("❌ [NAV] No se pudo redirigir a {}: {:?}", path, e);
        }
    }
}
