use crate::utils::constants::{LOGIN_PATH, MONITORING_SEGMENT, PUBLIC_PATHS};

/// Clasificación de una ruta por el gate de sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    Authenticated,
}

/// Layout que envuelve la página
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellVariant {
    /// Solo el contenido, sin navegación
    Bare,
    Dashboard,
    Monitoring,
}

impl ShellVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            ShellVariant::Bare => "shell-bare",
            ShellVariant::Dashboard => "shell-dashboard",
            ShellVariant::Monitoring => "shell-monitoring",
        }
    }

    pub fn has_chrome(&self) -> bool {
        !matches!(self, ShellVariant::Bare)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    Redirect(&'static str),
}

/// Pertenencia exacta a la lista de rutas públicas
pub fn classify_route(path: &str) -> RouteClass {
    if PUBLIC_PATHS.iter().any(|public| *public == path) {
        RouteClass::Public
    } else {
        RouteClass::Authenticated
    }
}

pub fn shell_variant(path: &str) -> ShellVariant {
    match classify_route(path) {
        RouteClass::Public => ShellVariant::Bare,
        RouteClass::Authenticated => {
            let first_segment = path.trim_start_matches('/').split('/').next().unwrap_or("");
            if first_segment == MONITORING_SEGMENT {
                ShellVariant::Monitoring
            } else {
                ShellVariant::Dashboard
            }
        }
    }
}

/// Las rutas autenticadas sin cookie de usuario se mandan al login
pub fn gate(path: &str, has_user: bool) -> GateDecision {
    match (classify_route(path), has_user) {
        (RouteClass::Public, _) | (RouteClass::Authenticated, true) => GateDecision::Render,
        (RouteClass::Authenticated, false) => GateDecision::Redirect(LOGIN_PATH),
    }
}
