// ============================================================================
// PÁGINAS - una por ruta; el shell lo pone el App
// ============================================================================

pub mod dashboard;
pub mod landing;
pub mod login;
pub mod monitoring;
pub mod refresh_log;

pub use dashboard::{ConfigErrorPanel, DashboardPage, MetricsGrid};
pub use landing::{LandingPage, NotFoundPage};
pub use login::LoginPage;
pub use monitoring::MonitoringPage;
pub use refresh_log::{RefreshAction, RefreshEntry, RefreshLog};

use crate::utils::{DASHBOARD_PATH, LOGIN_PATH, MONITORING_PATH, PUBLIC_ENTRY_PATH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Login,
    Dashboard,
    Monitoring,
    NotFound,
}

impl Page {
    pub fn for_path(path: &str) -> Page {
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        match trimmed {
            p if p == PUBLIC_ENTRY_PATH => Page::Landing,
            p if p == LOGIN_PATH => Page::Login,
            p if p == DASHBOARD_PATH => Page::Dashboard,
            p if p == MONITORING_PATH || p.starts_with("/monitoring/") => Page::Monitoring,
            _ => Page::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_by_path() {
        assert_eq!(Page::for_path("/"), Page::Landing);
        assert_eq!(Page::for_path("/login"), Page::Login);
        assert_eq!(Page::for_path("/dashboard"), Page::Dashboard);
        assert_eq!(Page::for_path("/dashboard/"), Page::Dashboard);
        assert_eq!(Page::for_path("/monitoring"), Page::Monitoring);
        assert_eq!(Page::for_path("/monitoring/orders"), Page::Monitoring);
        assert_eq!(Page::for_path("/settings"), Page::NotFound);
    }
}
