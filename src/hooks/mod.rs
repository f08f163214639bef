pub mod use_auth;
pub mod use_connection;
pub mod use_current_path;
pub mod use_metrics;
pub mod use_polling;

pub use use_auth::{use_auth, AuthState, UseAuthHandle};
pub use use_connection::use_connection_status;
pub use use_current_path::use_current_path;
pub use use_metrics::{
    use_metric, use_today_metrics, use_today_total_orders, use_today_work_cancel,
    use_today_work_complete, use_today_work_fail, TodayMetrics,
};
pub use use_polling::use_polling;
