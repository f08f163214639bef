// Utils compartidos

pub mod constants;
pub mod cookies;
pub mod navigation;
pub mod timeout;

pub use constants::*;
pub use cookies::{cookie_value, document_cookies, parse_user_info};
pub use navigation::{current_path, hard_navigate, push_path, ROUTE_CHANGED_EVENT};
pub use timeout::with_timeout;
