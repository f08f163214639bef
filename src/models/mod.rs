pub mod metric;
pub mod route;
pub mod session;

pub use metric::{MetricKind, MetricReading};
pub use route::{classify_route, gate, shell_variant, GateDecision, RouteClass, ShellVariant};
pub use session::{SessionState, UserInfo};
