pub mod avatar;
pub mod data_table;
pub mod filter_dropdown;
pub mod kpi_card;
pub mod layout;
pub mod sidebar;
pub mod topbar;

pub use avatar::Avatar;
pub use data_table::DataTable;
pub use filter_dropdown::FilterDropdown;
pub use kpi_card::{format_count, format_percent, state_classes, CardColor, KpiCard, TrendType};
pub use layout::LayoutShell;
pub use sidebar::Sidebar;
pub use topbar::Topbar;
