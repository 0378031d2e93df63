//! UI Components
//!
//! Reusable Leptos components.

mod dashboard_panel;
mod nav_bar;
mod notices;
mod product_panel;
mod record_list;
mod selects;
mod server_status;
mod setting_panel;
mod task_panel;

pub use dashboard_panel::DashboardPanel;
pub use nav_bar::{NavBar, PanelSection};
pub use notices::Notices;
pub use product_panel::ProductPanel;
pub use record_list::RecordList;
pub use selects::{PrioritySelect, StatusSelect};
pub use server_status::ServerStatus;
pub use setting_panel::SettingPanel;
pub use task_panel::TaskPanel;
