pub mod app_icon;
pub mod draw;
pub mod state;
pub mod tray_icon;

pub use state::ConnectionState;
