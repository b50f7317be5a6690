//! Notifications feature.

pub mod render;
pub mod state;
pub mod update;

pub use state::NotificationsState;
