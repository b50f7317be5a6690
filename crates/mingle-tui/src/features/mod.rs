//! Feature slices for the TUI (state/update/render per slice).

pub mod auth;
pub mod events;
pub mod messages;
pub mod nearby;
pub mod notifications;
pub mod profile;
