//! Profile feature: view and edit the signed-in user's profile.

pub mod render;
pub mod state;
pub mod update;

pub use state::{ProfileRow, ProfileState};
pub use update::ProfileAction;
