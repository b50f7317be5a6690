//! Events feature: community event list, details, and RSVPs.

pub mod render;
pub mod state;
pub mod update;

pub use state::EventsState;
