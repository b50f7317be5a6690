//! Nearby feature: discover people around you and send connection requests.

pub mod render;
pub mod state;
pub mod update;

pub use state::{NearbyState, NearbyStatus};
