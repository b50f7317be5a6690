//! Messages feature: conversation list and chat threads.

pub mod render;
pub mod state;
pub mod update;

pub use state::MessagesState;
