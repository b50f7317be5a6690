//! UI event types.
//!
//! Events are the only input to the reducer. They come from three sources:
//! terminal input, the tick timer, and async backend handlers reporting
//! their results through the runtime inbox.

use mingle_core::types::User;

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick for spinners and toast expiry.
    Tick,
    /// Raw terminal event (keys, resize).
    Terminal(crossterm::event::Event),
    /// Sign-in finished.
    LoginResult(Result<User, String>),
    /// Registration (code check plus account creation) finished.
    RegisterResult(Result<User, String>),
    /// One stage of the password-reset flow finished.
    ///
    /// The reducer derives which stage from the flow's current step; only
    /// one reset submission can be in flight at a time.
    ResetStepResult(Result<(), String>),
    /// Nearby user list finished loading.
    NearbyLoaded(Result<Vec<User>, String>),
    /// Connection request finished.
    ConnectResult {
        user_id: String,
        result: Result<(), String>,
    },
}
