//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.

use mingle_core::backend::NewProfile;

/// Effects returned by the reducer for the runtime to execute.
///
/// The reducer returns `Vec<UiEffect>` from each update call.
/// The runtime executes these effects after rendering.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Sign in with the given credentials.
    SubmitLogin { email: String, password: String },

    /// Verify the code and create the account.
    SubmitRegistration {
        profile: NewProfile,
        password: String,
        code: String,
    },

    /// Send the reset code to the given address (reset flow, step 1).
    RequestPasswordReset { email: String },

    /// Check the reset code (reset flow, step 2).
    VerifyResetCode { code: String },

    /// Apply the new password (reset flow, step 3).
    CompletePasswordReset { email: String, password: String },

    /// Load the nearby user list.
    LoadNearby,

    /// Send a connection request to a nearby user.
    Connect { user_id: String },
}
