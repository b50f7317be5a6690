//! Authentication feature (welcome, login, register, password reset).

pub mod render;
pub mod state;
pub mod update;

pub use state::{AuthScreen, LoginState, RegisterState, ResetState, StepForm, WelcomeState};
