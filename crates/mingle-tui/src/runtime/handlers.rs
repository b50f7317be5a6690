//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that call the simulated backend and
//! return the `UiEvent` carrying the result. The runtime spawns them via
//! `spawn_effect` and routes the returned event through the inbox; they
//! never touch state directly.

use mingle_core::backend::{Backend, NewProfile};

use crate::events::UiEvent;

pub async fn login(backend: Backend, email: String, password: String) -> UiEvent {
    let result = backend
        .login(&email, &password)
        .await
        .map_err(|e| e.to_string());
    UiEvent::LoginResult(result)
}

/// Verifies the code, then creates the account.
///
/// The registration variant reports a rejected code as "Invalid OTP"
/// (the reset flow keeps the verifier's own message).
pub async fn register(
    backend: Backend,
    profile: NewProfile,
    password: String,
    code: String,
) -> UiEvent {
    if backend.verify_code(&code).await.is_err() {
        return UiEvent::RegisterResult(Err("Invalid OTP".to_string()));
    }
    let result = backend
        .register(profile, &password)
        .await
        .map_err(|e| e.to_string());
    UiEvent::RegisterResult(result)
}

pub async fn request_password_reset(backend: Backend, email: String) -> UiEvent {
    let result = backend
        .request_password_reset(&email)
        .await
        .map_err(|e| e.to_string());
    UiEvent::ResetStepResult(result)
}

pub async fn verify_reset_code(backend: Backend, code: String) -> UiEvent {
    let result = backend.verify_code(&code).await.map_err(|e| e.to_string());
    UiEvent::ResetStepResult(result)
}

pub async fn complete_password_reset(backend: Backend, email: String, password: String) -> UiEvent {
    let result = backend
        .reset_password(&email, &password)
        .await
        .map_err(|e| e.to_string());
    UiEvent::ResetStepResult(result)
}

pub async fn load_nearby(backend: Backend) -> UiEvent {
    let result = backend.nearby_users().await.map_err(|e| e.to_string());
    UiEvent::NearbyLoaded(result)
}

pub async fn connect(backend: Backend, user_id: String) -> UiEvent {
    let result = backend.connect(&user_id).await.map_err(|e| e.to_string());
    UiEvent::ConnectResult { user_id, result }
}

#[cfg(test)]
mod tests {
    use mingle_core::config::Config;

    use super::*;

    fn backend() -> Backend {
        Backend::from_config(&Config::default())
    }

    fn profile() -> NewProfile {
        NewProfile {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            phone: "555".to_string(),
            bio: String::new(),
            interests: String::new(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_with_valid_code_creates_user() {
        let event = register(backend(), profile(), "secret1".to_string(), "123456".to_string()).await;
        let UiEvent::RegisterResult(Ok(user)) = event else {
            panic!("expected successful registration");
        };
        assert_eq!(user.email, "ann@x.com");
        assert!(!user.id.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_with_bad_code_reports_invalid_otp() {
        let event = register(backend(), profile(), "secret1".to_string(), "000000".to_string()).await;
        let UiEvent::RegisterResult(Err(message)) = event else {
            panic!("expected rejected registration");
        };
        assert_eq!(message, "Invalid OTP");
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_failure_message() {
        let event = login(backend(), "john@example.com".to_string(), "wrong".to_string()).await;
        let UiEvent::LoginResult(Err(message)) = event else {
            panic!("expected failed login");
        };
        assert_eq!(message, "Invalid email or password");
    }

    #[tokio::test(start_paused = true)]
    async fn test_verify_reset_code_keeps_verifier_message() {
        let event = verify_reset_code(backend(), "654321".to_string()).await;
        let UiEvent::ResetStepResult(Err(message)) = event else {
            panic!("expected rejected code");
        };
        assert_eq!(message, "Invalid verification code");
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_echoes_user_id() {
        let event = connect(backend(), "2".to_string()).await;
        let UiEvent::ConnectResult { user_id, result } = event else {
            panic!("expected connect result");
        };
        assert_eq!(user_id, "2");
        assert!(result.is_ok());
    }
}
