//! Simulated backend.
//!
//! Every call sleeps a configured latency and then resolves against the
//! fixtures. A real implementation would replace these with network calls
//! while keeping the same result shapes; the TUI never sees anything but
//! `Result<T, ApiError>`.

use std::time::Duration;

use tokio::time::sleep;
use uuid::Uuid;

use crate::config::Config;
use crate::fixtures;
use crate::types::User;

/// The only code the simulated verifier accepts.
pub const VALID_CODE: &str = "123456";

/// The password every fixture account accepts.
pub const DEMO_PASSWORD: &str = "password";

/// Errors surfaced by the simulated backend.
///
/// The UI renders these as plain strings; no distinction is made between a
/// malformed-input rejection and a simulated server rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Email/password pair did not match a fixture account.
    InvalidCredentials,
    /// Verification code did not match [`VALID_CODE`].
    InvalidCode,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::InvalidCredentials => write!(f, "Invalid email or password"),
            ApiError::InvalidCode => write!(f, "Invalid verification code"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Profile data collected by the registration form.
#[derive(Debug, Clone, Default)]
pub struct NewProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    /// Raw comma-separated interests string, parsed on registration.
    pub interests: String,
}

impl NewProfile {
    /// Splits the raw interests string on commas, trimming and dropping
    /// empty entries.
    pub fn parsed_interests(&self) -> Vec<String> {
        self.interests
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

/// The simulated service. Cheap to clone; carries only the latencies.
#[derive(Debug, Clone)]
pub struct Backend {
    /// Delay for login/register/connect calls (the original used ~1000ms).
    auth_latency: Duration,
    /// Delay for the reset-flow calls (the original used ~1500ms).
    reset_latency: Duration,
}

impl Backend {
    pub fn from_config(config: &Config) -> Self {
        Self {
            auth_latency: Duration::from_millis(config.auth_latency_ms),
            reset_latency: Duration::from_millis(config.reset_latency_ms),
        }
    }

    /// Signs in against the fixture accounts.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        sleep(self.auth_latency).await;
        tracing::debug!(email, "simulated login");
        fixtures::login_users()
            .into_iter()
            .find(|u| u.email == email)
            .filter(|_| password == DEMO_PASSWORD)
            .ok_or(ApiError::InvalidCredentials)
    }

    /// Creates a new account. Always succeeds; the identifier is random.
    pub async fn register(&self, profile: NewProfile, _password: &str) -> Result<User, ApiError> {
        sleep(self.auth_latency).await;
        tracing::debug!(email = profile.email, "simulated registration");
        Ok(User {
            id: Uuid::new_v4().to_string(),
            name: profile.name.clone(),
            email: profile.email.clone(),
            bio: profile.bio.clone(),
            interests: profile.parsed_interests(),
            location: None,
            is_visible: true,
        })
    }

    /// Sends the reset code. Always succeeds.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        sleep(self.reset_latency).await;
        tracing::debug!(email, "simulated reset request");
        Ok(())
    }

    /// Checks a verification code against the fixed demo value.
    pub async fn verify_code(&self, code: &str) -> Result<(), ApiError> {
        sleep(self.reset_latency).await;
        if code == VALID_CODE {
            Ok(())
        } else {
            Err(ApiError::InvalidCode)
        }
    }

    /// Applies the new password. Always succeeds.
    pub async fn reset_password(&self, email: &str, _password: &str) -> Result<(), ApiError> {
        sleep(self.reset_latency).await;
        tracing::debug!(email, "simulated password reset");
        Ok(())
    }

    /// Loads the nearby users.
    pub async fn nearby_users(&self) -> Result<Vec<User>, ApiError> {
        sleep(self.auth_latency).await;
        Ok(fixtures::nearby_users())
    }

    /// Sends a connection request. Always succeeds.
    pub async fn connect(&self, user_id: &str) -> Result<(), ApiError> {
        sleep(self.auth_latency).await;
        tracing::debug!(user_id, "simulated connection request");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> Backend {
        Backend::from_config(&Config::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_known_user() {
        let user = backend().login("john@example.com", "password").await.unwrap();
        assert_eq!(user.name, "John Doe");
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_wrong_password() {
        let err = backend().login("john@example.com", "nope").await.unwrap_err();
        assert_eq!(err, ApiError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_unknown_email() {
        let err = backend().login("ghost@example.com", "password").await.unwrap_err();
        assert_eq!(err, ApiError::InvalidCredentials);
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_generates_unique_ids() {
        let b = backend();
        let profile = NewProfile {
            name: "Ann".into(),
            email: "ann@x.com".into(),
            phone: "555".into(),
            bio: String::new(),
            interests: "Hiking, Reading , ,Travel".into(),
        };
        let a = b.register(profile.clone(), "secret1").await.unwrap();
        let c = b.register(profile, "secret1").await.unwrap();
        assert_ne!(a.id, c.id);
        assert_eq!(a.interests, vec!["Hiking", "Reading", "Travel"]);
        assert!(a.is_visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_verify_code_accepts_only_demo_value() {
        let b = backend();
        assert!(b.verify_code("123456").await.is_ok());
        assert_eq!(b.verify_code("000000").await.unwrap_err(), ApiError::InvalidCode);
        assert_eq!(b.verify_code("abcdef").await.unwrap_err(), ApiError::InvalidCode);
    }

    #[tokio::test(start_paused = true)]
    async fn test_nearby_users_resolve() {
        let users = backend().nearby_users().await.unwrap();
        assert_eq!(users.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_comes_from_config() {
        let config = Config {
            auth_latency_ms: 250,
            ..Config::default()
        };
        let b = Backend::from_config(&config);
        let start = tokio::time::Instant::now();
        b.connect("1").await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_millis(250));
    }
}
