//! Pure per-step validators.
//!
//! `validate(step, fields)` returns a map of field → message; an empty map
//! means the step is valid. Only the active step is ever checked — there is
//! no cross-step revalidation (matches the source client; see DESIGN.md).

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::fields::{FormFields, field};

/// Field name → human-readable message.
pub type ErrorMap = BTreeMap<String, String>;

/// Loose email shape check, same pattern the original client used.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email regex"));

/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Exact verification code length.
pub const CODE_LEN: usize = 6;

/// One step of an auth flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Name, email, phone (bio and interests are optional, never validated).
    Identity,
    /// Password and confirmation.
    Credentials,
    /// Six-character one-time code.
    Verification,
    /// Reset flow entry: the account email.
    ResetEmail,
}

/// Validates one step against the current field values.
pub fn validate(step: Step, fields: &FormFields) -> ErrorMap {
    let mut errors = ErrorMap::new();
    match step {
        Step::Identity => {
            if fields.value(field::NAME).trim().is_empty() {
                errors.insert(field::NAME.into(), "Name is required".into());
            }
            let email = fields.value(field::EMAIL);
            if email.trim().is_empty() {
                errors.insert(field::EMAIL.into(), "Email is required".into());
            } else if !EMAIL_RE.is_match(email) {
                errors.insert(field::EMAIL.into(), "Email is invalid".into());
            }
            if fields.value(field::PHONE).trim().is_empty() {
                errors.insert(field::PHONE.into(), "Phone number is required".into());
            }
        }
        Step::Credentials => {
            let password = fields.value(field::PASSWORD);
            if password.is_empty() {
                errors.insert(field::PASSWORD.into(), "Password is required".into());
            } else if password.chars().count() < MIN_PASSWORD_LEN {
                errors.insert(
                    field::PASSWORD.into(),
                    "Password must be at least 6 characters".into(),
                );
            }
            if password != fields.value(field::CONFIRM_PASSWORD) {
                errors.insert(
                    field::CONFIRM_PASSWORD.into(),
                    "Passwords do not match".into(),
                );
            }
        }
        Step::Verification => {
            let code = fields.value(field::CODE);
            if code.trim().is_empty() {
                errors.insert(field::CODE.into(), "OTP is required".into());
            } else if code.chars().count() != CODE_LEN {
                errors.insert(field::CODE.into(), "OTP must be 6 digits".into());
            }
        }
        Step::ResetEmail => {
            if fields.value(field::EMAIL).trim().is_empty() {
                errors.insert(
                    field::EMAIL.into(),
                    "Please enter your email address".into(),
                );
            }
        }
    }
    errors
}
