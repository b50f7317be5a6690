//! Field store: field name → value, field name → error.

use std::collections::BTreeMap;

use super::validate::ErrorMap;

/// Well-known field names used by the auth flows.
pub mod field {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const BIO: &str = "bio";
    pub const INTERESTS: &str = "interests";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirm_password";
    pub const CODE: &str = "code";
}

/// Form values and their validation errors.
///
/// Writing a field clears that field's error and the submission banner
/// (optimistic error-clearing, independent of revalidation). Validation
/// replaces the error map wholesale.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    values: BTreeMap<String, String>,
    errors: ErrorMap,
    banner: Option<String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value, clearing any existing error for that field and
    /// any submission banner.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
        self.errors.remove(field);
        self.banner = None;
    }

    /// Returns the current value, or `""` when the field was never written.
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map_or("", String::as_str)
    }

    /// Returns the inline error for a field, if any.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Replaces the whole error map (validation outcome).
    pub fn set_errors(&mut self, errors: ErrorMap) {
        self.errors = errors;
    }

    /// Sets a single error without touching the others.
    pub fn set_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_string(), message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The submission error banner, if any.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn set_banner(&mut self, message: impl Into<String>) {
        self.banner = Some(message.into());
    }

    pub fn clear_banner(&mut self) {
        self.banner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_field_reads_empty() {
        let fields = FormFields::new();
        assert_eq!(fields.value(field::NAME), "");
        assert_eq!(fields.error(field::NAME), None);
    }

    #[test]
    fn test_set_clears_only_that_fields_error() {
        let mut fields = FormFields::new();
        fields.set_error(field::NAME, "Name is required");
        fields.set_error(field::EMAIL, "Email is required");

        fields.set(field::NAME, "Ann");

        assert_eq!(fields.error(field::NAME), None);
        assert_eq!(fields.error(field::EMAIL), Some("Email is required"));
    }

    #[test]
    fn test_set_clears_banner() {
        let mut fields = FormFields::new();
        fields.set_banner("Invalid email or password");
        fields.set(field::EMAIL, "john@example.com");
        assert_eq!(fields.banner(), None);
    }

    #[test]
    fn test_set_errors_replaces_wholesale() {
        let mut fields = FormFields::new();
        fields.set_error(field::NAME, "Name is required");

        let mut next = ErrorMap::new();
        next.insert(field::PHONE.into(), "Phone number is required".into());
        fields.set_errors(next);

        assert_eq!(fields.error(field::NAME), None);
        assert_eq!(fields.error(field::PHONE), Some("Phone number is required"));
    }
}
