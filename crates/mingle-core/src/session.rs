//! Authenticated-user session.
//!
//! The session is an explicit object owned by the app state and passed by
//! reference, not process-wide state. Lifecycle: anonymous on startup,
//! `begin` on login success, `end` on logout.

use crate::types::User;

/// The signed-in user, if any.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<User>,
}

impl Session {
    /// A fresh anonymous session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Enters a session for the given user.
    pub fn begin(&mut self, user: User) {
        tracing::info!(user_id = user.id, "session started");
        self.current = Some(user);
    }

    /// Ends the session, returning to anonymous.
    pub fn end(&mut self) {
        if let Some(user) = self.current.take() {
            tracing::info!(user_id = user.id, "session ended");
        }
    }

    /// Applies an edit to the signed-in user's profile.
    pub fn update_user(&mut self, f: impl FnOnce(&mut User)) {
        if let Some(user) = self.current.as_mut() {
            f(user);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_session_lifecycle() {
        let mut session = Session::anonymous();
        assert!(!session.is_authenticated());

        let user = fixtures::login_users().remove(0);
        session.begin(user);
        assert!(session.is_authenticated());
        assert_eq!(session.current_user().unwrap().name, "John Doe");

        session.end();
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_update_user_edits_in_place() {
        let mut session = Session::anonymous();
        session.begin(fixtures::login_users().remove(0));
        session.update_user(|u| u.bio = "New bio".into());
        assert_eq!(session.current_user().unwrap().bio, "New bio");
    }

    #[test]
    fn test_update_user_noop_when_anonymous() {
        let mut session = Session::anonymous();
        session.update_user(|u| u.bio = "x".into());
        assert!(session.current_user().is_none());
    }
}
