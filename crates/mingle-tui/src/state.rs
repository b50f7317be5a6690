//! Application state composition.
//!
//! This module defines the top-level state hierarchy for the TUI:
//! - `AppState` - everything the reducer mutates and the renderer reads
//! - `Screen` - which top-level surface is active (auth flows or the tabs)
//! - `TabsState` - per-tab feature state once signed in
//!
//! ## State Hierarchy
//!
//! ```text
//! AppState
//! ├── session: Session            (who is signed in)
//! ├── screen: Screen
//! │   ├── Auth(AuthScreen)        (welcome, login, register, reset)
//! │   └── Tabs(TabsState)
//! │       ├── nearby: NearbyState
//! │       ├── messages: MessagesState
//! │       ├── events: EventsState
//! │       ├── notifications: NotificationsState
//! │       └── profile: ProfileState
//! └── toast: Option<Toast>        (transient status message)
//! ```

use std::time::{Duration, Instant};

use mingle_core::config::Config;
use mingle_core::session::Session;
use mingle_core::types::User;

use crate::features::auth::AuthScreen;
use crate::features::events::EventsState;
use crate::features::messages::MessagesState;
use crate::features::nearby::NearbyState;
use crate::features::notifications::NotificationsState;
use crate::features::profile::ProfileState;

/// How long a toast stays on the status line.
const TOAST_TTL: Duration = Duration::from_secs(4);

/// Transient status-line message with an expiry.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// The active top-level surface.
pub enum Screen {
    /// Pre-auth flows (welcome, login, register, password reset).
    Auth(AuthScreen),
    /// The signed-in tab bar.
    Tabs(TabsState),
}

/// The five main tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Nearby,
    Messages,
    Events,
    Notifications,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Nearby,
        Tab::Messages,
        Tab::Events,
        Tab::Notifications,
        Tab::Profile,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Nearby => "Nearby",
            Tab::Messages => "Messages",
            Tab::Events => "Events",
            Tab::Notifications => "Notifications",
            Tab::Profile => "Profile",
        }
    }

    pub fn next(self) -> Tab {
        let idx = Tab::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Tab::ALL[(idx + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        let idx = Tab::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Tab::ALL[(idx + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// State for the signed-in portion of the app.
pub struct TabsState {
    pub active: Tab,
    pub nearby: NearbyState,
    pub messages: MessagesState,
    pub events: EventsState,
    pub notifications: NotificationsState,
    pub profile: ProfileState,
}

impl TabsState {
    /// Builds the post-login state. The nearby list starts loading; the
    /// other tabs are seeded from fixtures.
    pub fn new(_user: &User) -> Self {
        Self {
            active: Tab::Nearby,
            nearby: NearbyState::loading(),
            messages: MessagesState::new(),
            events: EventsState::new(),
            notifications: NotificationsState::new(),
            profile: ProfileState::new(),
        }
    }

    /// True while the active tab owns plain character input (so global
    /// single-key shortcuts must stay out of the way).
    pub fn captures_input(&self) -> bool {
        match self.active {
            Tab::Messages => self.messages.is_composing(),
            Tab::Profile => self.profile.is_editing(),
            _ => false,
        }
    }
}

/// Combined application state for the TUI.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    pub config: Config,
    /// The signed-in user, if any.
    pub session: Session,
    pub screen: Screen,
    /// Spinner animation frame counter (for pending submissions).
    pub spinner_frame: usize,
    /// Transient status-line message.
    pub toast: Option<Toast>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            config,
            session: Session::anonymous(),
            screen: Screen::Auth(AuthScreen::welcome()),
            spinner_frame: 0,
            toast: None,
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Drops the toast once its TTL elapses. Called from the Tick handler.
    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(Tab::Profile.next(), Tab::Nearby);
        assert_eq!(Tab::Nearby.prev(), Tab::Profile);
    }

    #[test]
    fn test_new_state_starts_on_welcome() {
        let app = AppState::new(Config::default());
        assert!(matches!(app.screen, Screen::Auth(AuthScreen::Welcome(_))));
        assert!(!app.session.is_authenticated());
    }
}
