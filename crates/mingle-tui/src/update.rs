//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::auth::{self, AuthScreen};
use crate::features::{events, messages, nearby, notifications, profile};
use crate::state::{AppState, Screen, Tab};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            // Advance spinner animation and drop stale toasts
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            app.expire_toast();
            vec![]
        }
        UiEvent::Terminal(Event::Key(key)) if key.kind == KeyEventKind::Press => {
            handle_key(app, key)
        }
        UiEvent::Terminal(_) => vec![],
        UiEvent::LoginResult(result) => auth::update::handle_login_result(app, result),
        UiEvent::RegisterResult(result) => auth::update::handle_register_result(app, result),
        UiEvent::ResetStepResult(result) => auth::update::handle_reset_step_result(app, result),
        UiEvent::NearbyLoaded(result) => {
            if let Screen::Tabs(tabs) = &mut app.screen {
                nearby::update::handle_loaded(&mut tabs.nearby, result);
            }
            vec![]
        }
        UiEvent::ConnectResult { user_id, result } => {
            if let Screen::Tabs(tabs) = &mut app.screen {
                let toast = nearby::update::handle_connect_result(&mut tabs.nearby, &user_id, result);
                if let Some(message) = toast {
                    app.show_toast(message);
                }
            }
            vec![]
        }
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![UiEffect::Quit];
    }
    match &app.screen {
        Screen::Auth(_) => auth::update::handle_key(app, key),
        Screen::Tabs(_) => handle_tabs_key(app, key),
    }
}

fn handle_tabs_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let Screen::Tabs(tabs) = &mut app.screen else {
        return vec![];
    };

    // Global tab-bar keys, unless the active tab owns character input
    if !tabs.captures_input() {
        match key.code {
            KeyCode::Tab => {
                tabs.active = tabs.active.next();
                return vec![];
            }
            KeyCode::BackTab => {
                tabs.active = tabs.active.prev();
                return vec![];
            }
            KeyCode::Char(ch @ '1'..='5') => {
                tabs.active = Tab::ALL[ch as usize - '1' as usize];
                return vec![];
            }
            KeyCode::Char('q') => return vec![UiEffect::Quit],
            _ => {}
        }
    }

    match tabs.active {
        Tab::Nearby => {
            let (effects, toast) = nearby::update::handle_key(&mut tabs.nearby, &mut app.session, key);
            if let Some(message) = toast {
                app.show_toast(message);
            }
            effects
        }
        Tab::Messages => {
            messages::update::handle_key(&mut tabs.messages, key);
            vec![]
        }
        Tab::Events => {
            let toast = events::update::handle_key(&mut tabs.events, key);
            if let Some(message) = toast {
                app.show_toast(message);
            }
            vec![]
        }
        Tab::Notifications => {
            notifications::update::handle_key(&mut tabs.notifications, key);
            vec![]
        }
        Tab::Profile => {
            let action = profile::update::handle_key(&mut tabs.profile, &mut app.session, key);
            if action == profile::ProfileAction::LoggedOut {
                tracing::info!("signed out");
                app.screen = Screen::Auth(AuthScreen::welcome());
            }
            vec![]
        }
    }
}
