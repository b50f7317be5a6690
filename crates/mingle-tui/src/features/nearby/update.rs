//! Nearby feature reducer.

use crossterm::event::{KeyCode, KeyEvent};
use mingle_core::session::Session;
use mingle_core::types::User;

use super::state::{NearbyState, NearbyStatus};
use crate::effects::UiEffect;

/// Handles a key on the nearby tab. The second return value is a toast
/// message for the status line, if the action produced one.
pub fn handle_key(
    nearby: &mut NearbyState,
    session: &mut Session,
    key: KeyEvent,
) -> (Vec<UiEffect>, Option<String>) {
    match key.code {
        KeyCode::Up => {
            nearby.select_prev();
            (vec![], None)
        }
        KeyCode::Down => {
            nearby.select_next();
            (vec![], None)
        }
        KeyCode::Enter => {
            if nearby.selected_user().is_some() {
                nearby.preview_open = !nearby.preview_open;
            }
            (vec![], None)
        }
        KeyCode::Esc => {
            nearby.preview_open = false;
            (vec![], None)
        }
        KeyCode::Char('c') => {
            let effects = connect_selected(nearby);
            (effects, None)
        }
        KeyCode::Char('v') => {
            session.update_user(|user| user.is_visible = !user.is_visible);
            let visible = session.current_user().is_some_and(|u| u.is_visible);
            let toast = if visible {
                "You are now visible to people nearby"
            } else {
                "You are now hidden from people nearby"
            };
            (vec![], Some(toast.to_string()))
        }
        KeyCode::Char('r') => {
            if nearby.status == NearbyStatus::Loading {
                (vec![], None)
            } else {
                nearby.status = NearbyStatus::Loading;
                nearby.preview_open = false;
                (vec![UiEffect::LoadNearby], None)
            }
        }
        _ => (vec![], None),
    }
}

/// Starts a connection request for the selected user. One request at a time.
fn connect_selected(nearby: &mut NearbyState) -> Vec<UiEffect> {
    if !nearby.preview_open || nearby.connecting.is_some() {
        return vec![];
    }
    let Some(user) = nearby.selected_user() else {
        return vec![];
    };
    let user_id = user.id.clone();
    nearby.connecting = Some(user_id.clone());
    vec![UiEffect::Connect { user_id }]
}

/// Applies the nearby load result.
pub fn handle_loaded(nearby: &mut NearbyState, result: Result<Vec<User>, String>) {
    match result {
        Ok(users) => {
            nearby.selected = nearby.selected.min(users.len().saturating_sub(1));
            nearby.users = users;
            nearby.status = NearbyStatus::Loaded;
        }
        Err(message) => {
            nearby.status = NearbyStatus::Failed(message);
        }
    }
}

/// Applies a connection result and returns the toast to show.
pub fn handle_connect_result(
    nearby: &mut NearbyState,
    user_id: &str,
    result: Result<(), String>,
) -> Option<String> {
    nearby.connecting = None;
    match result {
        Ok(()) => {
            let name = nearby
                .users
                .iter()
                .find(|u| u.id == user_id)
                .map_or_else(|| "them".to_string(), |u| u.name.clone());
            Some(format!("Connection request sent to {name}"))
        }
        Err(message) => Some(message),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use mingle_core::fixtures;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_state() -> NearbyState {
        let mut nearby = NearbyState::loading();
        handle_loaded(&mut nearby, Ok(fixtures::nearby_users()));
        nearby
    }

    fn session() -> Session {
        let mut session = Session::anonymous();
        session.begin(fixtures::login_users().remove(0));
        session
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut nearby = loaded_state();
        let mut session = session();
        handle_key(&mut nearby, &mut session, key(KeyCode::Up));
        assert_eq!(nearby.selected, 0);
        for _ in 0..10 {
            handle_key(&mut nearby, &mut session, key(KeyCode::Down));
        }
        assert_eq!(nearby.selected, nearby.users.len() - 1);
    }

    #[test]
    fn test_connect_requires_open_preview() {
        let mut nearby = loaded_state();
        let mut session = session();
        let (effects, _) = handle_key(&mut nearby, &mut session, key(KeyCode::Char('c')));
        assert!(effects.is_empty());

        handle_key(&mut nearby, &mut session, key(KeyCode::Enter));
        let (effects, _) = handle_key(&mut nearby, &mut session, key(KeyCode::Char('c')));
        assert!(matches!(effects.as_slice(), [UiEffect::Connect { .. }]));
        assert!(nearby.connecting.is_some());

        // No second request while one is in flight.
        let (effects, _) = handle_key(&mut nearby, &mut session, key(KeyCode::Char('c')));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_connect_result_toast_names_user() {
        let mut nearby = loaded_state();
        let user_id = nearby.users[0].id.clone();
        let name = nearby.users[0].name.clone();
        nearby.connecting = Some(user_id.clone());
        let toast = handle_connect_result(&mut nearby, &user_id, Ok(()));
        assert_eq!(toast, Some(format!("Connection request sent to {name}")));
        assert!(nearby.connecting.is_none());
    }

    #[test]
    fn test_visibility_toggle_updates_session() {
        let mut nearby = loaded_state();
        let mut session = session();
        let (_, toast) = handle_key(&mut nearby, &mut session, key(KeyCode::Char('v')));
        assert!(!session.current_user().unwrap().is_visible);
        assert_eq!(
            toast.as_deref(),
            Some("You are now hidden from people nearby")
        );
    }

    #[test]
    fn test_failed_load_keeps_message() {
        let mut nearby = NearbyState::loading();
        handle_loaded(&mut nearby, Err("offline".to_string()));
        assert_eq!(nearby.status, NearbyStatus::Failed("offline".to_string()));
    }
}
