//! Notifications feature reducer.

use crossterm::event::{KeyCode, KeyEvent};

use super::state::NotificationsState;

/// Handles a key on the notifications tab.
pub fn handle_key(notifications: &mut NotificationsState, key: KeyEvent) {
    match key.code {
        KeyCode::Up => notifications.select_prev(),
        KeyCode::Down => notifications.select_next(),
        KeyCode::Enter => notifications.mark_selected_read(),
        KeyCode::Char('a') => notifications.mark_all_read(),
        _ => {}
    }
}
