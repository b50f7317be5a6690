//! Messages feature reducer.

use crossterm::event::{KeyCode, KeyEvent};

use super::state::MessagesState;

/// Handles a key on the messages tab (list or open thread).
pub fn handle_key(messages: &mut MessagesState, key: KeyEvent) {
    if messages.open.is_some() {
        thread_key(messages, key);
    } else {
        list_key(messages, key);
    }
}

fn list_key(messages: &mut MessagesState, key: KeyEvent) {
    match key.code {
        KeyCode::Up => messages.select_prev(),
        KeyCode::Down => messages.select_next(),
        KeyCode::Enter => messages.open_selected(),
        _ => {}
    }
}

fn thread_key(messages: &mut MessagesState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => messages.close_thread(),
        KeyCode::Enter => {
            let content = messages.compose.value().trim().to_string();
            if !content.is_empty() {
                messages.send(content);
                messages.compose.clear();
            }
        }
        _ => {
            messages.compose.handle_key(key);
        }
    }
}
