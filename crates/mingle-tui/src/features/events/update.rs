//! Events feature reducer.

use crossterm::event::{KeyCode, KeyEvent};

use super::state::EventsState;

/// Handles a key on the events tab. Returns a toast message when the
/// action produced one.
pub fn handle_key(events: &mut EventsState, key: KeyEvent) -> Option<String> {
    match key.code {
        KeyCode::Up => {
            events.select_prev();
            None
        }
        KeyCode::Down => {
            events.select_next();
            None
        }
        KeyCode::Enter => {
            if events.selected_event().is_some() {
                events.detail_open = !events.detail_open;
            }
            None
        }
        KeyCode::Esc => {
            events.detail_open = false;
            None
        }
        KeyCode::Char('r') => {
            events.toggle_rsvp();
            events.selected_event().map(|event| {
                if events.is_going(event) {
                    format!("You're going to {}", event.name)
                } else {
                    format!("RSVP removed for {}", event.name)
                }
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_rsvp_toggle_adds_and_removes_attendee() {
        let mut events = EventsState::new();
        let before = events.events[0].attendees.len();

        let toast = handle_key(&mut events, key(KeyCode::Char('r')));
        assert_eq!(events.events[0].attendees.len(), before + 1);
        assert!(toast.unwrap().starts_with("You're going to"));

        let toast = handle_key(&mut events, key(KeyCode::Char('r')));
        assert_eq!(events.events[0].attendees.len(), before);
        assert!(toast.unwrap().starts_with("RSVP removed"));
    }

    #[test]
    fn test_enter_toggles_detail() {
        let mut events = EventsState::new();
        handle_key(&mut events, key(KeyCode::Enter));
        assert!(events.detail_open);
        handle_key(&mut events, key(KeyCode::Esc));
        assert!(!events.detail_open);
    }
}
