//! Events tab state.

use mingle_core::fixtures::{self, CURRENT_USER};
use mingle_core::types::Event;

/// State for the events tab.
pub struct EventsState {
    pub events: Vec<Event>,
    pub selected: usize,
    pub detail_open: bool,
}

impl EventsState {
    pub fn new() -> Self {
        Self {
            events: fixtures::events(),
            selected: 0,
            detail_open: false,
        }
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.events.get(self.selected)
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.events.len() {
            self.selected += 1;
        }
    }

    pub fn is_going(&self, event: &Event) -> bool {
        event.attendees.iter().any(|a| a == CURRENT_USER)
    }

    /// Toggles the current user's RSVP on the selected event.
    pub fn toggle_rsvp(&mut self) {
        let Some(event) = self.events.get_mut(self.selected) else {
            return;
        };
        if let Some(pos) = event.attendees.iter().position(|a| a == CURRENT_USER) {
            event.attendees.remove(pos);
        } else {
            event.attendees.push(CURRENT_USER.to_string());
        }
    }
}

impl Default for EventsState {
    fn default() -> Self {
        Self::new()
    }
}
