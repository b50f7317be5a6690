//! Notifications tab state.

use mingle_core::fixtures;
use mingle_core::types::Notification;

/// State for the notifications tab.
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub selected: usize,
}

impl NotificationsState {
    pub fn new() -> Self {
        Self {
            items: fixtures::notifications(),
            selected: 0,
        }
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn mark_selected_read(&mut self) {
        if let Some(item) = self.items.get_mut(self.selected) {
            item.read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.read = true;
        }
    }
}

impl Default for NotificationsState {
    fn default() -> Self {
        Self::new()
    }
}
