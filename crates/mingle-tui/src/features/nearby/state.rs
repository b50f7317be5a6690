//! Nearby tab state.

use mingle_core::types::User;

/// Lifecycle of the nearby list load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NearbyStatus {
    Loading,
    Loaded,
    Failed(String),
}

/// State for the nearby tab.
pub struct NearbyState {
    pub status: NearbyStatus,
    pub users: Vec<User>,
    pub selected: usize,
    /// Whether the detail pane for the selected user is open.
    pub preview_open: bool,
    /// Id of the user a connection request is in flight for.
    pub connecting: Option<String>,
}

impl NearbyState {
    pub fn loading() -> Self {
        Self {
            status: NearbyStatus::Loading,
            users: Vec::new(),
            selected: 0,
            preview_open: false,
            connecting: None,
        }
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.users.get(self.selected)
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.users.len() {
            self.selected += 1;
        }
    }
}
