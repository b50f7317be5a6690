//! Profile tab state.

use crate::common::TextField;

/// One selectable row on the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileRow {
    Bio,
    Interests,
    Visibility,
    LocationSharing,
    Notifications,
    LogOut,
}

impl ProfileRow {
    pub const ALL: [ProfileRow; 6] = [
        ProfileRow::Bio,
        ProfileRow::Interests,
        ProfileRow::Visibility,
        ProfileRow::LocationSharing,
        ProfileRow::Notifications,
        ProfileRow::LogOut,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileRow::Bio => "Bio",
            ProfileRow::Interests => "Interests",
            ProfileRow::Visibility => "Visible to nearby users",
            ProfileRow::LocationSharing => "Location sharing",
            ProfileRow::Notifications => "Notifications",
            ProfileRow::LogOut => "Log out",
        }
    }
}

/// An in-progress inline edit of a text row.
pub struct EditState {
    pub row: ProfileRow,
    pub field: TextField,
}

/// State for the profile tab.
pub struct ProfileState {
    pub selected: usize,
    pub editing: Option<EditState>,
    /// Device-local toggles; the original kept these in screen state too.
    pub location_sharing: bool,
    pub notifications_enabled: bool,
}

impl ProfileState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            editing: None,
            location_sharing: true,
            notifications_enabled: true,
        }
    }

    pub fn selected_row(&self) -> ProfileRow {
        ProfileRow::ALL[self.selected.min(ProfileRow::ALL.len() - 1)]
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < ProfileRow::ALL.len() {
            self.selected += 1;
        }
    }
}

impl Default for ProfileState {
    fn default() -> Self {
        Self::new()
    }
}
