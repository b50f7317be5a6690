//! Profile feature reducer.

use crossterm::event::{KeyCode, KeyEvent};
use mingle_core::session::Session;

use super::state::{EditState, ProfileRow, ProfileState};
use crate::common::TextField;

/// What the profile key handler asks the caller to do.
#[derive(Debug, PartialEq, Eq)]
pub enum ProfileAction {
    None,
    /// The session was ended; navigate back to the auth entry screen.
    LoggedOut,
}

/// Handles a key on the profile tab.
pub fn handle_key(
    profile: &mut ProfileState,
    session: &mut Session,
    key: KeyEvent,
) -> ProfileAction {
    if profile.editing.is_some() {
        editing_key(profile, session, key);
        return ProfileAction::None;
    }
    match key.code {
        KeyCode::Up => profile.select_prev(),
        KeyCode::Down => profile.select_next(),
        KeyCode::Enter => return activate_row(profile, session),
        _ => {}
    }
    ProfileAction::None
}

fn activate_row(profile: &mut ProfileState, session: &mut Session) -> ProfileAction {
    match profile.selected_row() {
        ProfileRow::Bio => {
            let current = session.current_user().map_or_else(String::new, |u| u.bio.clone());
            profile.editing = Some(EditState {
                row: ProfileRow::Bio,
                field: TextField::with_value(current),
            });
        }
        ProfileRow::Interests => {
            let current = session
                .current_user()
                .map_or_else(String::new, |u| u.interests.join(", "));
            profile.editing = Some(EditState {
                row: ProfileRow::Interests,
                field: TextField::with_value(current),
            });
        }
        ProfileRow::Visibility => {
            session.update_user(|user| user.is_visible = !user.is_visible);
        }
        ProfileRow::LocationSharing => profile.location_sharing = !profile.location_sharing,
        ProfileRow::Notifications => {
            profile.notifications_enabled = !profile.notifications_enabled;
        }
        ProfileRow::LogOut => {
            session.end();
            return ProfileAction::LoggedOut;
        }
    }
    ProfileAction::None
}

fn editing_key(profile: &mut ProfileState, session: &mut Session, key: KeyEvent) {
    let Some(edit) = &mut profile.editing else {
        return;
    };
    match key.code {
        KeyCode::Esc => profile.editing = None,
        KeyCode::Enter => {
            let value = edit.field.value().to_string();
            match edit.row {
                ProfileRow::Bio => session.update_user(|user| user.bio = value.clone()),
                ProfileRow::Interests => session.update_user(|user| {
                    user.interests = value
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect();
                }),
                _ => {}
            }
            profile.editing = None;
        }
        _ => {
            edit.field.handle_key(key);
        }
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

    fn session() -> Session {
        let mut session = Session::anonymous();
        session.begin(fixtures::login_users().remove(0));
        session
    }

    fn select(profile: &mut ProfileState, row: ProfileRow) {
        profile.selected = ProfileRow::ALL.iter().position(|r| *r == row).unwrap();
    }

    #[test]
    fn test_edit_bio_saves_on_enter() {
        let mut profile = ProfileState::new();
        let mut session = session();
        select(&mut profile, ProfileRow::Bio);
        handle_key(&mut profile, &mut session, key(KeyCode::Enter));
        assert!(profile.is_editing());

        for ch in "!".chars() {
            handle_key(&mut profile, &mut session, key(KeyCode::Char(ch)));
        }
        handle_key(&mut profile, &mut session, key(KeyCode::Enter));
        assert!(!profile.is_editing());
        assert!(session.current_user().unwrap().bio.ends_with('!'));
    }

    #[test]
    fn test_edit_interests_parses_comma_list() {
        let mut profile = ProfileState::new();
        let mut session = session();
        select(&mut profile, ProfileRow::Interests);
        handle_key(&mut profile, &mut session, key(KeyCode::Enter));
        profile
            .editing
            .as_mut()
            .unwrap()
            .field
            .set_value("hiking,  music , ");
        handle_key(&mut profile, &mut session, key(KeyCode::Enter));
        assert_eq!(
            session.current_user().unwrap().interests,
            vec!["hiking".to_string(), "music".to_string()]
        );
    }

    #[test]
    fn test_esc_cancels_edit_without_saving() {
        let mut profile = ProfileState::new();
        let mut session = session();
        let original = session.current_user().unwrap().bio.clone();
        select(&mut profile, ProfileRow::Bio);
        handle_key(&mut profile, &mut session, key(KeyCode::Enter));
        handle_key(&mut profile, &mut session, key(KeyCode::Char('x')));
        handle_key(&mut profile, &mut session, key(KeyCode::Esc));
        assert_eq!(session.current_user().unwrap().bio, original);
    }

    #[test]
    fn test_logout_ends_session() {
        let mut profile = ProfileState::new();
        let mut session = session();
        select(&mut profile, ProfileRow::LogOut);
        let action = handle_key(&mut profile, &mut session, key(KeyCode::Enter));
        assert_eq!(action, ProfileAction::LoggedOut);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_visibility_row_toggles_user_flag() {
        let mut profile = ProfileState::new();
        let mut session = session();
        select(&mut profile, ProfileRow::Visibility);
        let was_visible = session.current_user().unwrap().is_visible;
        handle_key(&mut profile, &mut session, key(KeyCode::Enter));
        assert_ne!(session.current_user().unwrap().is_visible, was_visible);
    }
}
