//! Auth feature reducer.
//!
//! Key handling for the pre-auth screens and processing of async backend
//! results (login, registration, reset stages). Navigation between screens
//! happens here; the backend calls themselves are returned as effects.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mingle_core::backend::NewProfile;
use mingle_core::forms::{Advance, Retreat, Step, SubmissionStatus, field, validate};
use mingle_core::types::User;

use super::state::{AuthScreen, LoginState, RegisterState, ResetState, WelcomeState};
use crate::effects::UiEffect;
use crate::state::{AppState, Screen, TabsState};

/// Handles a key event while an auth screen is active.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let Screen::Auth(auth) = &mut app.screen else {
        return vec![];
    };
    let prefill = app.config.login_email.clone();
    let (nav, effects) = match auth {
        AuthScreen::Welcome(welcome) => welcome_key(welcome, prefill.as_deref(), key),
        AuthScreen::Login(login) => login_key(login, key),
        AuthScreen::Register(register) => register_key(register, key),
        AuthScreen::ResetPassword(reset) => reset_key(reset, prefill.as_deref(), key),
    };
    if let Some(next) = nav {
        app.screen = Screen::Auth(next);
    }
    effects
}

fn welcome_key(
    welcome: &mut WelcomeState,
    prefill: Option<&str>,
    key: KeyEvent,
) -> (Option<AuthScreen>, Vec<UiEffect>) {
    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
            welcome.toggle();
            (None, vec![])
        }
        KeyCode::Enter => {
            let next = if welcome.selected == 0 {
                AuthScreen::login(prefill)
            } else {
                AuthScreen::register()
            };
            (Some(next), vec![])
        }
        KeyCode::Esc | KeyCode::Char('q') => (None, vec![UiEffect::Quit]),
        _ => (None, vec![]),
    }
}

fn login_key(login: &mut LoginState, key: KeyEvent) -> (Option<AuthScreen>, Vec<UiEffect>) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('f') => return (Some(AuthScreen::reset_password()), vec![]),
            KeyCode::Char('n') => return (Some(AuthScreen::register()), vec![]),
            _ => {}
        }
    }
    match key.code {
        KeyCode::Esc => {
            if login.is_pending() {
                (None, vec![])
            } else {
                (Some(AuthScreen::welcome()), vec![])
            }
        }
        KeyCode::Enter => (None, submit_login(login)),
        _ => {
            if let Some((name, value)) = login.form.handle_key(key) {
                login.fields.set(name, value);
                if login.status == SubmissionStatus::Failed {
                    login.status = SubmissionStatus::Idle;
                }
            }
            (None, vec![])
        }
    }
}

/// Starts the sign-in call. Ignored while a call is pending or while either
/// field is still empty (the original disables the button in both cases).
fn submit_login(login: &mut LoginState) -> Vec<UiEffect> {
    if login.is_pending() {
        return vec![];
    }
    let email = login.fields.value(field::EMAIL).to_string();
    let password = login.fields.value(field::PASSWORD).to_string();
    if email.trim().is_empty() || password.is_empty() {
        return vec![];
    }
    login.fields.clear_banner();
    login.status = SubmissionStatus::Pending;
    vec![UiEffect::SubmitLogin { email, password }]
}

fn register_key(register: &mut RegisterState, key: KeyEvent) -> (Option<AuthScreen>, Vec<UiEffect>) {
    match key.code {
        KeyCode::Esc => match register.flow.retreat() {
            Retreat::Exit => (Some(AuthScreen::welcome()), vec![]),
            Retreat::Moved => {
                register.sync_form();
                (None, vec![])
            }
        },
        KeyCode::Enter => {
            let effects = match register.flow.advance() {
                Advance::Stayed => vec![],
                Advance::Moved => {
                    register.sync_form();
                    vec![]
                }
                Advance::Submit => submit_registration(register),
            };
            (None, effects)
        }
        _ => {
            if let Some((name, value)) = register.form.handle_key(key) {
                register.flow.fields.set(name, value);
            }
            (None, vec![])
        }
    }
}

fn submit_registration(register: &mut RegisterState) -> Vec<UiEffect> {
    let fields = &register.flow.fields;
    let profile = NewProfile {
        name: fields.value(field::NAME).to_string(),
        email: fields.value(field::EMAIL).to_string(),
        phone: fields.value(field::PHONE).to_string(),
        bio: fields.value(field::BIO).to_string(),
        interests: fields.value(field::INTERESTS).to_string(),
    };
    let password = fields.value(field::PASSWORD).to_string();
    let code = fields.value(field::CODE).to_string();
    register.flow.begin_submit();
    vec![UiEffect::SubmitRegistration {
        profile,
        password,
        code,
    }]
}

fn reset_key(
    reset: &mut ResetState,
    prefill: Option<&str>,
    key: KeyEvent,
) -> (Option<AuthScreen>, Vec<UiEffect>) {
    match key.code {
        KeyCode::Esc => match reset.flow.retreat() {
            Retreat::Exit => (Some(AuthScreen::login(prefill)), vec![]),
            Retreat::Moved => {
                reset.sync_form();
                (None, vec![])
            }
        },
        KeyCode::Enter => (None, submit_reset_stage(reset)),
        _ => {
            if let Some((name, value)) = reset.form.handle_key(key) {
                reset.flow.fields.set(name, value);
            }
            (None, vec![])
        }
    }
}

/// Validates the current reset step and starts its backend call.
///
/// Unlike registration, every reset step talks to the backend before the
/// flow moves on; the step index only changes when the call succeeds.
fn submit_reset_stage(reset: &mut ResetState) -> Vec<UiEffect> {
    if reset.flow.is_pending() {
        return vec![];
    }
    let step = reset.flow.current_step();
    let errors = validate(step, &reset.flow.fields);
    if !errors.is_empty() {
        reset.flow.fields.set_errors(errors);
        return vec![];
    }
    reset.flow.begin_submit();
    let fields = &reset.flow.fields;
    let effect = match step {
        Step::ResetEmail => UiEffect::RequestPasswordReset {
            email: fields.value(field::EMAIL).to_string(),
        },
        Step::Verification => UiEffect::VerifyResetCode {
            code: fields.value(field::CODE).to_string(),
        },
        Step::Credentials => UiEffect::CompletePasswordReset {
            email: fields.value(field::EMAIL).to_string(),
            password: fields.value(field::PASSWORD).to_string(),
        },
        Step::Identity => return vec![],
    };
    vec![effect]
}

/// Processes the sign-in result. Success swaps in the tab bar and kicks off
/// the nearby load; failure surfaces the message as a form banner.
pub fn handle_login_result(app: &mut AppState, result: Result<User, String>) -> Vec<UiEffect> {
    if !matches!(&app.screen, Screen::Auth(AuthScreen::Login(_))) {
        return vec![];
    }
    match result {
        Ok(user) => {
            tracing::info!(email = %user.email, "signed in");
            app.screen = Screen::Tabs(TabsState::new(&user));
            app.session.begin(user);
            vec![UiEffect::LoadNearby]
        }
        Err(message) => {
            if let Screen::Auth(AuthScreen::Login(login)) = &mut app.screen {
                login.status = SubmissionStatus::Failed;
                login.fields.set_banner(message);
            }
            vec![]
        }
    }
}

/// Processes the registration result. Success routes back to sign-in with
/// the new address prefilled; a rejected code stays on the verification
/// step with an inline error.
pub fn handle_register_result(app: &mut AppState, result: Result<User, String>) -> Vec<UiEffect> {
    let Screen::Auth(AuthScreen::Register(register)) = &mut app.screen else {
        return vec![];
    };
    match result {
        Ok(user) => {
            tracing::info!(email = %user.email, "account created");
            app.screen = Screen::Auth(AuthScreen::login(Some(&user.email)));
            app.show_toast("Account created. Sign in to continue.");
        }
        Err(message) => register.flow.fail_on_field(field::CODE, message),
    }
    vec![]
}

/// Processes one reset stage result, moving the flow forward on success.
pub fn handle_reset_step_result(app: &mut AppState, result: Result<(), String>) -> Vec<UiEffect> {
    let Screen::Auth(AuthScreen::ResetPassword(reset)) = &mut app.screen else {
        return vec![];
    };
    match result {
        Ok(()) => {
            reset.flow.succeed();
            match reset.flow.advance() {
                Advance::Moved => reset.sync_form(),
                Advance::Submit => {
                    let email = reset.flow.fields.value(field::EMAIL).to_string();
                    app.screen = Screen::Auth(AuthScreen::login(Some(&email)));
                    app.show_toast("Password updated. Sign in with your new password.");
                }
                Advance::Stayed => {}
            }
        }
        Err(message) => {
            // The code check is the only reset stage that can fail; it
            // surfaces inline on the code field like the original.
            if reset.flow.current_step() == Step::Verification {
                reset.flow.fail_on_field(field::CODE, message);
            } else {
                reset.flow.fail(message);
            }
        }
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use mingle_core::config::Config;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_on(screen: AuthScreen) -> AppState {
        let mut app = AppState::new(Config::default());
        app.screen = Screen::Auth(screen);
        app
    }

    fn type_str(app: &mut AppState, text: &str) {
        for ch in text.chars() {
            handle_key(app, key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn test_login_enter_with_empty_fields_is_ignored() {
        let mut app = app_on(AuthScreen::login(None));
        let effects = handle_key(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());
        let Screen::Auth(AuthScreen::Login(login)) = &app.screen else {
            panic!("expected login screen");
        };
        assert_eq!(login.status, SubmissionStatus::Idle);
    }

    #[test]
    fn test_login_enter_with_whitespace_email_is_ignored() {
        let mut app = app_on(AuthScreen::login(None));
        type_str(&mut app, "   ");
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "password");
        let effects = handle_key(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());
        let Screen::Auth(AuthScreen::Login(login)) = &app.screen else {
            panic!("expected login screen");
        };
        assert_eq!(login.status, SubmissionStatus::Idle);
    }

    #[test]
    fn test_login_submit_goes_pending() {
        let mut app = app_on(AuthScreen::login(None));
        type_str(&mut app, "john@example.com");
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "password");
        let effects = handle_key(&mut app, key(KeyCode::Enter));
        assert!(matches!(effects.as_slice(), [UiEffect::SubmitLogin { .. }]));
        let Screen::Auth(AuthScreen::Login(login)) = &app.screen else {
            panic!("expected login screen");
        };
        assert!(login.is_pending());

        // A second Enter while pending emits nothing.
        assert!(handle_key(&mut app, key(KeyCode::Enter)).is_empty());
    }

    #[test]
    fn test_login_failure_banner_and_recovery() {
        let mut app = app_on(AuthScreen::login(None));
        type_str(&mut app, "john@example.com");
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "nope");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_login_result(&mut app, Err("Invalid email or password".to_string()));
        let Screen::Auth(AuthScreen::Login(login)) = &mut app.screen else {
            panic!("expected login screen");
        };
        assert_eq!(login.fields.banner(), Some("Invalid email or password"));
        assert_eq!(login.status, SubmissionStatus::Failed);

        // Editing a field clears the banner and re-arms the form.
        handle_key(&mut app, key(KeyCode::Char('x')));
        let Screen::Auth(AuthScreen::Login(login)) = &app.screen else {
            panic!("expected login screen");
        };
        assert_eq!(login.fields.banner(), None);
        assert_eq!(login.status, SubmissionStatus::Idle);
    }

    #[test]
    fn test_register_invalid_identity_stays_on_step_one() {
        let mut app = app_on(AuthScreen::register());
        let effects = handle_key(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());
        let Screen::Auth(AuthScreen::Register(register)) = &app.screen else {
            panic!("expected register screen");
        };
        assert_eq!(register.flow.step_number(), 1);
        assert_eq!(
            register.flow.fields.error(field::NAME),
            Some("Name is required")
        );
    }

    #[test]
    fn test_register_esc_retreats_then_exits() {
        let mut app = app_on(AuthScreen::register());
        type_str(&mut app, "Ann");
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "ann@x.com");
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "555");
        handle_key(&mut app, key(KeyCode::Enter));
        let Screen::Auth(AuthScreen::Register(register)) = &app.screen else {
            panic!("expected register screen");
        };
        assert_eq!(register.flow.step_number(), 2);

        handle_key(&mut app, key(KeyCode::Esc));
        let Screen::Auth(AuthScreen::Register(register)) = &app.screen else {
            panic!("expected register screen");
        };
        assert_eq!(register.flow.step_number(), 1);
        // Typed values survive the retreat.
        assert_eq!(register.form.inputs[0].field.value(), "Ann");

        handle_key(&mut app, key(KeyCode::Esc));
        assert!(matches!(app.screen, Screen::Auth(AuthScreen::Welcome(_))));
    }

    #[test]
    fn test_reset_stage_effects_in_order() {
        let mut app = app_on(AuthScreen::reset_password());
        type_str(&mut app, "john@example.com");
        let effects = handle_key(&mut app, key(KeyCode::Enter));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::RequestPasswordReset { .. }]
        ));

        handle_reset_step_result(&mut app, Ok(()));
        let Screen::Auth(AuthScreen::ResetPassword(reset)) = &app.screen else {
            panic!("expected reset screen");
        };
        assert_eq!(reset.flow.current_step(), Step::Verification);

        type_str(&mut app, "123456");
        let effects = handle_key(&mut app, key(KeyCode::Enter));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::VerifyResetCode { .. }]
        ));

        handle_reset_step_result(&mut app, Ok(()));
        type_str(&mut app, "secret1");
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "secret1");
        let effects = handle_key(&mut app, key(KeyCode::Enter));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::CompletePasswordReset { .. }]
        ));

        handle_reset_step_result(&mut app, Ok(()));
        let Screen::Auth(AuthScreen::Login(login)) = &app.screen else {
            panic!("expected login screen after reset");
        };
        assert_eq!(login.fields.value(field::EMAIL), "john@example.com");
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_reset_bad_code_stays_on_verification() {
        let mut app = app_on(AuthScreen::reset_password());
        type_str(&mut app, "john@example.com");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_reset_step_result(&mut app, Ok(()));
        type_str(&mut app, "654321");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_reset_step_result(&mut app, Err("Invalid verification code".to_string()));
        let Screen::Auth(AuthScreen::ResetPassword(reset)) = &app.screen else {
            panic!("expected reset screen");
        };
        assert_eq!(reset.flow.current_step(), Step::Verification);
        assert_eq!(
            reset.flow.fields.error(field::CODE),
            Some("Invalid verification code")
        );
    }

    #[test]
    fn test_reset_short_code_rejected_locally() {
        let mut app = app_on(AuthScreen::reset_password());
        type_str(&mut app, "john@example.com");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_reset_step_result(&mut app, Ok(()));
        type_str(&mut app, "123");
        let effects = handle_key(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());
        let Screen::Auth(AuthScreen::ResetPassword(reset)) = &app.screen else {
            panic!("expected reset screen");
        };
        assert_eq!(
            reset.flow.fields.error(field::CODE),
            Some("OTP must be 6 digits")
        );
    }
}
