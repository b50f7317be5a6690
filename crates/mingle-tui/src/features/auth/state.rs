//! Auth screen state.
//!
//! Each screen pairs the pure form machine from `mingle_core::forms` with a
//! `StepForm`: the view-local editing state (one `TextField` per visible
//! field, plus which one has focus). The form machine stays the single
//! source of truth for values and errors; every keystroke that changes a
//! field is synced back through `FormFields::set`, which is what clears
//! stale inline errors.

use crossterm::event::{KeyCode, KeyEvent};
use mingle_core::forms::{FlowKind, FormFields, FormFlow, Step, SubmissionStatus, field};

use crate::common::TextField;

/// The active pre-auth screen.
pub enum AuthScreen {
    Welcome(WelcomeState),
    Login(LoginState),
    Register(RegisterState),
    ResetPassword(ResetState),
}

impl AuthScreen {
    pub fn welcome() -> Self {
        AuthScreen::Welcome(WelcomeState::default())
    }

    pub fn login(prefill_email: Option<&str>) -> Self {
        AuthScreen::Login(LoginState::new(prefill_email))
    }

    pub fn register() -> Self {
        AuthScreen::Register(RegisterState::new())
    }

    pub fn reset_password() -> Self {
        AuthScreen::ResetPassword(ResetState::new())
    }
}

/// Welcome screen: pick between sign-in and account creation.
#[derive(Debug, Default)]
pub struct WelcomeState {
    /// 0 = sign in, 1 = create account.
    pub selected: usize,
}

impl WelcomeState {
    pub fn toggle(&mut self) {
        self.selected = 1 - self.selected;
    }
}

/// Sign-in screen. Login is a single-step form, so it carries a plain
/// field store and status instead of a `FormFlow`.
pub struct LoginState {
    pub fields: FormFields,
    pub status: SubmissionStatus,
    pub form: StepForm,
}

impl LoginState {
    pub fn new(prefill_email: Option<&str>) -> Self {
        let mut fields = FormFields::new();
        if let Some(email) = prefill_email {
            fields.set(field::EMAIL, email);
        }
        let form = StepForm::login(&fields);
        Self {
            fields,
            status: SubmissionStatus::Idle,
            form,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }
}

/// Three-step registration (identity, credentials, verification).
pub struct RegisterState {
    pub flow: FormFlow,
    pub form: StepForm,
}

impl RegisterState {
    pub fn new() -> Self {
        let flow = FormFlow::new(FlowKind::Register);
        let form = StepForm::for_step(flow.current_step(), &flow.fields);
        Self { flow, form }
    }

    /// Rebuilds the editing state after a step change, seeding values from
    /// the field store so retreating shows what was typed before.
    pub fn sync_form(&mut self) {
        self.form = StepForm::for_step(self.flow.current_step(), &self.flow.fields);
    }
}

impl Default for RegisterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Three-step password reset (email, verification, new credentials).
pub struct ResetState {
    pub flow: FormFlow,
    pub form: StepForm,
}

impl ResetState {
    pub fn new() -> Self {
        let flow = FormFlow::new(FlowKind::PasswordReset);
        let form = StepForm::for_step(flow.current_step(), &flow.fields);
        Self { flow, form }
    }

    pub fn sync_form(&mut self) {
        self.form = StepForm::for_step(self.flow.current_step(), &self.flow.fields);
    }
}

impl Default for ResetState {
    fn default() -> Self {
        Self::new()
    }
}

/// One visible input of a form step.
pub struct FieldInput {
    /// Field name in the `FormFields` store.
    pub name: &'static str,
    pub label: &'static str,
    pub field: TextField,
}

impl FieldInput {
    fn new(name: &'static str, label: &'static str, fields: &FormFields) -> Self {
        let mut field = if matches!(name, field::PASSWORD | field::CONFIRM_PASSWORD) {
            TextField::masked()
        } else {
            TextField::new()
        };
        field.set_value(fields.value(name));
        Self { name, label, field }
    }
}

/// The editable inputs of the current step and the focus position.
pub struct StepForm {
    pub inputs: Vec<FieldInput>,
    pub focus: usize,
}

impl StepForm {
    /// Builds the inputs for one step of a flow, seeded from the store.
    pub fn for_step(step: Step, fields: &FormFields) -> Self {
        let specs: &[(&'static str, &'static str)] = match step {
            Step::Identity => &[
                (field::NAME, "Full name"),
                (field::EMAIL, "Email"),
                (field::PHONE, "Phone"),
                (field::BIO, "Bio"),
                (field::INTERESTS, "Interests (comma separated)"),
            ],
            Step::Credentials => &[
                (field::PASSWORD, "Password"),
                (field::CONFIRM_PASSWORD, "Confirm password"),
            ],
            Step::Verification => &[(field::CODE, "Verification code")],
            Step::ResetEmail => &[(field::EMAIL, "Email")],
        };
        Self::from_specs(specs, fields)
    }

    /// The two login inputs.
    pub fn login(fields: &FormFields) -> Self {
        Self::from_specs(
            &[(field::EMAIL, "Email"), (field::PASSWORD, "Password")],
            fields,
        )
    }

    fn from_specs(specs: &[(&'static str, &'static str)], fields: &FormFields) -> Self {
        Self {
            inputs: specs
                .iter()
                .map(|(name, label)| FieldInput::new(name, label, fields))
                .collect(),
            focus: 0,
        }
    }

    pub fn focus_next(&mut self) {
        if !self.inputs.is_empty() {
            self.focus = (self.focus + 1) % self.inputs.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.inputs.is_empty() {
            self.focus = (self.focus + self.inputs.len() - 1) % self.inputs.len();
        }
    }

    /// Routes a key to the focused input. Returns the field name and new
    /// value when the edit changed it, so the caller can sync the store.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<(&'static str, String)> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                None
            }
            _ => {
                let input = self.inputs.get_mut(self.focus)?;
                if input.field.handle_key(key) {
                    Some((input.name, input.field.value().to_string()))
                } else {
                    None
                }
            }
        }
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
    fn test_step_form_seeds_values_from_store() {
        let mut fields = FormFields::new();
        fields.set(field::NAME, "Ann");
        let form = StepForm::for_step(Step::Identity, &fields);
        assert_eq!(form.inputs[0].field.value(), "Ann");
        assert_eq!(form.inputs[1].field.value(), "");
    }

    #[test]
    fn test_credentials_inputs_are_masked() {
        let form = StepForm::for_step(Step::Credentials, &FormFields::new());
        assert!(form.inputs.iter().all(|i| i.field.is_masked()));
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut form = StepForm::for_step(Step::Credentials, &FormFields::new());
        form.focus_prev();
        assert_eq!(form.focus, 1);
        form.focus_next();
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn test_handle_key_reports_changed_field() {
        let mut form = StepForm::for_step(Step::Verification, &FormFields::new());
        let changed = form.handle_key(key(KeyCode::Char('1')));
        assert_eq!(changed, Some((field::CODE, "1".to_string())));
        assert_eq!(form.handle_key(key(KeyCode::Left)), None);
    }

    #[test]
    fn test_login_prefills_email() {
        let AuthScreen::Login(login) = AuthScreen::login(Some("john@example.com")) else {
            panic!("expected login screen");
        };
        assert_eq!(login.form.inputs[0].field.value(), "john@example.com");
        assert_eq!(login.fields.value(field::EMAIL), "john@example.com");
    }
}
