//! Step controller and submission status.
//!
//! A `FormFlow` owns the field store, the current step, and the submission
//! status. The flow never performs I/O: at the last step `advance` reports
//! `Advance::Submit` and the caller runs the (simulated) backend call, then
//! feeds the outcome back through `complete` / `fail`.

use super::fields::FormFields;
use super::validate::{Step, validate};

/// Which auth flow this machine drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Register,
    PasswordReset,
}

impl FlowKind {
    /// The ordered steps of this flow.
    pub fn steps(self) -> &'static [Step] {
        match self {
            FlowKind::Register => &[Step::Identity, Step::Credentials, Step::Verification],
            FlowKind::PasswordReset => &[Step::ResetEmail, Step::Verification, Step::Credentials],
        }
    }
}

/// Lifecycle of the simulated backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Outcome of `advance()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Validation failed; the step did not change.
    Stayed,
    /// Moved to the next step.
    Moved,
    /// Last step validated; the caller should start the submission.
    Submit,
}

/// Outcome of `retreat()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    /// Moved back one step.
    Moved,
    /// Already at the first step; leave the flow.
    Exit,
}

/// Multi-step form state machine.
#[derive(Debug, Clone)]
pub struct FormFlow {
    kind: FlowKind,
    step_idx: usize,
    pub fields: FormFields,
    status: SubmissionStatus,
}

impl FormFlow {
    pub fn new(kind: FlowKind) -> Self {
        Self {
            kind,
            step_idx: 0,
            fields: FormFields::new(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    /// One-based step number, for "Step N of 3" headers.
    pub fn step_number(&self) -> usize {
        self.step_idx + 1
    }

    pub fn step_count(&self) -> usize {
        self.kind.steps().len()
    }

    pub fn current_step(&self) -> Step {
        self.kind.steps()[self.step_idx]
    }

    pub fn is_last_step(&self) -> bool {
        self.step_idx + 1 == self.step_count()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    /// Validates the active step and moves forward on success.
    ///
    /// The step index never changes while the validator reports errors, and
    /// nothing happens while a submission is pending.
    pub fn advance(&mut self) -> Advance {
        if self.is_pending() {
            return Advance::Stayed;
        }
        let errors = validate(self.current_step(), &self.fields);
        if !errors.is_empty() {
            self.fields.set_errors(errors);
            return Advance::Stayed;
        }
        self.fields.set_errors(Default::default());
        if self.is_last_step() {
            return Advance::Submit;
        }
        self.step_idx += 1;
        Advance::Moved
    }

    /// Moves back one step unconditionally, or exits at the first step.
    pub fn retreat(&mut self) -> Retreat {
        if self.is_pending() {
            return Retreat::Moved; // ignore navigation while submitting
        }
        if self.step_idx == 0 {
            return Retreat::Exit;
        }
        self.step_idx -= 1;
        Retreat::Moved
    }

    /// Marks the submission as started.
    pub fn begin_submit(&mut self) {
        self.status = SubmissionStatus::Pending;
    }

    /// Records a successful submission.
    pub fn succeed(&mut self) {
        self.status = SubmissionStatus::Succeeded;
    }

    /// Records a failed submission with a banner message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = SubmissionStatus::Failed;
        self.fields.set_banner(message);
    }

    /// Records a failed submission as an inline error on one field.
    ///
    /// The registration variant surfaces a bad OTP this way ("Invalid OTP"
    /// on the code field) rather than as a banner.
    pub fn fail_on_field(&mut self, field: &str, message: impl Into<String>) {
        self.status = SubmissionStatus::Failed;
        self.fields.set_error(field, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::fields::field;

    fn register_flow_at_verification() -> FormFlow {
        let mut flow = FormFlow::new(FlowKind::Register);
        flow.fields.set(field::NAME, "Ann");
        flow.fields.set(field::EMAIL, "ann@x.com");
        flow.fields.set(field::PHONE, "555");
        assert_eq!(flow.advance(), Advance::Moved);
        flow.fields.set(field::PASSWORD, "secret1");
        flow.fields.set(field::CONFIRM_PASSWORD, "secret1");
        assert_eq!(flow.advance(), Advance::Moved);
        flow
    }

    #[test]
    fn test_advance_blocked_while_invalid() {
        let mut flow = FormFlow::new(FlowKind::Register);
        assert_eq!(flow.advance(), Advance::Stayed);
        assert_eq!(flow.step_number(), 1);
        assert!(flow.fields.has_errors());
    }

    #[test]
    fn test_advance_through_register_steps() {
        let flow = register_flow_at_verification();
        assert_eq!(flow.step_number(), 3);
        assert_eq!(flow.current_step(), Step::Verification);
    }

    #[test]
    fn test_last_step_signals_submit() {
        let mut flow = register_flow_at_verification();
        flow.fields.set(field::CODE, "123456");
        assert_eq!(flow.advance(), Advance::Submit);
        // Submit does not change the step; navigation happens on success.
        assert_eq!(flow.step_number(), 3);
    }

    #[test]
    fn test_mismatched_passwords_block_credentials_step() {
        let mut flow = FormFlow::new(FlowKind::Register);
        flow.fields.set(field::NAME, "Ann");
        flow.fields.set(field::EMAIL, "ann@x.com");
        flow.fields.set(field::PHONE, "555");
        flow.advance();
        flow.fields.set(field::PASSWORD, "secret1");
        flow.fields.set(field::CONFIRM_PASSWORD, "different");
        assert_eq!(flow.advance(), Advance::Stayed);
        assert_eq!(flow.step_number(), 2);
    }

    #[test]
    fn test_retreat_exits_at_first_step() {
        let mut flow = FormFlow::new(FlowKind::PasswordReset);
        assert_eq!(flow.retreat(), Retreat::Exit);

        flow.fields.set(field::EMAIL, "john@example.com");
        assert_eq!(flow.advance(), Advance::Moved);
        assert_eq!(flow.retreat(), Retreat::Moved);
        assert_eq!(flow.step_number(), 1);
    }

    #[test]
    fn test_advance_ignored_while_pending() {
        let mut flow = register_flow_at_verification();
        flow.fields.set(field::CODE, "123456");
        flow.begin_submit();
        assert_eq!(flow.advance(), Advance::Stayed);
        assert!(flow.is_pending());
    }

    #[test]
    fn test_fail_on_field_keeps_step_and_sets_inline_error() {
        let mut flow = register_flow_at_verification();
        flow.fields.set(field::CODE, "000000");
        assert_eq!(flow.advance(), Advance::Submit);
        flow.begin_submit();
        flow.fail_on_field(field::CODE, "Invalid OTP");
        assert_eq!(flow.step_number(), 3);
        assert_eq!(flow.status(), SubmissionStatus::Failed);
        assert_eq!(flow.fields.error(field::CODE), Some("Invalid OTP"));
    }

    #[test]
    fn test_editing_after_failure_clears_banner() {
        let mut flow = FormFlow::new(FlowKind::PasswordReset);
        flow.begin_submit();
        flow.fail("Invalid verification code");
        assert_eq!(flow.fields.banner(), Some("Invalid verification code"));
        flow.fields.set(field::CODE, "1");
        assert_eq!(flow.fields.banner(), None);
    }

    #[test]
    fn test_reset_flow_step_order() {
        let steps = FlowKind::PasswordReset.steps();
        assert_eq!(
            steps,
            &[Step::ResetEmail, Step::Verification, Step::Credentials]
        );
    }
}
