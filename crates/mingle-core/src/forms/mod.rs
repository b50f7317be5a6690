//! Multi-step form state machine.
//!
//! Registration and password reset share the same machine: a field store
//! with optimistic error clearing, pure per-step validators, and a step
//! controller that only advances when the active step validates. Login uses
//! the field store directly (single step, no controller).

pub mod fields;
pub mod flow;
pub mod validate;

pub use fields::{FormFields, field};
pub use flow::{Advance, FlowKind, FormFlow, Retreat, SubmissionStatus};
pub use validate::{ErrorMap, Step, validate};
