//! Contact-form submission state machine.
//!
//! One rendered form owns one [`ContactForm`]. Field edits and submit
//! presses flow through [`ContactReducer`] as [`ContactEvent`]s; the driver
//! performs exactly one relay delivery per armed submit and folds the
//! settled outcome back into the state. The lifecycle is
//! `Idle → Submitting → {Succeeded, Failed}`, and a later submit re-arms
//! straight from either terminal phase into `Submitting`.
//!
//! `submit` never propagates an error: callers only ever observe phase
//! transitions and the human-readable result message.

mod event;
mod form;
mod reducer;
mod state;

pub use event::ContactEvent;
pub use form::ContactForm;
pub use reducer::{failure_message, ContactReducer, CONFIRMATION_MESSAGE};
pub use state::{ContactFormState, FieldId, FormFields, SubmissionPhase};
