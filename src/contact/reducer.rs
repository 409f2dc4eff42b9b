use crate::contact::event::ContactEvent;
use crate::contact::state::{ContactFormState, SubmissionPhase};
use crate::flow::Reducer;

/// Text shown when the relay accepts a submission.
pub const CONFIRMATION_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. I will get back to you soon.";

/// Text shown when delivery fails, pointing at the direct contact address.
pub fn failure_message(fallback_contact: &str) -> String {
    format!("Oops! Something went wrong. Please try emailing me directly at {fallback_contact}")
}

/// Transition table for the contact form lifecycle.
///
/// ```text
/// Idle | Succeeded | Failed ──SubmitRequested──→ Submitting
/// Submitting ──RelayAccepted──→ Succeeded
/// Submitting ──RelayRejected──→ Failed
/// ```
///
/// `SubmitRequested` is guarded: a no-op while already `Submitting` or while
/// any field is empty. Re-arming from a terminal phase goes straight to
/// `Submitting`; there is no separate reset.
pub struct ContactReducer;

impl Reducer for ContactReducer {
    type State = ContactFormState;
    type Event = ContactEvent;

    fn reduce(mut state: Self::State, event: Self::Event) -> Self::State {
        match event {
            ContactEvent::FieldChanged { field, value } => {
                // Edits never touch the phase, even mid-submission.
                state.fields.set(field, value);
                state
            }
            ContactEvent::SubmitRequested => {
                if state.phase == SubmissionPhase::Submitting {
                    // At most one request in flight per form instance.
                    return state;
                }
                if !state.fields.is_complete() {
                    // Required-field contract: no request is attempted.
                    return state;
                }
                state.phase = SubmissionPhase::Submitting;
                state.result_message.clear();
                state
            }
            ContactEvent::RelayAccepted => {
                if state.phase != SubmissionPhase::Submitting {
                    // A settled outcome with no pending request is stale.
                    return state;
                }
                state.phase = SubmissionPhase::Succeeded;
                state.result_message = CONFIRMATION_MESSAGE.to_string();
                state.fields.clear();
                state
            }
            ContactEvent::RelayRejected { fallback_contact } => {
                if state.phase != SubmissionPhase::Submitting {
                    return state;
                }
                state.phase = SubmissionPhase::Failed;
                state.result_message = failure_message(&fallback_contact);
                // Fields are preserved so the visitor can retry as-is.
                state
            }
        }
    }
}
