use std::sync::Arc;

use crate::config::Config;
use crate::contact::event::ContactEvent;
use crate::contact::reducer::ContactReducer;
use crate::contact::state::{ContactFormState, FieldId, SubmissionPhase};
use crate::flow::Reducer;
use crate::relay::{FormRelay, HttpFormRelay, RelayError};

/// One rendered contact form: owns its state and the relay it delivers
/// through.
///
/// `&mut self` on [`submit`](Self::submit) plus the `Submitting` guard in
/// the reducer make a second in-flight request per instance structurally
/// impossible.
pub struct ContactForm {
    state: ContactFormState,
    relay: Arc<dyn FormRelay>,
    fallback_contact: String,
}

impl ContactForm {
    pub fn new(relay: Arc<dyn FormRelay>, fallback_contact: impl Into<String>) -> Self {
        Self {
            state: ContactFormState::default(),
            relay,
            fallback_contact: fallback_contact.into(),
        }
    }

    /// Build a form wired to the configured HTTP relay.
    ///
    /// # Errors
    /// Returns an error when the relay client cannot be constructed from
    /// the configuration (bad endpoint URL, client build failure).
    pub fn from_config(config: &Config) -> Result<Self, RelayError> {
        let relay = HttpFormRelay::new(&config.relay)?;
        Ok(Self::new(
            Arc::new(relay),
            config.relay.fallback_contact.clone(),
        ))
    }

    /// Current view state.
    pub fn state(&self) -> &ContactFormState {
        &self.state
    }

    /// Record an edit to one field. Allowed in any phase; never alters the
    /// lifecycle.
    pub fn update_field(&mut self, field: FieldId, value: impl Into<String>) {
        self.state = ContactReducer::reduce(
            self.state.clone(),
            ContactEvent::FieldChanged {
                field,
                value: value.into(),
            },
        );
    }

    /// Drive one submission attempt: arm, deliver once, settle.
    ///
    /// When the reducer refuses to arm (already `Submitting`, or a required
    /// field is empty) no request is issued and the state is returned
    /// unchanged. Delivery failures never escape: they settle into the
    /// `Failed` phase with a user-actionable message.
    pub async fn submit(&mut self) -> &ContactFormState {
        let phase_before = self.state.phase;
        self.state = ContactReducer::reduce(self.state.clone(), ContactEvent::SubmitRequested);

        let armed = phase_before != SubmissionPhase::Submitting
            && self.state.phase == SubmissionPhase::Submitting;
        if !armed {
            return &self.state;
        }

        tracing::info!("delivering contact form submission");
        let event = match self.relay.deliver(&self.state.fields).await {
            Ok(()) => {
                tracing::info!("contact form submission accepted");
                ContactEvent::RelayAccepted
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact form delivery failed");
                ContactEvent::RelayRejected {
                    fallback_contact: self.fallback_contact.clone(),
                }
            }
        };

        self.state = ContactReducer::reduce(self.state.clone(), event);
        &self.state
    }
}
