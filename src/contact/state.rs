use serde::Serialize;

use crate::flow::ViewState;

/// Identifies one of the three form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Email,
    Message,
}

/// The values collected from the visitor.
///
/// Serializes directly into the relay wire payload: a JSON object with the
/// keys `name`, `email`, `message`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let slot = match field {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        }
    }

    /// Structural validation: every field must be non-empty before a
    /// submission is attempted.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Lifecycle of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Complete view state of one contact form instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactFormState {
    pub fields: FormFields,
    pub phase: SubmissionPhase,
    /// Outcome text shown to the visitor; empty outside the terminal phases.
    pub result_message: String,
}

impl ViewState for ContactFormState {}

impl ContactFormState {
    /// Whether the submit trigger should be disabled right now.
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }
}
