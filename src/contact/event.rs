use crate::contact::state::FieldId;
use crate::flow::FlowEvent;

/// Everything that can happen to a contact form.
#[derive(Debug, Clone)]
pub enum ContactEvent {
    /// Visitor edited one input. Allowed in any phase.
    FieldChanged { field: FieldId, value: String },
    /// Visitor pressed send.
    SubmitRequested,
    /// The relay accepted the delivery.
    RelayAccepted,
    /// The relay rejected the delivery, or transport failed entirely.
    RelayRejected {
        /// Direct address offered to the visitor as the alternate path.
        fallback_contact: String,
    },
}

impl FlowEvent for ContactEvent {}
