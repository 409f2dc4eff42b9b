//! Outbound delivery of contact-form submissions.
//!
//! The relay endpoint is a third-party HTTP service that forwards submitted
//! form data onward (e.g. to an email notification). This crate only ever
//! issues one POST per submit attempt: no automatic retry, no backoff.
//!
//! [`FormRelay`] is the seam the contact state machine drives; tests swap in
//! a mock server behind [`HttpFormRelay`] or a hand-rolled implementation.

mod error;
mod http;

use async_trait::async_trait;

use crate::contact::FormFields;

pub use error::RelayError;
pub use http::HttpFormRelay;

/// Forwards one submission to the configured relay endpoint.
#[async_trait]
pub trait FormRelay: Send + Sync {
    /// Deliver the three form fields as a structured payload.
    ///
    /// `Ok(())` means the relay accepted the submission; every failure mode
    /// (rejection status, transport error, timeout) surfaces as a
    /// [`RelayError`] for the caller to fold into its failure state.
    async fn deliver(&self, fields: &FormFields) -> Result<(), RelayError>;
}
