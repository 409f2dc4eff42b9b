//! Interaction core for a single-page portfolio site.
//!
//! The presentational layer (sections, markup, static content) lives outside
//! this crate. What lives here are the two units with actual behavior:
//!
//! - [`visibility`]: a fire-once viewport-visibility detector that gates
//!   one-shot entrance animations. Each section owns its own detector.
//! - [`contact`]: the contact-form submission state machine, driving one
//!   asynchronous delivery through a third-party form relay per submit.
//!
//! The two units are independent; neither knows about the other. Supporting
//! modules: [`flow`] (state-machine primitives), [`relay`] (outbound HTTP
//! delivery), [`config`] (TOML configuration), [`logging`] (subscriber setup
//! for embedding binaries).

pub mod config;
pub mod contact;
pub mod flow;
pub mod logging;
pub mod relay;
pub mod visibility;

pub use config::Config;
pub use contact::{ContactForm, ContactFormState, FieldId, FormFields, SubmissionPhase};
pub use relay::{FormRelay, HttpFormRelay, RelayError};
pub use visibility::{VisibilityConfig, VisibilityDetector};
