use thiserror::Error;

/// Errors that can occur while delivering a submission.
///
/// The contact state machine folds every variant into its `Failed` phase;
/// the taxonomy exists for logs and tests.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The configured endpoint is not an absolute http(s) URL.
    #[error("relay endpoint '{endpoint}' is not a valid absolute URL")]
    InvalidEndpoint { endpoint: String },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build relay HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport-level failure: unreachable host, connection refused,
    /// interrupted response.
    #[error("connection to relay failed: {0}")]
    Connection(#[from] reqwest::Error),

    /// The relay answered with a non-success status.
    #[error("relay rejected submission with status {status}")]
    Rejected { status: u16 },

    /// The delivery attempt exceeded its total time budget.
    #[error("relay did not respond within {duration_secs}s")]
    Timeout { duration_secs: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_display_names_status() {
        let err = RelayError::Rejected { status: 422 };
        assert!(err.to_string().contains("422"));
    }

    #[test]
    fn timeout_display_names_budget() {
        let err = RelayError::Timeout { duration_secs: 30 };
        assert!(err.to_string().contains("30s"));
    }
}
