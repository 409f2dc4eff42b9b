use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tokio::time::timeout;

use crate::config::RelayConfig;
use crate::contact::FormFields;
use crate::relay::error::RelayError;
use crate::relay::FormRelay;

/// Reqwest-backed relay client.
///
/// Posts submissions as JSON (`name`, `email`, `message`) to the configured
/// endpoint. Any 2xx response counts as accepted; everything else, including
/// transport failures and the total-time budget expiring, is a rejection.
pub struct HttpFormRelay {
    client: Client,
    endpoint: Url,
    request_timeout: Duration,
}

impl HttpFormRelay {
    /// Build a relay client from configuration.
    ///
    /// # Errors
    /// Returns [`RelayError::InvalidEndpoint`] when the endpoint does not
    /// parse as an absolute URL, or [`RelayError::Client`] when the HTTP
    /// client cannot be constructed.
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|_| RelayError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
        })?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(RelayError::Client)?;

        Ok(Self {
            client,
            endpoint,
            request_timeout: Duration::from_secs(config.timeout_seconds),
        })
    }
}

#[async_trait]
impl FormRelay for HttpFormRelay {
    async fn deliver(&self, fields: &FormFields) -> Result<(), RelayError> {
        let send = self.client.post(self.endpoint.clone()).json(fields).send();

        let response = timeout(self.request_timeout, send)
            .await
            .map_err(|_| RelayError::Timeout {
                duration_secs: self.request_timeout.as_secs(),
            })??;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = %status, "relay accepted submission");
            Ok(())
        } else {
            Err(RelayError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}
