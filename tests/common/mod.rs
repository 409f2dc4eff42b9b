//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_relay;

use std::net::TcpListener;

use portfolio_core::config::{Config, RelayConfig};

/// Find a port nothing is listening on.
pub fn dead_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Config pointing the relay at an arbitrary endpoint.
pub fn config_for(endpoint: &str) -> Config {
    Config {
        relay: RelayConfig {
            endpoint: endpoint.to_string(),
            fallback_contact: "me@example.com".to_string(),
            timeout_seconds: 5,
            connect_timeout_seconds: 2,
        },
        ..Config::default()
    }
}
