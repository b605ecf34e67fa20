#![allow(clippy::expect_used)]
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, str::FromStr};

/// Base configuration, deserialized from the process environment.
///
/// `supabase_url` defaults to the local Supabase dev URL so that an
/// unconfigured process still starts; the outbound insert then fails
/// cleanly instead of the service refusing to boot.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub address: SocketAddr,
    pub supabase_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: SocketAddr::from_str("0.0.0.0:8080")
                .expect("Default value for config should never panic!"),
            supabase_url: "http://localhost:54321".into(),
        }
    }
}
