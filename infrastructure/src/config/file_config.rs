//! Configuration schema from TOML (`swipematch.toml`)
//!
//! Example configuration:
//!
//! ```toml
//! [store]
//! rooms_table = "rooms"
//! votes_table = "votes"
//! matches_table = "matches"
//!
//! [gateway]
//! endpoint = "https://push.example.com/v1"
//! auth_token_env = "SWIPEMATCH_GATEWAY_TOKEN"
//! timeout_secs = 5
//!
//! [matching]
//! default_quorum_size = 2
//! policy = "exact-quorum"
//! ```

use serde::{Deserialize, Serialize};
use swipematch_application::MatchingSettings;
use swipematch_domain::{DomainError, MatchPolicy};

/// Store table/collection identifiers (`[store]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub rooms_table: String,
    pub votes_table: String,
    pub matches_table: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            rooms_table: "rooms".to_string(),
            votes_table: "votes".to_string(),
            matches_table: "matches".to_string(),
        }
    }
}

/// Pub-sub gateway settings (`[gateway]` section)
///
/// The auth token itself never lives in the file; the file names the
/// environment variable that carries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub endpoint: String,
    pub auth_token_env: String,
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8787".to_string(),
            auth_token_env: "SWIPEMATCH_GATEWAY_TOKEN".to_string(),
            timeout_secs: 5,
        }
    }
}

/// Match detection settings (`[matching]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Quorum used for rooms that predate the quorum_size field
    pub default_quorum_size: u32,
    /// "exact-quorum" or "all-participants"
    pub policy: String,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            default_quorum_size: 2,
            policy: MatchPolicy::ExactQuorum.to_string(),
        }
    }
}

impl MatchingConfig {
    /// Bridge the file strings into the settings the detector takes
    pub fn to_settings(&self) -> Result<MatchingSettings, DomainError> {
        let policy: MatchPolicy = self.policy.parse()?;
        Ok(MatchingSettings::new(self.default_quorum_size, policy))
    }
}

/// Root configuration document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub store: StoreConfig,
    pub gateway: GatewayConfig,
    pub matching: MatchingConfig,
}
