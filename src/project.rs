use crate::config::{ConfigError, ConfigResult};
use crate::hash::compute_verification_hash;
use crate::network::parse_cidr;
use crate::token::{generate_token, TokenStore};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub uuid: String,
    pub name: String,
    pub secret: String,
    #[serde(default)]
    pub max_args: i64,
    #[serde(default)]
    pub hooks: Vec<String>,
    #[serde(default)]
    pub pre_hook: String,
    #[serde(default)]
    pub post_hook: String,
    #[serde(default)]
    pub error_hook: String,
    #[serde(default)]
    pub work_dir: String,
    #[serde(default)]
    pub tokens: TokenStore,
}

/// Attributes supplied by the caller when adding a project.
#[derive(Debug, Clone, Default)]
pub struct ProjectInput {
    pub name: String,
    pub max_args: i64,
    pub hooks: Vec<String>,
    pub pre_hook: Option<String>,
    pub post_hook: Option<String>,
    pub error_hook: Option<String>,
    pub work_dir: Option<String>,
    pub networks: Vec<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct NetworkHash {
    pub network: String,
    pub hash: String,
}

fn normalize_path(input: Option<String>) -> String {
    input.map(|v| v.trim().to_string()).unwrap_or_default()
}

impl Project {
    pub fn new(input: ProjectInput) -> Self {
        let hooks = input
            .hooks
            .into_iter()
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .collect();

        Project {
            uuid: Uuid::new_v4().to_string(),
            name: input.name.trim().to_string(),
            secret: generate_token(),
            max_args: input.max_args,
            hooks,
            pre_hook: normalize_path(input.pre_hook),
            post_hook: normalize_path(input.post_hook),
            error_hook: normalize_path(input.error_hook),
            work_dir: normalize_path(input.work_dir),
            tokens: TokenStore::generate(&input.networks),
        }
    }

    /// Structural checks a project must pass before it is persisted.
    pub fn validate(&self) -> ConfigResult<()> {
        if Uuid::parse_str(&self.uuid).is_err() {
            return Err(ConfigError::invalid("uuid", format!("'{}' is not a UUID", self.uuid)));
        }
        if self.name.trim().is_empty() {
            return Err(ConfigError::invalid("name", "is required"));
        }
        if self.max_args < 0 {
            return Err(ConfigError::invalid(
                "maxArgs",
                format!("must be non-negative (got {})", self.max_args),
            ));
        }
        if self.tokens.is_empty() {
            return Err(ConfigError::invalid(
                "tokens",
                "at least one whitelisted network is required",
            ));
        }
        for network in self.tokens.networks() {
            if parse_cidr(network).is_none() {
                return Err(ConfigError::invalid(
                    "whitelistedNetwork",
                    format!("'{network}' is not a valid CIDR"),
                ));
            }
        }
        Ok(())
    }

    /// Checks a presented hash against the first token whose network holds
    /// `client_ip`. Later tokens are not consulted even if their networks
    /// overlap.
    pub fn authorize(&self, client_ip: &str, presented_hash: &str) -> bool {
        let Some(detail) = self.tokens.find_for_ip(client_ip) else {
            debug!(uuid = %self.uuid, client_ip, "no whitelisted network matches client");
            return false;
        };
        let expected = self.hash_for(&detail.token);
        constant_time_eq(expected.as_bytes(), presented_hash.as_bytes())
    }

    pub fn regenerate_all(&mut self) -> Vec<NetworkHash> {
        self.tokens.regenerate_all();
        self.hashes()
    }

    pub fn hashes(&self) -> Vec<NetworkHash> {
        self.tokens
            .iter()
            .map(|detail| NetworkHash {
                network: detail.whitelisted_network.clone(),
                hash: self.hash_for(&detail.token),
            })
            .collect()
    }

    fn hash_for(&self, token: &str) -> String {
        compute_verification_hash(&self.name, &self.secret, token)
    }
}
