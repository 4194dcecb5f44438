use crate::network::{contains, parse_cidr};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Character pools, weakest first. Every generated token draws from all of them.
pub const TOKEN_POOLS: [&str; 5] = [
    "01234567",
    "89abcdef",
    "qwrtyuiopsghjklzxvnm",
    "QWERTYUIOPASDFGHJKLZXCVBNM",
    "~!@#$%^&*()",
];

pub const TOKEN_LENGTH: usize = 32;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenDetail {
    pub whitelisted_network: String,
    pub token: String,
}

/// Generates a token of [`TOKEN_LENGTH`] characters using the OS CSPRNG.
pub fn generate_token() -> String {
    let alphabet: Vec<char> = TOKEN_POOLS.iter().flat_map(|pool| pool.chars()).collect();
    let mut rng = OsRng;

    let mut chars: Vec<char> = TOKEN_POOLS
        .iter()
        .map(|pool| {
            let pool: Vec<char> = pool.chars().collect();
            pool[rng.gen_range(0..pool.len())]
        })
        .collect();
    while chars.len() < TOKEN_LENGTH {
        chars.push(alphabet[rng.gen_range(0..alphabet.len())]);
    }
    chars.shuffle(&mut rng);
    chars.into_iter().collect()
}

/// The `(network, token)` pairs of a project, in configuration order.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct TokenStore(Vec<TokenDetail>);

impl TokenStore {
    /// One fresh token per network. Repeated networks keep their first slot;
    /// two spellings of the same network (`10.1.2.3/8`, `10.0.0.0/8`) count as
    /// a repeat. Unparseable entries are kept verbatim for validation to reject.
    pub fn generate<I, S>(networks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut details: Vec<TokenDetail> = Vec::new();
        let mut seen: Vec<String> = Vec::new();
        for network in networks {
            let network = network.as_ref().trim();
            let key = parse_cidr(network).map_or_else(|| network.to_string(), |n| n.to_string());
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);
            details.push(TokenDetail {
                whitelisted_network: network.to_string(),
                token: generate_token(),
            });
        }
        TokenStore(details)
    }

    /// First entry whose network contains `client_ip`.
    pub fn find_for_ip(&self, client_ip: &str) -> Option<&TokenDetail> {
        self.0
            .iter()
            .find(|detail| contains(&detail.whitelisted_network, client_ip))
    }

    pub fn regenerate_all(&mut self) {
        for detail in &mut self.0 {
            detail.token = generate_token();
        }
    }

    pub fn networks(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|d| d.whitelisted_network.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenDetail> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<TokenDetail>> for TokenStore {
    fn from(details: Vec<TokenDetail>) -> Self {
        TokenStore(details)
    }
}
