use std::env;

/// Default prefix for record keys.
pub const DEFAULT_KEY_PREFIX: &str = "academia";

/// Record store configuration.
///
/// - `STORE_KEY_PREFIX`: Prefix for every record key (default: `academia`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub key_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Self {
        let key_prefix = env::var("STORE_KEY_PREFIX")
            .ok()
            .map(|s| s.trim().trim_end_matches(':').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_KEY_PREFIX.to_string());

        Self { key_prefix }
    }
}
