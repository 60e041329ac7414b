use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SEED_COUNT: u64 = 1000;

/// Startup configuration, read once from the environment before serving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Number of synthetic records the store is seeded with.
    pub seed_count: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or_default("PORT", &lookup, DEFAULT_PORT),
            seed_count: parse_or_default("SEED_COUNT", &lookup, DEFAULT_SEED_COUNT),
        }
    }
}

fn parse_or_default<T: std::str::FromStr>(
    key: &str,
    lookup: impl Fn(&str) -> Option<String>,
    default: T,
) -> T {
    match lookup(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(%key, %raw, "unparsable value, falling back to default");
            default
        }),
        None => default,
    }
}
