/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Simulated network latency added to every API request (default: `0`).
    pub latency_ms: u64,
    /// Seed for randomized mock responses. `None` seeds from the OS.
    pub random_seed: Option<u64>,
    /// Pre-populate the store with demo fixtures (default: `true`).
    pub seed_fixtures: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MOCK_LATENCY_MS`      | `0`                        |
    /// | `MOCK_RANDOM_SEED`     | unset                      |
    /// | `MOCK_SEED_FIXTURES`   | `true`                     |
    ///
    /// Malformed values panic so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let latency_ms: u64 = std::env::var("MOCK_LATENCY_MS")
            .unwrap_or_else(|_| "0".into())
            .parse()
            .expect("MOCK_LATENCY_MS must be a valid u64");

        let random_seed: Option<u64> = std::env::var("MOCK_RANDOM_SEED")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                s.trim()
                    .parse()
                    .expect("MOCK_RANDOM_SEED must be a valid u64")
            });

        let seed_fixtures: bool = std::env::var("MOCK_SEED_FIXTURES")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("MOCK_SEED_FIXTURES must be `true` or `false`");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            latency_ms,
            random_seed,
            seed_fixtures,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_empty_entries_dropped() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
