//! Application configuration loaded from environment variables.

use std::env;

use bloglist_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database = lookup("DATABASE_URL").map(|url| {
            let mut config = DatabaseConfig::new(url);
            if let Some(max) = lookup("DB_MAX_CONNECTIONS").and_then(|s| s.parse().ok()) {
                config.max_connections = max;
            }
            if let Some(min) = lookup("DB_MIN_CONNECTIONS").and_then(|s| s.parse().ok()) {
                config.min_connections = min;
            }
            config
        });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3003),
            database,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_database() {
        let config = config_from(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3003);
        assert!(config.database.is_none());
    }

    #[test]
    fn test_database_settings() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("DATABASE_URL", "postgres://localhost/bloglist"),
            ("DB_MAX_CONNECTIONS", "25"),
            ("DB_MIN_CONNECTIONS", "nope"),
        ]);

        assert_eq!(config.port, 8080);
        let database = config.database.unwrap();
        assert_eq!(database.url, "postgres://localhost/bloglist");
        assert_eq!(database.max_connections, 25);
        assert_eq!(database.min_connections, 1);
    }
}
