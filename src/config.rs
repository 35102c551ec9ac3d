use anyhow::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_connection_string: String,
    pub db_max_connections: u32,
}

const DEFAULT_DB_CONNECTION_STRING: &str = "sqlite://piano_cover_book.sqlite?mode=rwc";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 1;

impl Default for Config {
    fn default() -> Self {
        Config {
            db_connection_string: DEFAULT_DB_CONNECTION_STRING.into(),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `load` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let db_connection_string =
            lookup("DB_CONNECTION_STRING").unwrap_or(DEFAULT_DB_CONNECTION_STRING.into());
        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid DB_MAX_CONNECTIONS: {}", raw))?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };
        Ok(Config {
            db_connection_string,
            db_max_connections,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.db_connection_string.is_empty() {
            return Err("DB_CONNECTION_STRING is empty".into());
        }
        if self.db_max_connections == 0 {
            return Err("DB_MAX_CONNECTIONS must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DB_CONNECTION_STRING", "sqlite::memory:"),
            ("DB_MAX_CONNECTIONS", " 4 "),
        ]))
        .unwrap();
        assert_eq!(config.db_connection_string, "sqlite::memory:");
        assert_eq!(config.db_max_connections, 4);
    }

    #[test]
    fn rejects_unparseable_pool_size() {
        let err = Config::from_lookup(lookup_from(&[("DB_MAX_CONNECTIONS", "many")])).unwrap_err();
        assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
    }

    #[test]
    fn validate_catches_empty_values() {
        let config = Config {
            db_connection_string: String::new(),
            db_max_connections: 1,
        };
        assert_eq!(config.validate(), Err("DB_CONNECTION_STRING is empty".into()));

        let config = Config {
            db_max_connections: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
