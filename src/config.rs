use log::warn;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_POSTS_FILE: &str = "data/posts.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub posts_file: PathBuf,
}

impl AppConfig {
    /// Read `HOST`, `PORT` and `POSTS_FILE`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Invalid PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        AppConfig {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            posts_file: lookup("POSTS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_POSTS_FILE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]);
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.posts_file, PathBuf::from("data/posts.json"));
    }

    #[test]
    fn reads_overrides() {
        let cfg = config(&[("PORT", "8080"), ("POSTS_FILE", "/tmp/feed.json")]);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.posts_file, PathBuf::from("/tmp/feed.json"));
    }

    #[test]
    fn invalid_port_falls_back() {
        assert_eq!(config(&[("PORT", "abc")]).port, 3000);
    }
}
