use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub public_dir: PathBuf,
    pub cors_permissive: bool,
}

impl Config {
    /// Reads `.env` (if any) and then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                tracing::warn!(%err, "failed to load .env file");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw_addr.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            var: "LISTEN_ADDR",
            value: raw_addr.clone(),
            reason: e.to_string(),
        })?;

        let public_dir = lookup("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR));

        let cors_permissive = match lookup("CORS_PERMISSIVE") {
            None => false,
            Some(value) => parse_flag(&value).ok_or_else(|| ConfigError::Invalid {
                var: "CORS_PERMISSIVE",
                value: value.clone(),
                reason: "expected a boolean".to_string(),
            })?,
        };

        Ok(Self { listen_addr, public_dir, cors_permissive })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert!(!config.cors_permissive);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("LISTEN_ADDR", "127.0.0.1:3000"),
            ("PUBLIC_DIR", "/srv/assets"),
            ("CORS_PERMISSIVE", "yes"),
        ])
        .unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.public_dir, PathBuf::from("/srv/assets"));
        assert!(config.cors_permissive);
    }

    #[test]
    fn rejects_bad_address() {
        let err = config_from(&[("LISTEN_ADDR", ":8080")]).unwrap_err();
        assert!(err.to_string().contains("LISTEN_ADDR"));
    }

    #[test]
    fn rejects_bad_flag() {
        assert!(config_from(&[("CORS_PERMISSIVE", "maybe")]).is_err());
    }
}
