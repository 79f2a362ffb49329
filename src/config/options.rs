// src/config/options.rs
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use super::consts::*;
use crate::error::ClientError;

/// Where the indexing service lives and how long to wait for it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientOptions {
    pub service_url: String,
    pub timeout_secs: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            service_url: s!(DEFAULT_SERVICE_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientOptions {
    /// `timeout_secs = 0` means no timeout.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    pub fn from_toml(text: &str) -> Result<Self, ClientError> {
        Ok(toml::from_str(text)?)
    }

    /// Load options from `path`, or from `word_indexer.toml` in the working
    /// directory when no path is given. A missing default file means defaults;
    /// a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ClientError> {
        let path = match path {
            Some(p) => p,
            None => {
                let p = Path::new(CONFIG_FILE);
                if !p.exists() {
                    logd!("Config: no {} found, using defaults", CONFIG_FILE);
                    return Ok(Self::default());
                }
                p
            }
        };

        let text = fs::read_to_string(path)?;
        let opts = Self::from_toml(&text)?;
        logf!("Config: loaded {} (service={})", path.display(), opts.service_url);
        Ok(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let opts = ClientOptions::from_toml(r#"service_url = "http://indexer:8080""#).unwrap();
        assert_eq!(opts.service_url, "http://indexer:8080");
        assert_eq!(opts.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(ClientOptions::from_toml("").unwrap(), ClientOptions::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ClientOptions::from_toml("retries = 3").unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let mut p = std::env::temp_dir();
        p.push("word_indexer_no_such_config.toml");
        let _ = fs::remove_file(&p);
        assert!(matches!(ClientOptions::load(Some(&p)), Err(ClientError::Io(_))));
    }

    #[test]
    fn timeout_is_seconds() {
        let opts = ClientOptions { timeout_secs: 7, ..ClientOptions::default() };
        assert_eq!(opts.timeout(), Some(Duration::from_secs(7)));
    }

    #[test]
    fn zero_timeout_means_none() {
        let opts = ClientOptions::from_toml("timeout_secs = 0").unwrap();
        assert_eq!(opts.timeout(), None);
    }
}
