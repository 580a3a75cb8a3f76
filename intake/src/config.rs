//! Backend selection from the environment.

use intake_types::{StoreError, SurveyStore};
use reqwest::Url;
use thiserror::Error;
use tracing::info;

use crate::{MemoryStore, RestStore};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be set when {url_var} is set")]
    MissingKey {
        var: &'static str,
        url_var: &'static str,
    },

    #[error("invalid backend url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Where submitted surveys go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Rows live in this process only.
    Memory,
    Rest { url: String, api_key: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeConfig {
    pub backend: Backend,
}

impl IntakeConfig {
    pub const URL_VAR: &'static str = "INTAKE_BACKEND_URL";
    pub const KEY_VAR: &'static str = "INTAKE_BACKEND_KEY";

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let Some(url) = read(Self::URL_VAR) else {
            return Ok(Self {
                backend: Backend::Memory,
            });
        };

        let parsed = Url::parse(&url).map_err(|err| ConfigError::InvalidUrl {
            url: url.clone(),
            reason: err.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                reason: format!("unsupported scheme {}", parsed.scheme()),
                url,
            });
        }

        let api_key = read(Self::KEY_VAR).ok_or(ConfigError::MissingKey {
            var: Self::KEY_VAR,
            url_var: Self::URL_VAR,
        })?;

        Ok(Self {
            backend: Backend::Rest { url, api_key },
        })
    }

    pub fn open_store(&self) -> Result<Box<dyn SurveyStore>, StoreError> {
        match &self.backend {
            Backend::Memory => {
                info!("using in-memory survey store");
                Ok(Box::new(MemoryStore::new()))
            }
            Backend::Rest { url, api_key } => {
                info!(url = %url, "using hosted survey store");
                Ok(Box::new(RestStore::new(url.as_str(), api_key.as_str())?))
            }
        }
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Memory,
        }
    }
}
