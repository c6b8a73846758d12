//! Configuration management utilities
//!
//! Settings come from the process environment, optionally seeded from a
//! `.env` file in the working directory.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Environment variable holding the model provider API key
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Environment variable holding the vector store to search
pub const VECTOR_STORE_VAR: &str = "vector_store_id";
/// Upper-case spelling also accepted for the vector store
pub const VECTOR_STORE_VAR_UPPER: &str = "VECTOR_STORE_ID";
/// Environment variable overriding the prompt file location
pub const PROMPTS_PATH_VAR: &str = "EDITA_PROMPTS_PATH";
/// Environment variable overriding the search result bound
pub const MAX_RESULTS_VAR: &str = "EDITA_MAX_RESULTS";

const DEFAULT_PROMPTS_PATH: &str = "prompts.json";
const DEFAULT_MAX_RESULTS: usize = 5;

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required variables are unset or empty
    #[error("Missing environment variables: {}", .0.join(" or "))]
    MissingVariables(Vec<String>),

    /// A variable is set but cannot be used
    #[error("Invalid value '{value}' for {name}: {detail}")]
    Invalid {
        name: String,
        value: String,
        detail: String,
    },
}

/// Application configuration
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Model provider API key
    pub openai_api_key: String,
    /// Vector store searched by the file search tool
    pub vector_store_id: String,
    /// Location of the JSON prompt file
    pub prompts_path: PathBuf,
    /// Result bound for the file search tool
    pub max_num_results: usize,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// A `.env` file in the working directory is read first and its values
    /// override variables already set. A missing `.env` file is not an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv_override() {
            Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
            Err(e) => debug!(error = %e, "No .env file loaded"),
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Prompt file location from the environment alone
    ///
    /// For commands that only read prompts and do not need credentials.
    pub fn prompts_path_from_env() -> PathBuf {
        dotenvy::dotenv_override().ok();
        prompts_path(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let openai_api_key = non_empty(API_KEY_VAR);
        let vector_store_id =
            non_empty(VECTOR_STORE_VAR).or_else(|| non_empty(VECTOR_STORE_VAR_UPPER));

        let (Some(openai_api_key), Some(vector_store_id)) = (openai_api_key, vector_store_id)
        else {
            let mut missing = Vec::new();
            if non_empty(API_KEY_VAR).is_none() {
                missing.push(API_KEY_VAR.to_string());
            }
            if non_empty(VECTOR_STORE_VAR).is_none() && non_empty(VECTOR_STORE_VAR_UPPER).is_none()
            {
                missing.push(VECTOR_STORE_VAR.to_string());
            }
            return Err(ConfigError::MissingVariables(missing));
        };

        let prompts_path = prompts_path(&lookup);

        let max_num_results = match non_empty(MAX_RESULTS_VAR) {
            None => DEFAULT_MAX_RESULTS,
            Some(raw) => parse_max_results(&raw)?,
        };

        Ok(Self {
            openai_api_key,
            vector_store_id,
            prompts_path,
            max_num_results,
        })
    }
}

fn prompts_path<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    lookup(PROMPTS_PATH_VAR)
        .filter(|v| !v.trim().is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_PROMPTS_PATH), PathBuf::from)
}

fn parse_max_results(raw: &str) -> Result<usize, ConfigError> {
    let invalid = |detail: &str| ConfigError::Invalid {
        name: MAX_RESULTS_VAR.to_string(),
        value: raw.to_string(),
        detail: detail.to_string(),
    };

    match raw.trim().parse::<usize>() {
        Ok(0) => Err(invalid("must be greater than 0")),
        Ok(n) => Ok(n),
        Err(e) => Err(invalid(&e.to_string())),
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("openai_api_key", &"<redacted>")
            .field("vector_store_id", &self.vector_store_id)
            .field("prompts_path", &self.prompts_path)
            .field("max_num_results", &self.max_num_results)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_required_and_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("vector_store_id", "vs_123"),
        ]))
        .unwrap();

        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.vector_store_id, "vs_123");
        assert_eq!(config.prompts_path, PathBuf::from("prompts.json"));
        assert_eq!(config.max_num_results, 5);
    }

    #[test]
    fn test_upper_case_store_variable() {
        let config = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("VECTOR_STORE_ID", "vs_upper"),
        ]))
        .unwrap();
        assert_eq!(config.vector_store_id, "vs_upper");
    }

    #[test]
    fn test_missing_variables_are_all_reported() {
        let err = Config::from_lookup(lookup(&[("OPENAI_API_KEY", "  ")])).unwrap_err();

        assert_eq!(
            err,
            ConfigError::MissingVariables(vec![
                "OPENAI_API_KEY".to_string(),
                "vector_store_id".to_string()
            ])
        );
        assert_eq!(
            err.to_string(),
            "Missing environment variables: OPENAI_API_KEY or vector_store_id"
        );
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("vector_store_id", "vs_123"),
            ("EDITA_PROMPTS_PATH", "/etc/edita/prompts.json"),
            ("EDITA_MAX_RESULTS", " 8 "),
        ]))
        .unwrap();

        assert_eq!(config.prompts_path, PathBuf::from("/etc/edita/prompts.json"));
        assert_eq!(config.max_num_results, 8);
    }

    #[test]
    fn test_invalid_max_results() {
        let base = [("OPENAI_API_KEY", "sk-test"), ("vector_store_id", "vs_123")];

        let err = Config::from_lookup(lookup(&[base[0], base[1], ("EDITA_MAX_RESULTS", "many")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref name, .. } if name == "EDITA_MAX_RESULTS"));

        let err = Config::from_lookup(lookup(&[base[0], base[1], ("EDITA_MAX_RESULTS", "0")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value '0' for EDITA_MAX_RESULTS: must be greater than 0"
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-secret"),
            ("vector_store_id", "vs_123"),
        ]))
        .unwrap();

        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
