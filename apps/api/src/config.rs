use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::llm_client::GEMINI_API_BASE;

/// Application configuration loaded from environment variables.
/// A missing `GEMINI_API_KEY` is allowed: every request is then served from fallback content.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub port: u16,
    pub rust_log: String,
    pub generation_timeout: Duration,
    /// Upper bound on the combined length of a request's free-text fields.
    pub max_input_chars: usize,
    /// Fixes fallback selection when set.
    pub fallback_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout_secs: u64 = parse_or(get("GENERATION_TIMEOUT_SECS"), "GENERATION_TIMEOUT_SECS", 30)?;
        if timeout_secs == 0 {
            bail!("GENERATION_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_base_url: get("GEMINI_BASE_URL").unwrap_or_else(|| GEMINI_API_BASE.to_string()),
            port: parse_or(get("PORT"), "PORT", 8080)?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            generation_timeout: Duration::from_secs(timeout_secs),
            max_input_chars: parse_or(get("MAX_INPUT_CHARS"), "MAX_INPUT_CHARS", 8000)?,
            fallback_seed: get("FALLBACK_SEED")
                .map(|v| v.trim().parse::<u64>())
                .transpose()
                .context("FALLBACK_SEED must be an unsigned integer")?,
        })
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(v) => v
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{v}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_any_variables() {
        let c = config(&[]).unwrap();
        assert!(c.gemini_api_key.is_none());
        assert_eq!(c.gemini_base_url, GEMINI_API_BASE);
        assert_eq!(c.port, 8080);
        assert_eq!(c.rust_log, "info");
        assert_eq!(c.generation_timeout, Duration::from_secs(30));
        assert_eq!(c.max_input_chars, 8000);
        assert!(c.fallback_seed.is_none());
    }

    #[test]
    fn test_reads_all_variables() {
        let c = config(&[
            ("GEMINI_API_KEY", "abc"),
            ("GEMINI_BASE_URL", "http://localhost:9999"),
            ("PORT", "9000"),
            ("RUST_LOG", "debug"),
            ("GENERATION_TIMEOUT_SECS", "5"),
            ("MAX_INPUT_CHARS", "100"),
            ("FALLBACK_SEED", "42"),
        ])
        .unwrap();
        assert_eq!(c.gemini_api_key.as_deref(), Some("abc"));
        assert_eq!(c.gemini_base_url, "http://localhost:9999");
        assert_eq!(c.port, 9000);
        assert_eq!(c.rust_log, "debug");
        assert_eq!(c.generation_timeout, Duration::from_secs(5));
        assert_eq!(c.max_input_chars, 100);
        assert_eq!(c.fallback_seed, Some(42));
    }

    #[test]
    fn test_blank_api_key_is_absent() {
        let c = config(&[("GEMINI_API_KEY", "  ")]).unwrap();
        assert!(c.gemini_api_key.is_none());
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        assert!(config(&[("PORT", "eighty")]).is_err());
        assert!(config(&[("PORT", "70000")]).is_err());
        assert!(config(&[("GENERATION_TIMEOUT_SECS", "0")]).is_err());
        assert!(config(&[("FALLBACK_SEED", "-1")]).is_err());
    }
}
