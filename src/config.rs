use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::models::{ChannelSet, ThemeMode};
use crate::services::debounce_service::SEARCH_DEBOUNCE;
use crate::services::generator_service::GeneratorConfig;
use crate::services::system_theme_service;
use crate::utils::{DashboardError, Result};

pub const DEFAULT_ADDRESS: &str = "http://localhost:3000/";
pub const DEFAULT_PREFS_PATH: &str = ".finora/preferences.json";

/// Runtime settings, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub start_address: String,
    pub prefs_path: PathBuf,
    pub search_debounce: Duration,
    pub system_theme: Option<ThemeMode>,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            start_address: DEFAULT_ADDRESS.to_string(),
            prefs_path: PathBuf::from(DEFAULT_PREFS_PATH),
            search_debounce: SEARCH_DEBOUNCE,
            system_theme: None,
            color: true,
        }
    }
}

fn parse_var<T: FromStr>(name: &str, raw: Option<String>, default: T) -> Result<T> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| DashboardError::Config(format!("{} has an invalid value '{}'", name, value))),
    }
}

impl Config {
    /// Load from the process environment (call `dotenv` first to merge `.env`)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from any variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let channels = match lookup("FINORA_CHANNELS") {
            None => defaults.generator.channels,
            Some(value) => ChannelSet::from_str(&value)
                .map_err(|e| DashboardError::Config(format!("FINORA_CHANNELS: {}", e)))?,
        };
        let generator = GeneratorConfig {
            seed: parse_var("FINORA_SEED", lookup("FINORA_SEED"), defaults.generator.seed)?,
            count: parse_var("FINORA_ROWS", lookup("FINORA_ROWS"), defaults.generator.count)?,
            channels,
        };

        let debounce_ms = parse_var(
            "FINORA_SEARCH_DEBOUNCE_MS",
            lookup("FINORA_SEARCH_DEBOUNCE_MS"),
            defaults.search_debounce.as_millis() as u64,
        )?;

        let explicit_theme = lookup("FINORA_SYSTEM_THEME");
        if let Some(value) = explicit_theme.as_deref() {
            if ThemeMode::parse_exact(value.trim()).is_none() {
                return Err(DashboardError::Config(format!(
                    "FINORA_SYSTEM_THEME must be 'light' or 'dark', got '{}'",
                    value
                )));
            }
        }
        let system_theme =
            system_theme_service::detect(explicit_theme.as_deref(), lookup("COLORFGBG").as_deref());

        Ok(Config {
            generator,
            start_address: lookup("FINORA_ADDRESS").unwrap_or(defaults.start_address),
            prefs_path: lookup("FINORA_PREFS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.prefs_path),
            search_debounce: Duration::from_millis(debounce_ms),
            system_theme,
            color: parse_var("FINORA_COLOR", lookup("FINORA_COLOR"), defaults.color)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.generator, GeneratorConfig::default());
        assert_eq!(config.start_address, DEFAULT_ADDRESS);
        assert_eq!(config.search_debounce, Duration::from_millis(200));
        assert_eq!(config.system_theme, None);
        assert!(config.color);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("FINORA_SEED", "7"),
            ("FINORA_ROWS", "50"),
            ("FINORA_CHANNELS", "gateways"),
            ("FINORA_ADDRESS", "http://finora.local/?tab=alerts"),
            ("FINORA_SEARCH_DEBOUNCE_MS", "350"),
            ("FINORA_SYSTEM_THEME", "dark"),
            ("FINORA_COLOR", "false"),
        ]))
        .unwrap();
        assert_eq!(config.generator.seed, 7);
        assert_eq!(config.generator.count, 50);
        assert_eq!(config.generator.channels, ChannelSet::Gateways);
        assert_eq!(config.start_address, "http://finora.local/?tab=alerts");
        assert_eq!(config.search_debounce, Duration::from_millis(350));
        assert_eq!(config.system_theme, Some(ThemeMode::Dark));
        assert!(!config.color);
    }

    #[test]
    fn test_colorfgbg_fallback() {
        let config = Config::from_lookup(lookup(&[("COLORFGBG", "15;0")])).unwrap();
        assert_eq!(config.system_theme, Some(ThemeMode::Dark));
    }

    #[test]
    fn test_invalid_values() {
        assert!(Config::from_lookup(lookup(&[("FINORA_SEED", "-1")])).is_err());
        assert!(Config::from_lookup(lookup(&[("FINORA_CHANNELS", "swift")])).is_err());
        assert!(Config::from_lookup(lookup(&[("FINORA_SYSTEM_THEME", "blue")])).is_err());
    }
}
