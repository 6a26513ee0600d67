use std::env;

use tracing::{info, warn};

pub const DEFAULT_API_URL: &str = "http://localhost:5001/api";
pub const DEFAULT_THEME: &str = "black";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub theme: String,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_url: load_or(&lookup, "LINGO_API_URL", DEFAULT_API_URL),
            theme: load_or(&lookup, "LINGO_THEME", DEFAULT_THEME),
        }
    }
}

fn load_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    match lookup(key).map(|value| value.trim().to_string()) {
        Some(value) if !value.is_empty() => value,
        Some(_) => {
            warn!("{key} is empty, using default: {default}");
            default.to_string()
        }
        None => {
            info!("{key} not set, using default: {default}");
            default.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset_or_blank() {
        let config = Config::from_lookup(|key| (key == "LINGO_THEME").then(|| "  ".to_string()));
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.theme, DEFAULT_THEME);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(|key| match key {
            "LINGO_API_URL" => Some("https://lingo.example/api".to_string()),
            "LINGO_THEME" => Some("retro\n".to_string()),
            _ => None,
        });
        assert_eq!(config.api_url, "https://lingo.example/api");
        assert_eq!(config.theme, "retro");
    }
}
