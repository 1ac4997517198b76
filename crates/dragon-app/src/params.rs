//! URL parameters.

use dragon_core::CanvasConfig;

/// Key/value options taken from the page URL.
///
/// Supports `?handles=circle&theme=light` in the query string and the same
/// pairs after `#`. When a key appears in both, the query string wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams {
    pairs: Vec<(String, String)>,
}

impl UrlParams {
    /// Collect parameters from the query string and the hash fragment.
    pub fn from_parts(search: &str, hash: &str) -> Self {
        let mut pairs = parse_params(search);
        for (key, value) in parse_params(hash) {
            if !pairs.iter().any(|(k, _)| *k == key) {
                pairs.push((key, value));
            }
        }
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Requested console log level, `Info` when absent or invalid.
    pub fn log_level(&self) -> log::Level {
        self.get("log")
            .and_then(|level| level.parse().ok())
            .unwrap_or(log::Level::Info)
    }

    /// Apply every recognized option to `config`.
    ///
    /// Invalid values are logged and skipped. Returns the number of options applied.
    pub fn apply(&self, config: &mut CanvasConfig) -> usize {
        let mut applied = 0;
        for (key, value) in &self.pairs {
            match config.set_option(key, value) {
                Ok(true) => {
                    log::debug!("URL option {key}={value}");
                    applied += 1;
                }
                Ok(false) => {}
                Err(err) => log::warn!("Ignoring URL option: {err}"),
            }
        }
        applied
    }
}

/// Parse `key=value` pairs from a query string or hash.
///
/// Pairs without `=` or with an empty value are dropped.
pub fn parse_params(s: &str) -> Vec<(String, String)> {
    let s = s.trim_start_matches(['?', '#']);
    s.split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (!key.is_empty() && !value.is_empty()).then(|| (key.to_string(), value.to_string()))
        })
        .collect()
}
