//! Group configuration

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::pair::ChangeEvent;
use crate::Result;

/// Callback invoked after each non-silent activation.
pub type ChangeHandler = Arc<dyn Fn(&ChangeEvent) + Send + Sync>;

/// Set once at construction; immutable for the group's lifetime.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Class added to the active tab element.
    #[serde(default = "default_active_class_name")]
    pub active_class_name: String,
    /// Mirror the active tab into the URL and restore it on mount.
    #[serde(default)]
    pub remember: bool,
    /// Query parameter holding the identifier; `None` selects fragment mode.
    #[serde(default)]
    pub param_key: Option<String>,
    /// Change callback. Runtime wiring, not part of the serialized form.
    #[serde(skip)]
    pub on_change: Option<ChangeHandler>,
}

fn default_active_class_name() -> String {
    "tabzy-active".to_string()
}

impl Config {
    /// Load a configuration from JSON. The callback is left unset.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Derive a query-parameter key from a container selector by stripping
    /// the leading selector marker: `#fancy-tabs` becomes `fancy-tabs`.
    pub fn param_key_from_selector(selector: &str) -> String {
        selector
            .strip_prefix('#')
            .or_else(|| selector.strip_prefix('.'))
            .unwrap_or(selector)
            .to_string()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            active_class_name: default_active_class_name(),
            remember: false,
            param_key: None,
            on_change: None,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("active_class_name", &self.active_class_name)
            .field("remember", &self.remember)
            .field("param_key", &self.param_key)
            .field("on_change", &self.on_change.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.active_class_name, "tabzy-active");
        assert!(!config.remember);
        assert!(config.param_key.is_none());
        assert!(config.on_change.is_none());
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{"remember": true, "param_key": "tab"}"#).unwrap();

        assert!(config.remember);
        assert_eq!(config.param_key.as_deref(), Some("tab"));
        // Unspecified fields fall back to defaults
        assert_eq!(config.active_class_name, "tabzy-active");
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(Config::from_json("{not json").is_err());
    }

    #[test]
    fn test_param_key_from_selector() {
        assert_eq!(Config::param_key_from_selector("#fancy-tabs"), "fancy-tabs");
        assert_eq!(Config::param_key_from_selector(".tab-strip"), "tab-strip");
        assert_eq!(Config::param_key_from_selector("nav"), "nav");
    }
}
