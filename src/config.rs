//! Toggle configuration: where the preference lives and what it drives.
//!
//! Defaults match the page markup this crate ships against: preference under
//! `"theme"`, marker class `dark` on `<html>`, control
//! `<a aria-label="Toggle theme">`. Pages that differ pass a JSON override to
//! `installWithConfig`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_DARK_CLASS: &str = "dark";
pub const DEFAULT_CONTROL_LABEL: &str = "Toggle theme";

/// Error returned by [`ToggleConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input was not a valid JSON configuration object.
    #[error("invalid toggle config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A required string field was present but empty.
    #[error("toggle config field `{0}` must not be empty")]
    Empty(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleConfig {
    /// Key the preference is stored under.
    pub storage_key: String,
    /// Class toggled on the root element while dark mode is active.
    pub dark_class: String,
    /// Accessible label identifying the toggle control.
    pub control_label: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            control_label: DEFAULT_CONTROL_LABEL.to_owned(),
        }
    }
}

impl ToggleConfig {
    /// Parse a JSON object, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::Empty`] when a field is set to the empty string.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::Empty("storage_key"));
        }
        if self.dark_class.is_empty() {
            return Err(ConfigError::Empty("dark_class"));
        }
        if self.control_label.is_empty() {
            return Err(ConfigError::Empty("control_label"));
        }
        Ok(())
    }

    /// CSS selector for the toggle control, e.g. `a[aria-label="Toggle theme"]`.
    pub fn control_selector(&self) -> String {
        let mut label = String::with_capacity(self.control_label.len());
        for ch in self.control_label.chars() {
            if ch == '"' || ch == '\\' {
                label.push('\\');
            }
            label.push(ch);
        }
        format!("a[aria-label=\"{label}\"]")
    }
}
