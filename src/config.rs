use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Dispatch settings, typically one section of the plugin's config file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CommandConfig {
    /// Prepended to every reply and prefixable failure message. Color
    /// codes are translated when the registry is built.
    pub messaging_prefix: String,
    /// When set, registering a name or alias twice is an error instead of
    /// a last-registration-wins overwrite.
    pub strict_registration: bool,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            messaging_prefix: String::new(),
            strict_registration: false,
        }
    }
}

impl CommandConfig {
    pub fn from_toml(document: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(document)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let document = fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        Ok(Self::from_toml(&document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = CommandConfig::from_toml("messaging_prefix = \"&7[Plugin] \"").unwrap();
        assert_eq!(config.messaging_prefix, "&7[Plugin] ");
        assert!(!config.strict_registration);
    }

    #[test]
    fn empty_document_is_the_default() {
        assert_eq!(
            CommandConfig::from_toml("").unwrap(),
            CommandConfig::default()
        );
    }

    #[test]
    fn mistyped_fields_are_rejected() {
        assert!(CommandConfig::from_toml("strict_registration = \"yes\"").is_err());
    }
}
