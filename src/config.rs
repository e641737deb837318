/*!
# Converter Configuration

Optional configuration file for the converter. TOML is the default format,
`.yaml`/`.yml` files are read as YAML. Every field has a default, so an
empty file is a valid configuration.

```toml
key_field = "name"
trim_whitespace = false
strict_paths = false
max_index = 10000

[metadata]
name = "Address"
version = "1.0"
```
*/

use crate::document::{ConflictPolicy, PathAssigner, DEFAULT_MAX_INDEX};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level field holding the document name
pub const NAME_FIELD: &str = "Name";
/// Top-level field holding the document version
pub const VERSION_FIELD: &str = "Version";

/// Conversion settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConverterConfig {
    /// Column promoted to the record key
    #[serde(default = "default_key_field")]
    pub key_field: String,

    /// Trim surrounding whitespace from headers and cells
    #[serde(default)]
    pub trim_whitespace: bool,

    /// Fail on structural conflicts instead of overwriting
    #[serde(default)]
    pub strict_paths: bool,

    /// Largest array index a header may use
    #[serde(default = "default_max_index")]
    pub max_index: usize,

    /// Fixed `Name` / `Version` values
    #[serde(default)]
    pub metadata: DocumentMetadata,
}

fn default_key_field() -> String {
    "name".to_string()
}

fn default_max_index() -> usize {
    DEFAULT_MAX_INDEX
}

/// Values of the two fixed top-level fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentMetadata {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_version")]
    pub version: String,
}

fn default_name() -> String {
    "Address".to_string()
}

fn default_version() -> String {
    "1.0".to_string()
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            key_field: default_key_field(),
            trim_whitespace: false,
            strict_paths: false,
            max_index: default_max_index(),
            metadata: DocumentMetadata::default(),
        }
    }
}

impl ConverterConfig {
    /// Load configuration from a TOML or YAML file, chosen by extension
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        let config: Self = if is_yaml {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config from {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config from {}", path.display()))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.key_field.is_empty() {
            bail!("key_field must not be empty");
        }
        if self.key_field.contains('.') {
            bail!(
                "key_field '{}' must be a top-level column, not a dotted path",
                self.key_field
            );
        }
        if self.key_field.bytes().all(|b| b.is_ascii_digit()) {
            bail!(
                "key_field '{}' is an array index, not a column name",
                self.key_field
            );
        }
        if self.metadata.name.is_empty() || self.metadata.version.is_empty() {
            bail!("metadata name and version must not be empty");
        }
        Ok(())
    }

    pub fn conflict_policy(&self) -> ConflictPolicy {
        if self.strict_paths {
            ConflictPolicy::Reject
        } else {
            ConflictPolicy::Overwrite
        }
    }

    /// Path assigner matching `strict_paths` and `max_index`
    pub fn path_assigner(&self) -> PathAssigner {
        PathAssigner::new(self.conflict_policy()).with_max_index(self.max_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ConverterConfig::default();
        assert_eq!(config.key_field, "name");
        assert_eq!(config.metadata.name, "Address");
        assert_eq!(config.metadata.version, "1.0");
        assert_eq!(config.conflict_policy(), ConflictPolicy::Overwrite);
        assert_eq!(config.path_assigner().max_index(), DEFAULT_MAX_INDEX);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: ConverterConfig = toml::from_str("").unwrap();
        assert_eq!(config, ConverterConfig::default());
    }

    #[test]
    fn test_load_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("csv-nest.toml");
        std::fs::write(
            &path,
            "key_field = \"id\"\nstrict_paths = true\nmax_index = 50\n\n[metadata]\nversion = \"2.0\"\n",
        )
        .unwrap();

        let config = ConverterConfig::load_from_file(&path).unwrap();
        assert_eq!(config.key_field, "id");
        assert_eq!(config.conflict_policy(), ConflictPolicy::Reject);
        assert_eq!(config.path_assigner().max_index(), 50);
        assert_eq!(config.metadata.name, "Address");
        assert_eq!(config.metadata.version, "2.0");
    }

    #[test]
    fn test_load_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("csv-nest.yaml");
        std::fs::write(&path, "trim_whitespace: true\nmetadata:\n  name: People\n").unwrap();

        let config = ConverterConfig::load_from_file(&path).unwrap();
        assert!(config.trim_whitespace);
        assert_eq!(config.metadata.name, "People");
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(toml::from_str::<ConverterConfig>("delimiter = \";\"").is_err());
    }

    #[test]
    fn test_validate_rejects_dotted_key() {
        let config = ConverterConfig {
            key_field: "person.name".to_string(),
            ..ConverterConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ConverterConfig {
            key_field: "0".to_string(),
            ..ConverterConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ConverterConfig {
            strict_paths: true,
            ..ConverterConfig::default()
        };
        let text = config.to_toml().unwrap();
        let parsed: ConverterConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
