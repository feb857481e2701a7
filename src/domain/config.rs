use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Runtime settings.
///
/// Every field has a default, so an empty file (or no file at all) yields a
/// working configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The width of the dashed rule printed between the regional vehicle
    /// groups.
    rule_width: usize,

    /// When to colour interactive prompts.
    pub colour: Colour,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rule_width: default_rule_width(),
            colour: Colour::default(),
        }
    }
}

/// Whether terminal output is coloured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    /// Colour when the terminal supports it.
    #[default]
    Auto,
    /// Always colour.
    Always,
    /// Never colour.
    Never,
}

/// Errors raised while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not a valid configuration.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// The file that was being parsed.
        path: PathBuf,
        /// The underlying TOML error.
        source: toml::de::Error,
    },
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns the width of the dashed rule.
    #[must_use]
    pub const fn rule_width(&self) -> usize {
        self.rule_width
    }
}

const fn default_rule_width() -> usize {
    20
}

/// The serialized versions of the configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_rule_width")]
        rule_width: usize,

        #[serde(default)]
        colour: Colour,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 { rule_width, colour } => Self { rule_width, colour },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            rule_width: config.rule_width,
            colour: config.colour,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nrule_width = 40\ncolour = \"never\"\n")
            .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.rule_width(), 40);
        assert_eq!(config.colour, Colour::Never);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(matches!(error, Error::Read { .. }));
        assert!(error.to_string().starts_with("failed to read config file"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nrule_width = \"wide\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(matches!(error, Error::Parse { .. }));
    }

    #[test]
    fn empty_file_returns_default() {
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
        assert_eq!(actual.rule_width(), 20);
    }

    #[test]
    fn round_trips_through_toml() {
        let config = Config {
            rule_width: 8,
            colour: Colour::Always,
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(toml::from_str::<Config>(&text).unwrap(), config);
    }
}
