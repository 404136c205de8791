#![deny(unsafe_code)]

//! Seed configuration and directory layout.
//!
//! Resolution order for the project root:
//! 1. an explicit path supplied by the caller
//! 2. the `DOK_STUDIO_ROOT` environment variable
//! 3. the current directory
//!
//! Under the root, `seed.toml` (optional) can override the data and output
//! directories and the subject file map.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StandardsError;

/// Environment variable for overriding the project root.
pub const ROOT_ENV_VAR: &str = "DOK_STUDIO_ROOT";

/// Config file looked up under the root when none is given explicitly.
pub const CONFIG_FILE_NAME: &str = "seed.toml";

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_OUTPUT_DIR: &str = "standards";

/// Subject CSV file -> output JSON file, in processing order.
pub const DEFAULT_SUBJECTS: [(&str, &str); 4] = [
    ("ELA.csv", "ELA.json"),
    ("Math.csv", "Math.json"),
    ("Science.csv", "Science.json"),
    ("SocialStudies.csv", "SocialStudies.json"),
];

/// One input/output pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectFile {
    pub csv: String,
    pub json: String,
}

impl SubjectFile {
    pub fn new(csv: impl Into<String>, json: impl Into<String>) -> Self {
        Self {
            csv: csv.into(),
            json: json.into(),
        }
    }
}

/// Contents of `seed.toml`. Relative directories are resolved against the
/// project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_subjects")]
    pub subjects: Vec<SubjectFile>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_subjects() -> Vec<SubjectFile> {
    DEFAULT_SUBJECTS
        .iter()
        .map(|(csv, json)| SubjectFile::new(*csv, *json))
        .collect()
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            output_dir: default_output_dir(),
            subjects: default_subjects(),
        }
    }
}

impl SeedConfig {
    /// Parse a config file.
    pub fn load(path: &Path) -> Result<Self, StandardsError> {
        let text = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
        toml::from_str(&text).map_err(|source| StandardsError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `<root>/seed.toml` when present, otherwise the defaults.
    pub fn discover(root: &Path) -> Result<Self, StandardsError> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve directories against `root`.
    pub fn layout(&self, root: &Path) -> SeedLayout {
        SeedLayout {
            data_dir: root.join(&self.data_dir),
            output_dir: root.join(&self.output_dir),
            subjects: self.subjects.clone(),
        }
    }
}

/// Fully resolved input/output locations for a seed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedLayout {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub subjects: Vec<SubjectFile>,
}

impl SeedLayout {
    /// Default subject map under the given directories.
    pub fn new(data_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            output_dir: output_dir.into(),
            subjects: default_subjects(),
        }
    }

    #[must_use]
    pub fn with_subjects(mut self, subjects: Vec<SubjectFile>) -> Self {
        self.subjects = subjects;
        self
    }
}

/// Project root from `ROOT_ENV_VAR`, falling back to the current directory.
pub fn default_root() -> PathBuf {
    if let Ok(root) = std::env::var(ROOT_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_four_subjects_in_order() {
        let config = SeedConfig::default();
        let names: Vec<&str> = config.subjects.iter().map(|s| s.csv.as_str()).collect();
        assert_eq!(
            names,
            ["ELA.csv", "Math.csv", "Science.csv", "SocialStudies.csv"]
        );
        assert_eq!(config.subjects[3].json, "SocialStudies.json");
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: SeedConfig = toml::from_str("output_dir = \"out\"\n").unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.subjects.len(), 4);
    }

    #[test]
    fn subjects_table_replaces_default_map() {
        let config: SeedConfig = toml::from_str(
            r#"
data_dir = "csv"

[[subjects]]
csv = "Art.csv"
json = "Art.json"
"#,
        )
        .unwrap();
        assert_eq!(config.subjects, vec![SubjectFile::new("Art.csv", "Art.json")]);
        let layout = config.layout(Path::new("/srv/dok"));
        assert_eq!(layout.data_dir, PathBuf::from("/srv/dok/csv"));
        assert_eq!(layout.output_dir, PathBuf::from("/srv/dok/standards"));
    }

    #[test]
    fn absolute_directories_ignore_root() {
        let config = SeedConfig {
            data_dir: PathBuf::from("/abs/data"),
            ..SeedConfig::default()
        };
        let layout = config.layout(Path::new("/root"));
        assert_eq!(layout.data_dir, PathBuf::from("/abs/data"));
    }
}
