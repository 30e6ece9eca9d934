//! Configuration for studytrack

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Progress file, relative paths resolve against the working directory
    pub state_file: PathBuf,

    /// Directory holding the `week-N` folders, shown by `resume`
    pub curriculum_root: PathBuf,

    /// Heading used in reports
    pub curriculum_name: String,

    /// Log level when `--log-level` is not given
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from(crate::DEFAULT_STATE_FILE),
            curriculum_root: PathBuf::from("."),
            curriculum_name: "C++ Mastery".to_string(),
            log_level: None,
        }
    }
}

impl Config {
    /// Load config with fallback chain
    ///
    /// An explicit path must load. Otherwise `.studytrack.yml` in the working
    /// directory, then the user config dir. Broken fallback files are skipped
    /// and returned as warnings for the caller to log.
    pub fn load(config_path: Option<&PathBuf>) -> Result<(Self, Vec<String>)> {
        if let Some(path) = config_path {
            let config =
                Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()))?;
            return Ok((config, Vec::new()));
        }

        let default_paths: Vec<PathBuf> = [
            Some(PathBuf::from(".studytrack.yml")),
            dirs::config_dir().map(|p| p.join("studytrack").join("studytrack.yml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Ok(Self::load_first(&default_paths))
    }

    /// First candidate that exists and parses, else defaults
    fn load_first(candidates: &[PathBuf]) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return (config, warnings),
                Err(e) => warnings.push(format!("Failed to load config from {}: {}", path.display(), e)),
            }
        }

        (Config::default(), warnings)
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
