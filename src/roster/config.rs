use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "students.txt";

/// How programme text outside the enumerated set is treated after a record exists.
///
/// `add` always rejects unknown programmes. `Lenient` keeps the historical
/// behaviour of the file format: loading maps unknown programmes to the Business
/// category and `update` stores whatever text it is given. `Strict` rejects
/// both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgrammePolicy {
    #[default]
    Lenient,
    Strict,
}

impl fmt::Display for ProgrammePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgrammePolicy::Lenient => f.write_str("lenient"),
            ProgrammePolicy::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for ProgrammePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "lenient" => Ok(ProgrammePolicy::Lenient),
            "strict" => Ok(ProgrammePolicy::Strict),
            other => Err(format!(
                "Unknown programme policy '{}' (expected 'lenient' or 'strict')",
                other
            )),
        }
    }
}

/// Configuration for roster, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Records file; relative paths are resolved against the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    #[serde(default)]
    pub programme_policy: ProgrammePolicy,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            programme_policy: ProgrammePolicy::default(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RosterConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.data_file)
    }
}
