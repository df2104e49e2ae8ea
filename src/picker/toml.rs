//! Optional `isorun.toml` configuration read from the test directory.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::errors::HarnessError;

/// Name of the configuration file looked up in the test directory.
pub const CONFIG_FILE: &str = "isorun.toml";

/// Configuration for a single harness run.
#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    /// Version of the isorun tool this configuration is compatible with.
    pub ver: String,
    /// Directory, relative to the test directory, under which the
    /// per-test workspaces are created.
    #[serde(default = "default_executions")]
    pub executions: PathBuf,
}

fn default_executions() -> PathBuf {
    PathBuf::from("executions")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ver: env!("CARGO_PKG_VERSION").to_string(),
            executions: default_executions(),
        }
    }
}

impl Config {
    /// Read the configuration from `isorun.toml` in `test_dir`, falling back
    /// to the defaults when the file does not exist.
    /// Ensures that the version number in the file matches the version of
    /// the running binary.
    pub fn from_dir(test_dir: &Path) -> Result<Self, HarnessError> {
        let conf_path = test_dir.join(CONFIG_FILE);
        if !conf_path.exists() {
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(&conf_path)
            .map_err(|err| HarnessError::at(&conf_path, err))?;
        let conf: Config = ::toml::from_str(&contents).map_err(|err| {
            HarnessError(format!(
                "Failed to parse {}: {}",
                conf_path.display(),
                err
            ))
        })?;

        if env!("CARGO_PKG_VERSION") != conf.ver {
            return Err(HarnessError(format!(
                "isorun version mismatch. Configuration requires: {}, tool version: {}.",
                conf.ver,
                env!("CARGO_PKG_VERSION")
            )));
        }

        if conf.executions.is_absolute() {
            return Err(HarnessError(format!(
                "{}: `executions` must be relative to the test directory.",
                conf_path.display()
            )));
        }

        Ok(conf)
    }

    /// Location of the executions root for tests found in `test_dir`.
    pub fn executions_root(&self, test_dir: &Path) -> PathBuf {
        test_dir.join(&self.executions)
    }
}
