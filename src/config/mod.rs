use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Context;
use log::debug;
use serde::Deserialize;

/// Store file used when neither the command line nor the config file names one
pub(crate) const DEFAULT_STORE_FILE: &str = "expenses.csv";

static HISTORY_FILE: &str = ".spendlog_history";

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Path of the expense store
    pub(crate) store_file: Option<PathBuf>,
    /// Path of the shell history file
    pub(crate) history_file: Option<PathBuf>,
}

impl Config {
    pub(crate) fn empty() -> Config {
        Config::default()
    }

    /// `<config dir>/spendlog/config.toml`, e.g. `~/.config/spendlog/config.toml` on Linux
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("spendlog").join("config.toml"))
    }

    /// Load config from a toml file. A missing file gives the empty config.
    pub(crate) fn load_from_file(path: &Path) -> anyhow::Result<Config> {
        if !path.is_file() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::empty());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Unable to read config file {}", path.display()))?;
        let config = toml::from_str::<Config>(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!("Loaded config {:?} from {}", config, path.display());
        Ok(config)
    }

    /// Load the config file given on the command line, or the one in the default location
    pub(crate) fn load(path: Option<&Path>) -> anyhow::Result<Config> {
        match path {
            Some(path) => Config::load_from_file(path),
            None => match Config::default_path() {
                Some(path) => Config::load_from_file(&path),
                None => Ok(Config::empty()),
            }
        }
    }

    /// Command line argument wins over the config file
    pub(crate) fn store_file(&self, cli_file: Option<&Path>) -> PathBuf {
        cli_file.map(Path::to_path_buf)
            .or_else(|| self.store_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
    }

    /// Shell history lives in the home directory unless configured
    pub(crate) fn history_file(&self) -> PathBuf {
        match &self.history_file {
            Some(path) => path.clone(),
            None => dirs::home_dir()
                .map(|home| home.join(HISTORY_FILE))
                .unwrap_or_else(|| PathBuf::from(HISTORY_FILE))
        }
    }
}
