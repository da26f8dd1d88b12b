use anyhow::Result;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

/// Runtime configuration for the concierge engine.
///
/// Every field has a default, so loading never fails on a bare environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the optional `menu.json`, `reviews.json` and
    /// `trending.json` overrides. Built-in datasets are used for any file
    /// that is absent or unparseable.
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Config {
            data_dir: env::var("ZAIKA_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
        }
    }
}
