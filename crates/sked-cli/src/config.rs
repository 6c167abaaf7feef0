use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings read from `sked.toml` and `SKED_*` environment variables.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory holding the `.txt` schedule files
    pub data_dir: PathBuf,
    /// File opened by the non-interactive commands when `--file` is absent
    pub default_file: Option<String>,
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("schedules"),
            default_file: None,
            log_level: "error".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::figment(Path::new("sked.toml")).extract()
    }

    fn figment(toml_path: &Path) -> Figment {
        Figment::new()
            .merge(Toml::file(toml_path))
            .merge(Env::prefixed("SKED_"))
    }
}
