//! User configuration, read from a JSON file.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::model::palette::Palette;
use crate::service::grid_renderer::{RenderOptions, RowLayout};
use crate::time;

/// Environment variable that overrides the default config location.
pub const CONFIG_PATH_ENV: &str = "CONTRIBCAL_CONFIG";
const CONFIG_DIR: &str = ".contribcal";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub year: Option<i32>,
    pub output_dir: Option<PathBuf>,
    pub row_layout: RowLayout,
    pub palette: Palette,
}

impl AppConfig {
    /// Loads the config from `$CONTRIBCAL_CONFIG` or `~/.contribcal/config.json`,
    /// falling back to built-in defaults.
    pub fn load() -> Self {
        match resolve_config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("could not determine home directory; using built-in defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "config file not found; using built-in defaults");
                return Self::default();
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                return Self::default();
            }
        };

        let mut config = match serde_json::from_str::<AppConfig>(&contents) {
            Ok(config) => config,
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to parse config; falling back to defaults"
                );
                return Self::default();
            }
        };

        if let Err(err) = config.palette.validate() {
            warn!(path = %path.display(), error = %err, "ignoring configured palette");
            config.palette = Palette::default();
        }

        info!(path = %path.display(), "loaded config");
        config
    }

    pub fn year_or_current(&self) -> i32 {
        self.year.unwrap_or_else(time::current_year)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            row_layout: self.row_layout,
            palette: self.palette.clone(),
        }
    }
}

pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE_NAME)))
}
