use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{CalendarError, Result};
use crate::input::parse_activity;
use crate::model::activity::ActivityMap;
use crate::repository::traits::ActivitySource;

const DEFAULT_NAME: &str = "calendar";

#[derive(Clone, Debug)]
pub struct FileActivitySource {
    file_path: PathBuf,
}

impl FileActivitySource {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(CalendarError::MissingTarget(path.display().to_string()));
        }

        if path.extension().and_then(|s| s.to_str()) != Some("json") {
            warn!(path = %path.display(), "input file does not have a .json extension");
        }

        Ok(FileActivitySource {
            file_path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl ActivitySource for FileActivitySource {
    fn name(&self) -> String {
        self.file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_NAME)
            .to_string()
    }

    fn load(&self) -> Result<ActivityMap> {
        let content = fs::read_to_string(&self.file_path)
            .map_err(|e| CalendarError::io(&self.file_path, e))?;
        let activity = parse_activity(&content)?;
        debug!(path = %self.file_path.display(), entries = activity.len(), "loaded activity");
        Ok(activity)
    }
}
