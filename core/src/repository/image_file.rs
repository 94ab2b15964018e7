use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::error::{CalendarError, Result};
use crate::repository::traits::ImageSink;

#[derive(Clone, Debug)]
pub struct FileImageSink {
    out_dir: PathBuf,
}

impl FileImageSink {
    /// Writes into `out_dir`, or the working directory when `None`.
    pub fn new(out_dir: Option<PathBuf>) -> Result<Self> {
        let out_dir = out_dir.unwrap_or_else(|| PathBuf::from("."));
        if out_dir.exists() && !out_dir.is_dir() {
            return Err(CalendarError::MissingTarget(out_dir.display().to_string()));
        }
        fs::create_dir_all(&out_dir).map_err(|e| CalendarError::io(&out_dir, e))?;
        Ok(FileImageSink { out_dir })
    }
}

impl ImageSink for FileImageSink {
    fn write(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.out_dir.join(file_name);
        // The target is only ever the previous file or the complete new one.
        let tmp_path = self.out_dir.join(format!(".{file_name}.tmp"));
        fs::write(&tmp_path, bytes).map_err(|e| CalendarError::io(&tmp_path, e))?;
        fs::rename(&tmp_path, &path).map_err(|e| CalendarError::io(&path, e))?;

        info!(path = %path.display(), bytes = bytes.len(), "wrote image");
        Ok(path)
    }
}
