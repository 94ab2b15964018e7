use std::path::PathBuf;

use crate::error::Result;
use crate::model::activity::ActivityMap;

pub trait ActivitySource {
    /// Base name used for output files, e.g. `work` for `work.json`.
    fn name(&self) -> String;
    fn load(&self) -> Result<ActivityMap>;
}

pub trait ImageSink {
    fn write(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf>;
}
