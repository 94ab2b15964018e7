pub mod activity_file;
pub mod image_file;
pub mod traits;

// Re-export
pub use activity_file::FileActivitySource;
pub use image_file::FileImageSink;
pub use traits::{ActivitySource, ImageSink};
