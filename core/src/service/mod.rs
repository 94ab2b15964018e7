pub mod grid_renderer;
pub mod raster;
pub mod summary;
pub mod svg;
