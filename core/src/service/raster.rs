use resvg::{tiny_skia, usvg};
use tracing::{debug, info};

use crate::error::{CalendarError, Result};

/// Rasterizes an SVG document at its native size onto a white background.
pub fn svg_to_png(svg: &str) -> Result<Vec<u8>> {
    info!("converting SVG to PNG");

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| CalendarError::Raster(e.to_string()))?;

    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;
    debug!(width, height, "PNG size");

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        CalendarError::Raster(format!("failed to allocate {width}x{height} pixmap"))
    })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| CalendarError::Raster(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::activity::ActivityMap;
    use crate::service::grid_renderer::render;
    use crate::service::svg::to_svg;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    fn png_dimensions(png: &[u8]) -> (u32, u32) {
        // IHDR is always the first chunk
        let width = u32::from_be_bytes(png[16..20].try_into().unwrap());
        let height = u32::from_be_bytes(png[20..24].try_into().unwrap());
        (width, height)
    }

    #[test]
    fn test_png_has_native_size() {
        let grid = render(&ActivityMap::new(), 2024);
        let png = svg_to_png(&to_svg(&grid)).unwrap();
        assert_eq!(png[..8], PNG_SIGNATURE);
        assert_eq!(png_dimensions(&png), (grid.width, grid.height));
    }

    #[test]
    fn test_invalid_svg_is_an_export_error() {
        let result = svg_to_png("<not-svg");
        assert!(matches!(result, Err(CalendarError::Raster(_))));
    }
}
