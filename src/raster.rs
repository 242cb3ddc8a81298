use crate::geometry::CanvasGeometry;
use crate::layout::LayoutResult;
use crate::PageError;
use image::{Rgb, RgbImage};

/// Drawing contract for turning a finished layout into a page raster.
/// Implementations walk [`LayoutResult::lines`] in order and paint each
/// line's text at its `(x, y)` origin; how glyphs get rasterized is
/// entirely their concern and outside this crate.
pub trait CanvasRenderer {
    fn render(&self, layout: &LayoutResult) -> Result<RgbImage, PageError>;
}

/// A blank white page at the full canvas dimensions, the starting surface
/// for any renderer.
pub fn blank_page(geometry: &CanvasGeometry) -> RgbImage {
    RgbImage::from_pixel(geometry.width_px, geometry.height_px, Rgb([255, 255, 255]))
}
