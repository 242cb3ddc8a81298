use crate::geometry::pixel_dimensions;
use crate::margins::Margins;
use crate::papersize::{Orientation, PaperSize};
use crate::PageError;
use std::path::PathBuf;

/// Where the measurement face comes from: a TTF/OTF file on disk, or the
/// built-in fixed-metrics face when no path is given (or loading fails).
/// The size is in pixels at canvas resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub path: Option<PathBuf>,
    pub size: f64,
}

impl FontSpec {
    /// The canonical default text size, in pixels.
    pub const DEFAULT_SIZE: f64 = 28.0;

    /// A font loaded from disk at the given pixel size.
    pub fn at_path<P: Into<PathBuf>>(path: P, size: f64) -> FontSpec {
        FontSpec {
            path: Some(path.into()),
            size,
        }
    }
}

impl Default for FontSpec {
    fn default() -> FontSpec {
        FontSpec {
            path: None,
            size: FontSpec::DEFAULT_SIZE,
        }
    }
}

/// Everything needed to size one page: paper format, orientation, margins,
/// raster resolution, and the font to measure with. Immutable once
/// constructed; the layout engine receives it by reference and never reads
/// ambient configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub paper: PaperSize,
    pub orientation: Orientation,
    pub margins: Margins,
    pub dpi: f64,
    pub font: FontSpec,
}

impl PageConfig {
    /// The default raster resolution, in dots per inch.
    pub const DEFAULT_DPI: f64 = 150.0;

    pub fn new(
        paper: PaperSize,
        orientation: Orientation,
        margins: Margins,
        dpi: f64,
        font: FontSpec,
    ) -> PageConfig {
        PageConfig {
            paper,
            orientation,
            margins,
            dpi,
            font,
        }
    }

    /// Strict configuration check: rejects margins that leave no printable
    /// area. [`CanvasGeometry::resolve`](crate::CanvasGeometry::resolve)
    /// never fails on such a configuration (it clamps the usable area to
    /// zero and logs a warning), so callers that want a hard rejection call
    /// this first.
    pub fn validate(&self) -> Result<(), PageError> {
        let (width, height, [top, right, bottom, left]) = pixel_dimensions(self);
        let usable_width = width as i64 - left as i64 - right as i64;
        let usable_height = height as i64 - top as i64 - bottom as i64;
        if usable_width <= 0 || usable_height <= 0 {
            return Err(PageError::EmptyPrintableArea {
                width: usable_width,
                height: usable_height,
            });
        }
        Ok(())
    }
}

impl Default for PageConfig {
    /// A4 portrait at 150dpi with 15mm margins and the built-in face.
    fn default() -> PageConfig {
        PageConfig {
            paper: PaperSize::default(),
            orientation: Orientation::default(),
            margins: Margins::default(),
            dpi: PageConfig::DEFAULT_DPI,
            font: FontSpec::default(),
        }
    }
}
