use crate::config::PageConfig;
use log::warn;

/// Absolute pixel dimensions derived from a [`PageConfig`]: the full canvas,
/// the margins, and the usable (printable) area left between them. Purely a
/// function of the configuration; nothing here survives across invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasGeometry {
    pub width_px: u32,
    pub height_px: u32,
    pub margin_top_px: u32,
    pub margin_right_px: u32,
    pub margin_bottom_px: u32,
    pub margin_left_px: u32,
    pub usable_width_px: u32,
    pub usable_height_px: u32,
}

impl CanvasGeometry {
    /// Resolve a page configuration into pixel geometry.
    ///
    /// Canvas size is `round(inches × dpi)` per axis (landscape swaps the
    /// axes first); margins convert as `round(mm × dpi / 25.4)`. A margin
    /// set that consumes the whole canvas clamps the usable area to zero and
    /// logs a warning rather than failing; use
    /// [`PageConfig::validate`] to reject such configurations up front.
    pub fn resolve(config: &PageConfig) -> CanvasGeometry {
        let (width_px, height_px, [top, right, bottom, left]) = pixel_dimensions(config);

        let usable_width = width_px as i64 - left as i64 - right as i64;
        let usable_height = height_px as i64 - top as i64 - bottom as i64;
        if usable_width <= 0 || usable_height <= 0 {
            warn!(
                "margins leave no printable area on a {width_px}x{height_px}px canvas, \
                 clamping to zero"
            );
        }

        CanvasGeometry {
            width_px,
            height_px,
            margin_top_px: top,
            margin_right_px: right,
            margin_bottom_px: bottom,
            margin_left_px: left,
            usable_width_px: usable_width.max(0) as u32,
            usable_height_px: usable_height.max(0) as u32,
        }
    }
}

/// Canvas size and margins in pixels: `(width, height, [top, right, bottom,
/// left])`.
pub(crate) fn pixel_dimensions(config: &PageConfig) -> (u32, u32, [u32; 4]) {
    let (width_in, height_in) = config.orientation.apply(config.paper.dimensions());
    (
        width_in.to_px(config.dpi),
        height_in.to_px(config.dpi),
        [
            config.margins.top.to_px(config.dpi),
            config.margins.right.to_px(config.dpi),
            config.margins.bottom.to_px(config.dpi),
            config.margins.left.to_px(config.dpi),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::margins::Margins;
    use crate::papersize::{Orientation, PaperSize};
    use crate::units::Mm;

    #[test]
    fn a4_portrait_at_150dpi() {
        let geometry = CanvasGeometry::resolve(&PageConfig::default());
        assert_eq!(geometry.width_px, 1240);
        assert_eq!(geometry.height_px, 1753);
        assert_eq!(geometry.margin_left_px, 89);
        assert_eq!(geometry.margin_top_px, 89);
        assert_eq!(geometry.usable_width_px, 1240 - 2 * 89);
        assert_eq!(geometry.usable_height_px, 1753 - 2 * 89);
    }

    #[test]
    fn letter_portrait_at_150dpi() {
        let config = PageConfig {
            paper: PaperSize::Letter,
            ..PageConfig::default()
        };
        let geometry = CanvasGeometry::resolve(&config);
        assert_eq!(geometry.width_px, 1275);
        assert_eq!(geometry.height_px, 1650);
    }

    #[test]
    fn landscape_swaps_canvas_axes() {
        let portrait = CanvasGeometry::resolve(&PageConfig::default());
        let landscape = CanvasGeometry::resolve(&PageConfig {
            orientation: Orientation::Landscape,
            ..PageConfig::default()
        });
        assert_eq!(landscape.width_px, portrait.height_px);
        assert_eq!(landscape.height_px, portrait.width_px);
    }

    #[test]
    fn oversized_margins_clamp_to_zero() {
        let config = PageConfig {
            paper: PaperSize::A5,
            margins: Margins::all(Mm(200.0)),
            ..PageConfig::default()
        };
        let geometry = CanvasGeometry::resolve(&config);
        assert_eq!(geometry.usable_width_px, 0);
        assert_eq!(geometry.usable_height_px, 0);
        // the canvas itself keeps its real dimensions
        assert!(geometry.width_px > 0);
    }

    #[test]
    fn usable_area_is_canvas_minus_margins() {
        let config = PageConfig {
            margins: Margins::trbl(Mm(10.0), Mm(20.0), Mm(30.0), Mm(40.0)),
            ..PageConfig::default()
        };
        let g = CanvasGeometry::resolve(&config);
        assert_eq!(
            g.usable_width_px,
            g.width_px - g.margin_left_px - g.margin_right_px
        );
        assert_eq!(
            g.usable_height_px,
            g.height_px - g.margin_top_px - g.margin_bottom_px
        );
    }
}
