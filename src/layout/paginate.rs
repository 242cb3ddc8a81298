use super::{LayoutLine, LayoutResult};
use crate::geometry::CanvasGeometry;
use crate::measure::TextMeasure;
use log::debug;

/// Vertical advance between line tops, as a multiple of the measured line
/// height.
pub const LINE_SPACING: f64 = 1.25;

/// Walk wrapped lines down the page, positioning each at the left margin
/// and advancing the cursor by `round(line_height × 1.25)`.
///
/// The first line whose slot would cross the bottom margin stops the walk:
/// it and every line after it are dropped and the result is flagged
/// `truncated`. Truncation is not an error; the caller decides whether to
/// report it.
pub fn paginate(
    lines: Vec<String>,
    geometry: CanvasGeometry,
    measure: &impl TextMeasure,
) -> LayoutResult {
    let line_height = measure.line_height().0;
    let advance = (line_height * LINE_SPACING).round() as u32;
    let bottom_limit = geometry.height_px.saturating_sub(geometry.margin_bottom_px) as f64;

    let mut placed = Vec::with_capacity(lines.len());
    let mut truncated = false;
    let mut cursor_y = geometry.margin_top_px;

    for line in lines {
        if cursor_y as f64 + line_height > bottom_limit {
            truncated = true;
            break;
        }
        placed.push(LayoutLine {
            text: line,
            x: geometry.margin_left_px,
            y: cursor_y,
        });
        cursor_y += advance;
    }

    if truncated {
        debug!("page full after {} lines, dropping the rest", placed.len());
    }

    LayoutResult {
        lines: placed,
        geometry,
        truncated,
    }
}
