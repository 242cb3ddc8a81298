//! The layout engine: paragraph normalization, greedy word-wrap, and
//! single-page pagination.
//!
//! [`layout`] is the entry point. It is a pure function of the input text,
//! the page configuration, and the measurement capability, with no hidden
//! state and no I/O, so independent invocations can run concurrently without
//! coordination. Text that exceeds one page is dropped and the result is
//! flagged [`truncated`](LayoutResult::truncated); there is no multi-page
//! flow.
//!
//! # Example
//!
//! ```
//! use page_gen::{layout, FixedMetrics, PageConfig};
//!
//! let config = PageConfig::default();
//! let measure = FixedMetrics::new(10.0, 16.0);
//!
//! let result = layout("Hello, world!\n\nSecond paragraph.", &config, &measure);
//!
//! assert!(!result.truncated);
//! // the blank line between the paragraphs keeps its slot
//! assert_eq!(result.lines[1].text, "");
//! assert_eq!(result.lines[0].x, result.geometry.margin_left_px);
//! ```

mod normalize;
mod paginate;
mod wrap;

pub use normalize::paragraphs;
pub use paginate::{paginate, LINE_SPACING};
pub use wrap::wrap_paragraph;

use crate::config::PageConfig;
use crate::geometry::CanvasGeometry;
use crate::measure::TextMeasure;
use crate::units::Px;

/// One positioned line of text. `x` is the left margin, `y` the top of the
/// line's slot; the order of lines in a [`LayoutResult`] is reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutLine {
    pub text: String,
    pub x: u32,
    pub y: u32,
}

/// The finished single-page layout: positioned lines, the geometry they
/// were placed against, and whether any source content was dropped because
/// it exceeded the page.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub lines: Vec<LayoutLine>,
    pub geometry: CanvasGeometry,
    pub truncated: bool,
}

/// Lay out `text` on a single page described by `config`, measuring with
/// `measure`.
pub fn layout(text: &str, config: &PageConfig, measure: &impl TextMeasure) -> LayoutResult {
    layout_in(text, CanvasGeometry::resolve(config), measure)
}

/// Lay out `text` against an already-resolved geometry.
pub fn layout_in(
    text: &str,
    geometry: CanvasGeometry,
    measure: &impl TextMeasure,
) -> LayoutResult {
    let usable_width = Px(geometry.usable_width_px as f64);
    let mut lines = Vec::new();
    for paragraph in paragraphs(text) {
        lines.extend(wrap_paragraph(&paragraph, usable_width, measure));
    }
    paginate(lines, geometry, measure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::margins::Margins;
    use crate::measure::FixedMetrics;
    use crate::papersize::PaperSize;
    use crate::units::Mm;

    fn measure() -> FixedMetrics {
        FixedMetrics::new(10.0, 16.0)
    }

    #[test]
    fn layout_is_deterministic() {
        let config = PageConfig::default();
        let text = "some text\n\nthat spans a few\nparagraphs and wraps when it gets long";
        let first = layout(text, &config, &measure());
        let second = layout(text, &config, &measure());
        assert_eq!(first, second);
    }

    #[test]
    fn blank_paragraph_count_is_preserved() {
        let config = PageConfig::default();
        let result = layout("a\n\n\nb", &config, &measure());
        let blanks = result.lines.iter().filter(|l| l.text.is_empty()).count();
        assert_eq!(blanks, 2);
        assert_eq!(result.lines.len(), 4);
    }

    #[test]
    fn overflowing_text_is_truncated_silently() {
        let config = PageConfig {
            paper: PaperSize::A5,
            margins: Margins::all(Mm(60.0)),
            ..PageConfig::default()
        };
        let text = "word ".repeat(5000);
        let result = layout(&text, &config, &measure());
        assert!(result.truncated);
        assert!(!result.lines.is_empty());
        // everything that was kept sits above the bottom margin
        let geometry = result.geometry;
        let bottom = geometry.height_px - geometry.margin_bottom_px;
        for line in &result.lines {
            assert!(line.y + 16 <= bottom);
        }
    }

    #[test]
    fn wrapped_lines_never_exceed_the_printable_width() {
        let config = PageConfig::default();
        let m = measure();
        let text = lipsum::lipsum(400);
        let result = layout(&text, &config, &m);
        assert!(!result.lines.is_empty());
        for line in &result.lines {
            // no lipsum word is wider than an A4 printable area at 10px a
            // glyph, so the overlong-word exception can't trigger here
            assert!(m.width_of(&line.text).0 <= result.geometry.usable_width_px as f64);
        }
    }

    #[test]
    fn carriage_returns_do_not_leak_into_lines() {
        let config = PageConfig::default();
        let result = layout("one\r\ntwo", &config, &measure());
        assert_eq!(result.lines[0].text, "one");
        assert_eq!(result.lines[1].text, "two");
    }
}
