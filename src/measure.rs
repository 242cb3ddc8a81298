use crate::units::Px;

/// The measurement capability the layout engine depends on. Keeping this a
/// trait keeps the engine free of font-library specifics: production code
/// hands it a parsed face ([`Font`](crate::Font)), tests hand it
/// [`FixedMetrics`].
pub trait TextMeasure {
    /// Width of `text` set on a single line, in pixels.
    fn width_of(&self, text: &str) -> Px;

    /// Height of one line of text, in pixels, derived from a representative
    /// glyph.
    fn line_height(&self) -> Px;
}

/// Fixed-advance metrics: every glyph is `advance` pixels wide and every
/// line `line_height` pixels tall. This is both the built-in fallback face
/// (see [`FixedMetrics::fallback`]) and the deterministic measurer the test
/// suite runs on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    advance: f64,
    line_height: f64,
}

impl FixedMetrics {
    pub fn new(advance: f64, line_height: f64) -> FixedMetrics {
        FixedMetrics {
            advance,
            line_height,
        }
    }

    /// The metrics of the built-in bitmap face used when no font can be
    /// loaded: 6px per glyph, 11px per line, invariant under the requested
    /// size (the face has exactly one size).
    pub fn fallback() -> FixedMetrics {
        FixedMetrics::new(6.0, 11.0)
    }
}

impl TextMeasure for FixedMetrics {
    fn width_of(&self, text: &str) -> Px {
        Px(self.advance * text.chars().count() as f64)
    }

    fn line_height(&self) -> Px {
        Px(self.line_height)
    }
}
