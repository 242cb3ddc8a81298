use crate::config::FontSpec;
use crate::measure::{FixedMetrics, TextMeasure};
use crate::units::Px;
use crate::PageError;
use log::warn;
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::path::Path;

/// A parsed TTF/OTF face pinned to a pixel size, providing the measurement
/// capability the layout engine needs. Only metrics are read from the face;
/// rasterizing its glyphs is the renderer's business.
pub struct Font {
    face: OwnedFace,
    size: f64,
}

impl Font {
    /// Parse a font from raw bytes, sized to `size` pixels.
    pub fn load(bytes: Vec<u8>, size: f64) -> Result<Font, PageError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font { face, size })
    }

    /// Read and parse a font file, sized to `size` pixels.
    pub fn load_from_disk<P: AsRef<Path>>(path: P, size: f64) -> Result<Font, PageError> {
        let bytes = std::fs::read(path)?;
        Font::load(bytes, size)
    }

    /// Pixels per font unit at this size.
    fn scaling(&self) -> f64 {
        self.size / self.face.as_face_ref().units_per_em() as f64
    }

    /// Look up a glyph, falling back to the replacement character and then a
    /// question mark when the face doesn't cover `ch`.
    fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
    }
}

impl TextMeasure for Font {
    fn width_of(&self, text: &str) -> Px {
        let face = self.face.as_face_ref();
        let scaling = self.scaling();
        let width: f64 = text
            .chars()
            .filter_map(|ch| self.glyph_id(ch))
            .filter_map(|gid| face.glyph_hor_advance(gid))
            .map(|advance| advance as f64 * scaling)
            .sum();
        Px(width)
    }

    fn line_height(&self) -> Px {
        let face = self.face.as_face_ref();
        // height of a representative capital; faces without an 'A' outline
        // fall back to their vertical extent
        let probe = self
            .glyph_id('A')
            .and_then(|gid| face.glyph_bounding_box(gid));
        let height = match probe {
            Some(bbox) => (bbox.y_max as i32 - bbox.y_min as i32) as f64,
            None => (face.ascender() as i32 - face.descender() as i32) as f64,
        };
        Px(height * self.scaling())
    }
}

/// The face actually used for measurement: a parsed font when one could be
/// loaded, the built-in fixed-metrics face otherwise.
pub enum ResolvedFont {
    Face(Font),
    Builtin(FixedMetrics),
}

impl TextMeasure for ResolvedFont {
    fn width_of(&self, text: &str) -> Px {
        match self {
            ResolvedFont::Face(font) => font.width_of(text),
            ResolvedFont::Builtin(metrics) => metrics.width_of(text),
        }
    }

    fn line_height(&self) -> Px {
        match self {
            ResolvedFont::Face(font) => font.line_height(),
            ResolvedFont::Builtin(metrics) => metrics.line_height(),
        }
    }
}

/// Resolve a font spec into a measurement face. This never fails: a spec
/// without a path, an unreadable file, or an unparseable face all yield the
/// built-in fallback, with a warning logged for the failure cases.
pub fn resolve_font(spec: &FontSpec) -> ResolvedFont {
    match &spec.path {
        Some(path) => match Font::load_from_disk(path, spec.size) {
            Ok(font) => ResolvedFont::Face(font),
            Err(err) => {
                warn!(
                    "failed to load font {}: {err}; using the built-in face",
                    path.display()
                );
                ResolvedFont::Builtin(FixedMetrics::fallback())
            }
        },
        None => ResolvedFont::Builtin(FixedMetrics::fallback()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Px;

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        assert!(Font::load(vec![0u8; 16], 28.0).is_err());
    }

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let spec = FontSpec::at_path("/definitely/not/a/font.ttf", 28.0);
        let resolved = resolve_font(&spec);
        assert!(matches!(resolved, ResolvedFont::Builtin(_)));
        assert_eq!(resolved.line_height(), Px(11.0));
    }

    #[test]
    fn pathless_spec_uses_builtin() {
        let resolved = resolve_font(&FontSpec::default());
        assert_eq!(resolved.width_of("ab"), Px(12.0));
    }
}
