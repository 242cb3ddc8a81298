//! Output encapsulation: a rendered page raster leaves the pipeline either
//! as PNG bytes or wrapped into a single-page PDF document.

mod pdf;
pub use pdf::{write_document, DocumentInfo};

use crate::PageError;
use image::{DynamicImage, ImageOutputFormat, RgbImage};
use log::debug;
use std::fmt;
use std::io::Cursor;
use std::str::FromStr;
use thiserror::Error;

/// Which artifact the pipeline produces.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OutputKind {
    /// The page raster itself, PNG-encoded.
    #[default]
    Image,
    /// The raster wrapped into a single-page PDF.
    Document,
}

/// Strict parse failure for an output-kind name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized output type: {0:?}")]
pub struct UnknownOutputKind(pub String);

impl OutputKind {
    /// Parse an output-type name, resolving anything unrecognized to
    /// [`OutputKind::Image`].
    pub fn parse_or_default(name: &str) -> OutputKind {
        name.parse().unwrap_or_else(|_| {
            debug!("unknown output type {name:?}, falling back to image");
            OutputKind::default()
        })
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::Image => write!(f, "image"),
            OutputKind::Document => write!(f, "document"),
        }
    }
}

impl FromStr for OutputKind {
    type Err = UnknownOutputKind;

    fn from_str(s: &str) -> Result<OutputKind, UnknownOutputKind> {
        if s.eq_ignore_ascii_case("image") || s.eq_ignore_ascii_case("png") {
            Ok(OutputKind::Image)
        } else if s.eq_ignore_ascii_case("document") || s.eq_ignore_ascii_case("pdf") {
            Ok(OutputKind::Document)
        } else {
            Err(UnknownOutputKind(s.to_owned()))
        }
    }
}

/// Encode a rendered page according to `kind`. `dpi` is the resolution the
/// raster was produced at; the document wrapper needs it to size its page
/// in points.
pub fn encode(raster: &RgbImage, kind: OutputKind, dpi: f64) -> Result<Vec<u8>, PageError> {
    match kind {
        OutputKind::Image => {
            let mut bytes = Cursor::new(Vec::new());
            raster.write_to(&mut bytes, ImageOutputFormat::Png)?;
            Ok(bytes.into_inner())
        }
        OutputKind::Document => {
            let mut bytes = Vec::new();
            write_document(
                &DynamicImage::ImageRgb8(raster.clone()),
                dpi,
                &DocumentInfo::default(),
                &mut bytes,
            )?;
            Ok(bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn parsing_accepts_pdf_as_an_alias_for_document() {
        assert_eq!(OutputKind::parse_or_default("pdf"), OutputKind::Document);
        assert_eq!(
            OutputKind::parse_or_default("document"),
            OutputKind::Document
        );
        assert_eq!(OutputKind::parse_or_default("image"), OutputKind::Image);
        assert_eq!(OutputKind::parse_or_default("docx"), OutputKind::Image);
        assert!("docx".parse::<OutputKind>().is_err());
    }

    #[test]
    fn image_output_is_png() {
        let raster = RgbImage::from_pixel(8, 8, Rgb([255, 255, 255]));
        let bytes = encode(&raster, OutputKind::Image, 150.0).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }

    #[test]
    fn document_output_is_pdf() {
        let raster = RgbImage::from_pixel(8, 8, Rgb([255, 255, 255]));
        let bytes = encode(&raster, OutputKind::Document, 150.0).unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");
    }
}
