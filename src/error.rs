use thiserror::Error;

/// All errors that the crate can generate. The variants double as the
/// failure classification reported to callers: [`PageError::NoText`] is a
/// validation failure, [`PageError::NoTextDetected`] and
/// [`PageError::Extraction`] are extraction failures, and everything else is
/// a collaborator error passed through unchanged.
///
/// Configuration anomalies (unknown paper names, unloadable fonts, margins
/// that swallow the canvas) are deliberately absent from the default paths:
/// those degrade gracefully with a logged warning. Callers that want them
/// rejected opt in through the strict parsers and
/// [`PageConfig::validate`](crate::PageConfig::validate).
#[derive(Error, Debug)]
pub enum PageError {
    /// No text was supplied and no image was available to extract any from.
    /// The operation aborts before layout runs.
    #[error("no text provided")]
    NoText,

    /// The text extractor ran successfully but found nothing usable in the
    /// supplied image. Distinct from a hard extractor failure.
    #[error("no text detected in the supplied image")]
    NoTextDetected,

    /// The text extractor itself failed.
    #[error("text extraction failed: {0}")]
    Extraction(String),

    /// The margins leave no printable area on the canvas. Only produced by
    /// strict validation; the lenient path clamps the area to zero instead.
    #[error("margins leave no printable area ({width}x{height} px)")]
    EmptyPrintableArea { width: i64, height: i64 },

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to decode or encode the raster
    Image(#[from] image::ImageError),
}
