use crate::PageError;
use image::DynamicImage;

/// Contract for pulling text out of an uploaded image, in practice an OCR
/// engine. The crate ships no engine of its own; callers plug one in at the
/// [`process`](crate::process) boundary.
///
/// Implementations return `Err` only when the engine itself fails. An
/// engine that runs fine but finds nothing should return an empty string;
/// [`resolve_text`] maps that to [`PageError::NoTextDetected`], which is a
/// different failure than a broken engine.
pub trait TextExtractor {
    fn extract_text(&self, image: &DynamicImage) -> Result<String, PageError>;
}

/// Decide what text gets laid out.
///
/// Typed text wins unconditionally. Without it, an uploaded image plus an
/// extractor yields extracted text, with its internal line breaks flattened
/// to spaces so the recovered text reflows as one paragraph. With neither,
/// the request is invalid.
pub fn resolve_text(
    text: Option<&str>,
    image: Option<&DynamicImage>,
    extractor: Option<&dyn TextExtractor>,
) -> Result<String, PageError> {
    if let Some(text) = text {
        let text = text.trim();
        if !text.is_empty() {
            return Ok(text.to_owned());
        }
    }

    if let (Some(image), Some(extractor)) = (image, extractor) {
        let extracted = extractor.extract_text(image).map_err(|err| match err {
            already @ PageError::Extraction(_) => already,
            other => PageError::Extraction(other.to_string()),
        })?;
        let extracted = extracted.trim();
        if extracted.is_empty() {
            return Err(PageError::NoTextDetected);
        }
        return Ok(extracted.replace('\n', " "));
    }

    Err(PageError::NoText)
}
