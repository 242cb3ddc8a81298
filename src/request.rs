use crate::config::{FontSpec, PageConfig};
use crate::extract::{resolve_text, TextExtractor};
use crate::font::resolve_font;
use crate::layout::layout;
use crate::margins::Margins;
use crate::output::{encode, OutputKind};
use crate::papersize::{Orientation, PaperSize};
use crate::raster::CanvasRenderer;
use crate::units::Mm;
use crate::PageError;
use image::DynamicImage;
use log::debug;
use std::path::PathBuf;

/// The configuration surface accepted from a request layer, already typed
/// but carrying the documented defaults: A4, portrait, 15mm margins, 28px
/// text, image output.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub paper: PaperSize,
    pub orientation: Orientation,
    pub margins: Margins,
    pub font_size: f64,
    pub font_path: Option<PathBuf>,
    pub output: OutputKind,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            paper: PaperSize::default(),
            orientation: Orientation::default(),
            margins: Margins::default(),
            font_size: FontSpec::DEFAULT_SIZE,
            font_path: None,
            output: OutputKind::default(),
        }
    }
}

impl RenderOptions {
    /// Build options from a string key/value surface such as form fields.
    ///
    /// Recognized keys: `paper`, `orientation`, `margin_top`,
    /// `margin_right`, `margin_bottom`, `margin_left`, `font_size`,
    /// `output_type`. Unknown keys are ignored; unrecognized or malformed
    /// values keep their defaults (logged at debug level).
    pub fn from_pairs<'a, I>(pairs: I) -> RenderOptions
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = RenderOptions::default();
        for (key, value) in pairs {
            match key {
                "paper" => options.paper = PaperSize::parse_or_default(value),
                "orientation" => options.orientation = Orientation::parse_or_default(value),
                "margin_top" => set_margin(&mut options.margins.top, key, value),
                "margin_right" => set_margin(&mut options.margins.right, key, value),
                "margin_bottom" => set_margin(&mut options.margins.bottom, key, value),
                "margin_left" => set_margin(&mut options.margins.left, key, value),
                "font_size" => match value.parse::<f64>() {
                    Ok(size) if size > 0.0 => options.font_size = size,
                    _ => debug!("ignoring malformed font_size {value:?}"),
                },
                "output_type" => options.output = OutputKind::parse_or_default(value),
                _ => {}
            }
        }
        options
    }

    /// The immutable page configuration these options describe.
    pub fn page_config(&self) -> PageConfig {
        PageConfig {
            paper: self.paper,
            orientation: self.orientation,
            margins: self.margins,
            dpi: PageConfig::DEFAULT_DPI,
            font: FontSpec {
                path: self.font_path.clone(),
                size: self.font_size,
            },
        }
    }
}

fn set_margin(slot: &mut Mm, key: &str, value: &str) {
    match value.parse::<f64>() {
        Ok(mm) => *slot = Mm(mm),
        Err(_) => debug!("ignoring malformed {key} {value:?}"),
    }
}

/// Raw request input: typed text and/or an uploaded image.
#[derive(Default, Clone, Copy)]
pub struct PageInput<'a> {
    pub text: Option<&'a str>,
    pub image: Option<&'a DynamicImage>,
}

impl<'a> PageInput<'a> {
    pub fn text(text: &'a str) -> PageInput<'a> {
        PageInput {
            text: Some(text),
            image: None,
        }
    }

    pub fn image(image: &'a DynamicImage) -> PageInput<'a> {
        PageInput {
            text: None,
            image: Some(image),
        }
    }
}

/// A finished artifact plus the metadata a caller needs to report on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// The encoded artifact (PNG or PDF bytes, per `output`).
    pub bytes: Vec<u8>,
    pub output: OutputKind,
    /// Whether the text was cut off at the bottom of the page. Not an
    /// error; callers that care report it, the artifact is valid either
    /// way.
    pub truncated: bool,
}

/// The end-to-end pipeline: resolve the input to text, lay it out, hand the
/// layout to `renderer`, and encode the raster as the requested artifact.
///
/// Validation and extraction failures abort before layout runs; every
/// configuration anomaly past that point degrades gracefully, so a request
/// with usable text always produces an artifact.
pub fn process<R: CanvasRenderer>(
    input: PageInput<'_>,
    options: &RenderOptions,
    extractor: Option<&dyn TextExtractor>,
    renderer: &R,
) -> Result<RenderedPage, PageError> {
    let text = resolve_text(input.text, input.image, extractor)?;
    let config = options.page_config();
    let font = resolve_font(&config.font);
    let result = layout(&text, &config, &font);
    let raster = renderer.render(&result)?;
    let bytes = encode(&raster, options.output, config.dpi)?;
    Ok(RenderedPage {
        bytes,
        output: options.output,
        truncated: result.truncated,
    })
}
