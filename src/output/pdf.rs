use crate::PageError;
use image::{DynamicImage, GenericImageView};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Content, Date as PDate, Filter, Finish, Name, Pdf, Rect, Ref, TextStr};
use std::io::Write;

/// Metadata stamped into the wrapped document's info block. The creator
/// field and creation timestamp are always written.
#[derive(Default, Debug, Clone)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
}

// A wrapped page is a fixed, tiny object graph, so ids are assigned up
// front instead of through a reference registry.
struct ObjectIds {
    catalog: Ref,
    page_tree: Ref,
    page: Ref,
    content: Ref,
    image: Ref,
    smask: Ref,
    info: Ref,
}

impl ObjectIds {
    fn assign() -> ObjectIds {
        ObjectIds {
            catalog: Ref::new(1),
            page_tree: Ref::new(2),
            page: Ref::new(3),
            content: Ref::new(4),
            image: Ref::new(5),
            smask: Ref::new(6),
            info: Ref::new(7),
        }
    }
}

/// Wrap a rendered page raster into a single-page PDF.
///
/// The page's media box is the raster's physical size: pixels at `dpi`
/// converted to points (72 per inch). The raster is embedded as a
/// zlib-compressed RGB image XObject (with its alpha channel, when it has
/// one, as a grayscale soft mask) and placed full-bleed by a one-command
/// content stream.
pub fn write_document<W: Write>(
    raster: &DynamicImage,
    dpi: f64,
    info: &DocumentInfo,
    mut out: W,
) -> Result<(), PageError> {
    let width_pt = raster.width() as f32 / dpi as f32 * 72.0;
    let height_pt = raster.height() as f32 / dpi as f32 * 72.0;

    let ids = ObjectIds::assign();
    let mut writer = Pdf::new();

    write_info(&mut writer, ids.info, info);

    writer.catalog(ids.catalog).pages(ids.page_tree);
    writer.pages(ids.page_tree).count(1).kids([ids.page]);

    let mut page = writer.page(ids.page);
    page.media_box(Rect {
        x1: 0.0,
        y1: 0.0,
        x2: width_pt,
        y2: height_pt,
    });
    page.parent(ids.page_tree);
    page.contents(ids.content);
    let mut resources = page.resources();
    resources.x_objects().pair(Name(b"P0"), ids.image);
    resources.finish();
    page.finish();

    let mut content = Content::new();
    content.save_state();
    content.transform([width_pt, 0.0, 0.0, height_pt, 0.0, 0.0]);
    content.x_object(Name(b"P0"));
    content.restore_state();
    writer.stream(ids.content, &content.finish());

    let level = CompressionLevel::DefaultLevel as u8;

    let mask = raster.color().has_alpha().then(|| {
        let alphas: Vec<u8> = raster.pixels().map(|p| (p.2).0[3]).collect();
        compress_to_vec_zlib(&alphas, level)
    });

    let bytes = compress_to_vec_zlib(raster.to_rgb8().as_raw(), level);

    let mut image = writer.image_xobject(ids.image, &bytes);
    image.filter(Filter::FlateDecode);
    image.width(raster.width() as i32);
    image.height(raster.height() as i32);
    image.color_space().device_rgb();
    image.bits_per_component(8);
    if mask.is_some() {
        image.s_mask(ids.smask);
    }
    image.finish();

    if let Some(mask) = mask {
        let mut s_mask = writer.image_xobject(ids.smask, &mask);
        s_mask.filter(Filter::FlateDecode);
        s_mask.width(raster.width() as i32);
        s_mask.height(raster.height() as i32);
        s_mask.color_space().device_gray();
        s_mask.bits_per_component(8);
    }

    out.write_all(&writer.finish()).map_err(Into::into)
}

fn write_info(writer: &mut Pdf, id: Ref, info: &DocumentInfo) {
    let mut block = writer.document_info(id);

    if let Some(title) = &info.title {
        block.title(TextStr(title.as_str()));
    }
    if let Some(author) = &info.author {
        block.author(TextStr(author.as_str()));
    }
    block.creator(TextStr(concat!(
        env!("CARGO_PKG_NAME"),
        " v",
        env!("CARGO_PKG_VERSION")
    )));

    use chrono::prelude::*;
    let now = Local::now();
    let offset = now.offset().fix();
    let offset_hours = offset.local_minus_utc() / (60 * 60);
    let offset_minutes = ((offset.local_minus_utc() - (offset_hours * (60 * 60))) / 60).abs();
    let date = PDate::new(now.year() as u16)
        .month(now.month() as u8)
        .day(now.day() as u8)
        .hour(now.hour() as u8)
        .minute(now.minute() as u8)
        .second(now.second() as u8)
        .utc_offset_hour(offset_hours as i8)
        .utc_offset_minute(offset_minutes as u8);
    block.creation_date(date);
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn wraps_an_opaque_raster() {
        let raster = DynamicImage::new_rgb8(16, 16);
        let mut bytes = Vec::new();
        write_document(&raster, 150.0, &DocumentInfo::default(), &mut bytes).unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");
        // header + catalog + page + image stream is never this small
        assert!(bytes.len() > 200);
    }

    #[test]
    fn alpha_channels_get_a_soft_mask() {
        let raster = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            8,
            8,
            Rgba([255, 0, 0, 128]),
        ));
        let mut opaque = Vec::new();
        write_document(
            &DynamicImage::new_rgb8(8, 8),
            150.0,
            &DocumentInfo::default(),
            &mut opaque,
        )
        .unwrap();
        let mut masked = Vec::new();
        write_document(&raster, 150.0, &DocumentInfo::default(), &mut masked).unwrap();
        // the masked variant carries one more stream
        assert!(masked.len() > opaque.len());
        assert!(masked.windows(5).any(|w| w == b"SMask"));
    }

    #[test]
    fn info_fields_are_written() {
        let info = DocumentInfo {
            title: Some("A page".into()),
            author: Some("somebody".into()),
        };
        let mut bytes = Vec::new();
        write_document(&DynamicImage::new_rgb8(4, 4), 150.0, &info, &mut bytes).unwrap();
        assert!(bytes.windows(6).any(|w| w == b"A page"));
    }
}
