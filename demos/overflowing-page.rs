use image::RgbImage;
use page_gen::{
    blank_page, process, CanvasRenderer, LayoutResult, PageError, PageInput, RenderOptions,
};

struct BlankInk;

impl CanvasRenderer for BlankInk {
    fn render(&self, layout: &LayoutResult) -> Result<RgbImage, PageError> {
        Ok(blank_page(&layout.geometry))
    }
}

fn main() {
    env_logger::init();

    // far more text than one A5 page can hold
    let text = lipsum::lipsum(2000);

    let options = RenderOptions::from_pairs([
        ("paper", "A5"),
        ("orientation", "landscape"),
        ("output_type", "pdf"),
    ]);

    let page =
        process(PageInput::text(&text), &options, None, &BlankInk).expect("text was provided");

    if page.truncated {
        println!("the text did not fit on one page; the overflow was dropped");
    }

    std::fs::write("overflowing-page.pdf", &page.bytes).expect("can write overflowing-page.pdf");
    println!("wrote overflowing-page.pdf ({} bytes)", page.bytes.len());
}
