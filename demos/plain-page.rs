use image::RgbImage;
use page_gen::{
    blank_page, process, CanvasRenderer, LayoutResult, PageError, PageInput, RenderOptions,
};

/// Leaves the canvas blank and prints the layout to stdout instead of
/// painting glyphs. Wiring up a real rasterizer is the renderer's job,
/// not this library's.
struct BlankInk;

impl CanvasRenderer for BlankInk {
    fn render(&self, layout: &LayoutResult) -> Result<RgbImage, PageError> {
        for line in &layout.lines {
            println!("{:>5},{:>5}  {}", line.x, line.y, line.text);
        }
        Ok(blank_page(&layout.geometry))
    }
}

fn main() {
    env_logger::init();

    let text = "Hello, world!\n\nThis second paragraph is long enough that the greedy \
                wrap has to break it across a handful of lines, while the blank line \
                above it keeps its own vertical slot on the page.";

    let options = RenderOptions::from_pairs([("paper", "A4"), ("font_size", "28")]);
    let page =
        process(PageInput::text(text), &options, None, &BlankInk).expect("text was provided");

    std::fs::write("plain-page.png", &page.bytes).expect("can write plain-page.png");
    println!("wrote plain-page.png ({} bytes)", page.bytes.len());
}
