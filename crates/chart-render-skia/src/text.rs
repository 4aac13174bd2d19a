// File: crates/chart-render-skia/src/text.rs
// Summary: Text shaping with Skia textlayout; places labels by anchor and baseline.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};
use waitlist_chart::scene::{Anchor, TextBaseline};

const FAMILIES: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(FAMILIES);

        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` so that `(x, y)` is the anchor point on the requested baseline.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        anchor: Anchor,
        baseline: TextBaseline,
    ) {
        let mut paragraph = self.layout(text, size, color);
        let width = paragraph.max_intrinsic_width();
        let left = match anchor {
            Anchor::Start => x,
            Anchor::Middle => x - width * 0.5,
            Anchor::End => x - width,
        };
        // Paragraph paints from its top-left corner
        let top = match baseline {
            TextBaseline::Hanging => y,
            TextBaseline::Middle => y - paragraph.height() * 0.5,
            TextBaseline::Alphabetic => y - paragraph.alphabetic_baseline(),
        };
        paragraph.paint(canvas, (left, top));
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
