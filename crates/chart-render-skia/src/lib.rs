// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia raster backend: paints a waitlist-chart Scene on a CPU surface.

use anyhow::{Context, Result};
use skia_safe as skia;
use waitlist_chart::scene::{DrawCommand, Layer, Scene};
use waitlist_chart::Rgba;

pub mod text;

pub use text::TextShaper;

pub struct SkiaRenderer {
    text: TextShaper,
    draw_labels: bool,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { text: TextShaper::new(), draw_labels: true }
    }

    /// Skip all text; output then no longer depends on installed fonts.
    pub fn without_labels(mut self) -> Self {
        self.draw_labels = false;
        self
    }

    /// Paint every layer of `scene` in order onto `canvas`.
    pub fn paint(&self, canvas: &skia::Canvas, scene: &Scene) {
        canvas.clear(color(scene.background));
        for layer in scene.layers() {
            self.paint_layer(canvas, layer);
        }
    }

    /// Rasterize to unpremultiplied RGBA8: `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, scene: &Scene) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (scene.width.max(1), scene.height.max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w as i32, h as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        self.paint(surface.canvas(), scene);

        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = w as usize * 4;
        let mut px = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut px, row_bytes, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} surface failed");
        }
        Ok((px, w, h, row_bytes))
    }

    pub fn render_to_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let (px, w, h, _) = self.render_to_rgba8(scene)?;
        let img = image::RgbaImage::from_raw(w, h, px).context("pixel buffer does not match surface size")?;
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG failed")?;
        Ok(out.into_inner())
    }

    pub fn render_to_png(&self, scene: &Scene, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.render_to_png_bytes(scene)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
        Ok(())
    }

    fn paint_layer(&self, canvas: &skia::Canvas, layer: &Layer) {
        if layer.is_empty() {
            return;
        }
        canvas.save();
        canvas.translate((layer.origin.x as f32, layer.origin.y as f32));
        if let Some(clip) = layer.clip {
            let r = skia::Rect::from_ltrb(clip.left as f32, clip.top as f32, clip.right as f32, clip.bottom as f32);
            canvas.clip_rect(r, skia::ClipOp::Intersect, true);
        }
        let t = layer.transform;
        if !t.is_identity() {
            canvas.translate((t.x as f32, t.y as f32));
            canvas.scale((t.k as f32, t.k as f32));
        }
        for cmd in &layer.commands {
            self.paint_command(canvas, cmd);
        }
        canvas.restore();
    }

    fn paint_command(&self, canvas: &skia::Canvas, cmd: &DrawCommand) {
        match cmd {
            DrawCommand::Polyline { points, stroke, width, .. } => {
                let Some((first, rest)) = points.split_first() else { return };
                let mut path = skia::Path::new();
                path.move_to((first.x as f32, first.y as f32));
                for p in rest {
                    path.line_to((p.x as f32, p.y as f32));
                }
                let mut paint = stroke_paint(*stroke, *width);
                paint.set_stroke_join(skia::paint::Join::Round);
                canvas.draw_path(&path, &paint);
            }
            DrawCommand::Line { from, to, stroke, width } => {
                let paint = stroke_paint(*stroke, *width);
                canvas.draw_line((from.x as f32, from.y as f32), (to.x as f32, to.y as f32), &paint);
            }
            DrawCommand::Rect { rect, fill } => {
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_style(skia::paint::Style::Fill);
                paint.set_color(color(*fill));
                let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
                canvas.draw_rect(r, &paint);
            }
            DrawCommand::Text { at, text, size, color: c, anchor, baseline } => {
                if self.draw_labels {
                    self.text.draw(canvas, text, at.x as f32, at.y as f32, *size as f32, color(*c), *anchor, *baseline);
                }
            }
        }
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(c: Rgba, width: f64) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width as f32);
    paint.set_color(color(c));
    paint
}
