// File: crates/chart-render-skia/tests/rgba.rs
// Purpose: Validate RGBA buffer shape, background, stroke colors and plot clipping.

use waitlist_chart::geometry::Point;
use waitlist_chart::view::ViewOptions;
use waitlist_chart::{Chart, Record, Rgba, WheelMode, ZoomEvent, CATEGORY10};
use waitlist_render_skia::SkiaRenderer;

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> Rgba {
    let i = y * stride + x * 4;
    Rgba::from_argb(px[i + 3], px[i], px[i + 1], px[i + 2])
}

fn near(a: Rgba, b: Rgba, tol: i32) -> bool {
    [(a.r, b.r), (a.g, b.g), (a.b, b.b)].iter().all(|&(x, y)| (x as i32 - y as i32).abs() <= tol)
}

// A flat line at half height: plot y 175, canvas y 195
fn flat_chart() -> Chart {
    Chart::with_records(
        vec![
            Record::parse("2023-09-01T00:00:00", "FLAT", "4"),
            Record::parse("2023-09-03T00:00:00", "FLAT", "4"),
            Record::parse("2023-09-02T00:00:00", "PEAK", "8"),
        ],
        ViewOptions::default(),
    )
}

#[test]
fn render_rgba8_buffer() {
    let chart = flat_chart();
    let renderer = SkiaRenderer::new().without_labels();
    let (px, w, h, stride) = renderer.render_to_rgba8(chart.scene()).expect("rgba render");
    assert_eq!((w, h), (960, 400));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    assert_eq!(pixel(&px, stride, 2, 2), Rgba::rgb(255, 255, 255));
    assert!(near(pixel(&px, stride, 400, 195), CATEGORY10[0], 24));
    assert_eq!(pixel(&px, stride, 400, 100), Rgba::rgb(255, 255, 255));
}

#[test]
fn legend_swatches_use_course_colors() {
    let chart = flat_chart();
    let (px, _, _, stride) = SkiaRenderer::new().without_labels().render_to_rgba8(chart.scene()).unwrap();
    // swatches start at (800, 20) and stack every 20px
    assert!(near(pixel(&px, stride, 805, 25), CATEGORY10[0], 2));
    assert!(near(pixel(&px, stride, 805, 45), CATEGORY10[1], 2));
}

#[test]
fn zoomed_series_is_clipped_to_plot() {
    let mut chart = flat_chart();
    let at = Point::new(355.0, 175.0);
    for _ in 0..5 {
        chart.on_zoom_event(ZoomEvent::Wheel { delta_y: -500.0, mode: WheelMode::Pixel, at });
    }
    assert_eq!(chart.zoom_transform().k, 10.0);
    let (px, _, _, stride) = SkiaRenderer::new().without_labels().render_to_rgba8(chart.scene()).unwrap();
    // the thickened line stays inside the plot and never spills into the margins
    assert!(near(pixel(&px, stride, 400, 195), CATEGORY10[0], 24));
    assert_eq!(pixel(&px, stride, 30, 195), Rgba::rgb(255, 255, 255));
    assert_eq!(pixel(&px, stride, 785, 195), Rgba::rgb(255, 255, 255));
}
