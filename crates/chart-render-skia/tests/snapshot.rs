// File: crates/chart-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders the reference dataset without labels to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else compares decoded pixels against the committed snapshot. Channels may
//   drift by PIXEL_TOLERANCE on anti-aliased edges; at most MAX_DRIFTED_PIXELS
//   pixels may exceed it (line end caps differ slightly between Skia builds).

use waitlist_chart::view::ViewOptions;
use waitlist_chart::{Chart, Record};
use waitlist_render_skia::SkiaRenderer;

const PIXEL_TOLERANCE: u8 = 64;
const MAX_DRIFTED_PIXELS: usize = 600;

fn render_bytes() -> Vec<u8> {
    let mut chart = Chart::with_records(
        vec![
            Record::parse("2023-09-01T00:00:00", "DSC10", "5"),
            Record::parse("2023-09-02T00:00:00", "DSC10", "3"),
            Record::parse("2023-09-03T00:00:00", "DSC10", "N/A"),
            Record::parse("2023-09-04T00:00:00", "DSC10", "4"),
            Record::parse("2023-09-01T00:00:00", "DSC100", "2"),
            Record::parse("2023-09-04T00:00:00", "DSC100", "1"),
        ],
        ViewOptions::default(),
    );
    chart.set_filter("dsc1");
    // labels off to avoid font variance across platforms
    SkiaRenderer::new().without_labels().render_to_png_bytes(chart.scene()).expect("render png")
}

#[test]
fn golden_reference_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("reference_chart.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    let want = std::fs::read(&snap_path).expect("read snapshot; set UPDATE_SNAPSHOTS=1 to bless");
    // Compare decoded pixel buffers to avoid PNG encoder variance
    let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
    let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
    assert_eq!(got_img.dimensions(), want_img.dimensions());
    let drifted = got_img
        .pixels()
        .zip(want_img.pixels())
        .filter(|(g, w)| g.0.iter().zip(w.0.iter()).any(|(a, b)| a.abs_diff(*b) > PIXEL_TOLERANCE))
        .count();
    assert!(
        drifted <= MAX_DRIFTED_PIXELS,
        "{drifted} pixels differ from golden snapshot {}",
        snap_path.display()
    );

    // legend swatches and the plot background are exact regardless of AA
    assert_eq!(got_img.get_pixel(805, 25).0, [0x1f, 0x77, 0xb4, 255]);
    assert_eq!(got_img.get_pixel(805, 45).0, [0xff, 0x7f, 0x0e, 255]);
    assert_eq!(got_img.get_pixel(400, 100).0, [255, 255, 255, 255]);
}
