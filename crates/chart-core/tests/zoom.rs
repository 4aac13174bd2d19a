// File: crates/chart-core/tests/zoom.rs
// Purpose: Pan/zoom clamping and the zoom-only update path.

use proptest::prelude::*;
use waitlist_chart::geometry::Point;
use waitlist_chart::scene::DrawCommand;
use waitlist_chart::view::ViewOptions;
use waitlist_chart::{
    apply_view_transform, compute_view_model, Chart, ColorAssignment, Record, WheelMode, ZoomController, ZoomEvent,
    ZoomTransform, CATEGORY10,
};

const W: f64 = 710.0;
const H: f64 = 350.0;

fn event() -> impl Strategy<Value = ZoomEvent> {
    let at = (0.0..W, 0.0..H).prop_map(|(x, y)| Point::new(x, y));
    prop_oneof![
        (-2000.0..2000.0f64, at.clone()).prop_map(|(delta_y, at)| ZoomEvent::Wheel { delta_y, mode: WheelMode::Pixel, at }),
        (-30.0..30.0f64, at.clone()).prop_map(|(delta_y, at)| ZoomEvent::Wheel { delta_y, mode: WheelMode::Line, at }),
        (0.05..20.0f64, at).prop_map(|(factor, at)| ZoomEvent::Pinch { factor, at }),
        (-2000.0..2000.0f64, -2000.0..2000.0f64).prop_map(|(dx, dy)| ZoomEvent::Drag { dx, dy }),
        (-5.0..50.0f64, -5000.0..5000.0f64, -5000.0..5000.0f64)
            .prop_map(|(k, x, y)| ZoomEvent::Set(ZoomTransform::new(k, x, y))),
    ]
}

proptest! {
    #[test]
    fn transform_stays_within_extent(events in prop::collection::vec(event(), 1..40)) {
        let mut zoom = ZoomController::for_plot(W, H);
        for ev in events {
            let t = zoom.on_zoom_event(ev);
            prop_assert!((1.0..=10.0).contains(&t.k), "k out of range: {}", t.k);
            let eps = 1e-6;
            prop_assert!(t.invert_x(0.0) >= -eps);
            prop_assert!(t.invert_x(W) <= W + eps);
            prop_assert!(t.invert_y(0.0) >= -eps);
            prop_assert!(t.invert_y(H) <= H + eps);
        }
    }
}

#[test]
fn wheel_at_center_doubles_scale_and_halves_domain() {
    let mut zoom = ZoomController::for_plot(W, H);
    let t = zoom.on_zoom_event(ZoomEvent::Wheel { delta_y: -500.0, mode: WheelMode::Pixel, at: Point::new(W / 2.0, H / 2.0) });
    assert!((t.k - 2.0).abs() < 1e-12);
    assert!((t.x + W / 2.0).abs() < 1e-9);

    let x = waitlist_chart::TimeScale::new((0.0, 1.0), (0.0, W));
    let zoomed = zoom.rescale_x(&x);
    assert!((zoomed.domain.0 - 0.25).abs() < 1e-12);
    assert!((zoomed.domain.1 - 0.75).abs() < 1e-12);
}

#[test]
fn wheel_keeps_cursor_point_fixed() {
    let mut zoom = ZoomController::for_plot(W, H);
    let at = Point::new(200.0, 120.0);
    let before = zoom.transform().invert(at);
    let t = zoom.on_zoom_event(ZoomEvent::Wheel { delta_y: -3.0, mode: WheelMode::Line, at });
    assert!((t.k - 2f64.powf(0.15)).abs() < 1e-12);
    let after = t.apply(before);
    assert!((after.x - at.x).abs() < 1e-9 && (after.y - at.y).abs() < 1e-9);
}

#[test]
fn scale_saturates_at_limits() {
    let mut zoom = ZoomController::for_plot(W, H);
    let at = Point::new(100.0, 100.0);
    for _ in 0..20 {
        zoom.on_zoom_event(ZoomEvent::Wheel { delta_y: -1000.0, mode: WheelMode::Pixel, at });
    }
    assert_eq!(zoom.transform().k, 10.0);
    for _ in 0..20 {
        zoom.on_zoom_event(ZoomEvent::Wheel { delta_y: 1000.0, mode: WheelMode::Pixel, at });
    }
    let t = zoom.transform();
    assert_eq!(t.k, 1.0);
    assert!(t.x.abs() < 1e-9 && t.y.abs() < 1e-9);
}

#[test]
fn pan_at_identity_is_pinned() {
    let mut zoom = ZoomController::for_plot(W, H);
    assert_eq!(zoom.on_zoom_event(ZoomEvent::Drag { dx: 120.0, dy: -40.0 }), ZoomTransform::IDENTITY);
}

#[test]
fn invalid_pinch_is_ignored() {
    let mut zoom = ZoomController::for_plot(W, H);
    let before = zoom.transform();
    assert_eq!(zoom.on_zoom_event(ZoomEvent::Pinch { factor: 0.0, at: Point::new(1.0, 1.0) }), before);
    assert_eq!(zoom.on_zoom_event(ZoomEvent::Pinch { factor: f64::NAN, at: Point::new(1.0, 1.0) }), before);
}

fn sample() -> Vec<Record> {
    (1..=20)
        .map(|d| Record::parse(&format!("2023-09-{d:02}T00:00:00"), if d % 2 == 0 { "DSC10" } else { "DSC20" }, &d.to_string()))
        .collect()
}

#[test]
fn zoom_only_update_keeps_paths_and_y_axis() {
    let records = sample();
    let colors = ColorAssignment::from_records(&records, &CATEGORY10);
    let opts = ViewOptions::default();
    let base = compute_view_model(&records, "", &colors, ZoomTransform::IDENTITY, &opts);

    let mut zoomed = base.clone();
    let t = ZoomTransform::new(4.0, -300.0, -100.0);
    apply_view_transform(&mut zoomed, t);

    assert_eq!(zoomed.series.commands, base.series.commands);
    assert_eq!(zoomed.y_axis, base.y_axis);
    assert_eq!(zoomed.series.transform, t);
    assert_ne!(zoomed.x_axis.commands, base.x_axis.commands);

    // same result as recomputing with the transform from scratch
    let direct = compute_view_model(&records, "", &colors, t, &opts);
    assert_eq!(direct, zoomed);
}

#[test]
fn filter_change_resets_zoom() {
    let mut chart = Chart::with_records(sample(), ViewOptions::default());
    chart.on_zoom_event(ZoomEvent::Wheel { delta_y: -500.0, mode: WheelMode::Pixel, at: Point::new(10.0, 10.0) });
    assert!(!chart.zoom_transform().is_identity());
    assert!(!chart.scene().series.transform.is_identity());

    chart.set_filter("dsc10");
    assert!(chart.zoom_transform().is_identity());
    assert!(chart.scene().series.transform.is_identity());
    assert_eq!(chart.scene().path_count(), 1);
}

#[test]
fn zoomed_axis_ticks_stay_inside_plot() {
    let records = sample();
    let colors = ColorAssignment::from_records(&records, &CATEGORY10);
    let opts = ViewOptions::default();
    let scene = compute_view_model(&records, "", &colors, ZoomTransform::new(8.0, -2000.0, -1000.0), &opts);
    for cmd in &scene.x_axis.commands {
        if let DrawCommand::Text { at, .. } = cmd {
            assert!(at.x >= -0.5 && at.x <= opts.plot_width() + 0.5);
        }
    }
}
