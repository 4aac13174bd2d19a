// File: crates/chart-core/src/view.rs
// Summary: Pure view model: filter -> group -> scales -> series paths, axes and legend as a Scene.
// Notes:
// - `compute_view_model` rebuilds everything; `apply_view_transform` only swaps
//   the series layer transform and redraws the bottom axis.

use crate::color::ColorAssignment;
use crate::filter::{NameFilter, DEFAULT_EXACT_TERMS};
use crate::geometry::{Point, Rect};
use crate::legend::{legend_keys, render_legend, LegendPolicy};
use crate::record::Record;
use crate::scale::{build_scales, Scales, TimeScale, ValueScale};
use crate::scene::{Anchor, DrawCommand, Layer, Scene, TextBaseline};
use crate::series::{group, Series};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::zoom::ZoomTransform;

pub const AXIS_FONT_SIZE: f64 = 10.0;
pub const TICK_SIZE: f64 = 6.0;
pub const TICK_PADDING: f64 = 3.0;
pub const STATUS_FONT_SIZE: f64 = 14.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ViewOptions {
    /// Chart width; the legend column is added to the right of it.
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub theme: Theme,
    pub legend_policy: LegendPolicy,
    pub legend_width: u32,
    pub exact_terms: Vec<String>,
    pub sort_points_by_time: bool,
    pub stroke_width: f64,
    pub x_ticks: usize,
    pub y_ticks: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            legend_policy: LegendPolicy::default(),
            legend_width: 160,
            exact_terms: DEFAULT_EXACT_TERMS.iter().map(|s| s.to_string()).collect(),
            sort_points_by_time: false,
            stroke_width: 2.0,
            x_ticks: 10,
            y_ticks: 10,
        }
    }
}

impl ViewOptions {
    pub fn plot_width(&self) -> f64 {
        self.insets.plot_size(self.width, self.height).0.max(1) as f64
    }
    pub fn plot_height(&self) -> f64 {
        self.insets.plot_size(self.width, self.height).1.max(1) as f64
    }
    /// Plot rectangle in canvas coordinates.
    pub fn plot_rect(&self) -> Rect {
        Rect::from_ltwh(self.insets.left as f64, self.insets.top as f64, self.plot_width(), self.plot_height())
    }
    pub fn canvas_width(&self) -> u32 {
        self.width + self.legend_width
    }
}

/// Plottable points of a series in plot-local pixels, point order preserved.
pub fn series_path(series: &Series, scales: &Scales) -> Vec<Point> {
    series.plottable().map(|(t, v)| Point::new(scales.x.to_px(t), scales.y.to_px(v))).collect()
}

/// One stroked path per series that has at least one plottable point.
pub fn render_series(series: &[Series], scales: &Scales, colors: &ColorAssignment, stroke_width: f64) -> Vec<DrawCommand> {
    series
        .iter()
        .filter_map(|s| {
            let points = series_path(s, scales);
            if points.is_empty() {
                tracing::debug!(course = %s.key, "series has no plottable points");
                return None;
            }
            Some(DrawCommand::Polyline {
                key: s.key.clone(),
                points,
                stroke: colors.color_of(&s.key),
                width: stroke_width,
            })
        })
        .collect()
}

/// Bottom axis in axis-local coordinates (y = 0 is the axis line).
pub fn render_x_axis(x: &TimeScale, ticks: usize, theme: &Theme) -> Vec<DrawCommand> {
    let (r0, r1) = x.range;
    let mut out = domain_line(Point::new(r0, 0.0), Point::new(r1, 0.0), Point::new(0.0, TICK_SIZE), theme);
    let (lo, hi) = (r0.min(r1) - 0.5, r0.max(r1) + 0.5);
    for tick in x.ticks(ticks) {
        let px = x.to_px(tick.value);
        if px < lo || px > hi {
            continue;
        }
        out.push(DrawCommand::Line {
            from: Point::new(px, 0.0),
            to: Point::new(px, TICK_SIZE),
            stroke: theme.tick,
            width: 1.0,
        });
        out.push(DrawCommand::Text {
            at: Point::new(px, TICK_SIZE + TICK_PADDING),
            text: tick.label,
            size: AXIS_FONT_SIZE,
            color: theme.axis_label,
            anchor: Anchor::Middle,
            baseline: TextBaseline::Hanging,
        });
    }
    out
}

/// Left axis in axis-local coordinates (x = 0 is the axis line).
pub fn render_y_axis(y: &ValueScale, ticks: usize, theme: &Theme) -> Vec<DrawCommand> {
    let (r0, r1) = y.range;
    let mut out = domain_line(Point::new(0.0, r0), Point::new(0.0, r1), Point::new(-TICK_SIZE, 0.0), theme);
    for tick in y.ticks(ticks) {
        let py = y.to_px(tick.value);
        out.push(DrawCommand::Line {
            from: Point::new(-TICK_SIZE, py),
            to: Point::new(0.0, py),
            stroke: theme.tick,
            width: 1.0,
        });
        out.push(DrawCommand::Text {
            at: Point::new(-(TICK_SIZE + TICK_PADDING), py),
            text: tick.label,
            size: AXIS_FONT_SIZE,
            color: theme.axis_label,
            anchor: Anchor::End,
            baseline: TextBaseline::Middle,
        });
    }
    out
}

/// Domain line with outer ticks at both ends.
fn domain_line(from: Point, to: Point, outer: Point, theme: &Theme) -> Vec<DrawCommand> {
    let line = |a: Point, b: Point| DrawCommand::Line { from: a, to: b, stroke: theme.axis_line, width: 1.0 };
    vec![
        line(from, to),
        line(from, Point::new(from.x + outer.x, from.y + outer.y)),
        line(to, Point::new(to.x + outer.x, to.y + outer.y)),
    ]
}

/// Scene with layers positioned but nothing drawn.
pub fn empty_scene(opts: &ViewOptions) -> Scene {
    let plot = opts.plot_rect();
    Scene {
        width: opts.canvas_width(),
        height: opts.height,
        background: opts.theme.background,
        plot,
        theme: opts.theme,
        scales: None,
        x_ticks: opts.x_ticks,
        series: Layer::new(Point::new(plot.left, plot.top)).with_clip(Rect::from_size(plot.width(), plot.height())),
        x_axis: Layer::new(Point::new(plot.left, plot.bottom)),
        y_axis: Layer::new(Point::new(plot.left, plot.top)),
        legend: Layer::new(Point::new(opts.width as f64, plot.top)),
        overlay: Layer::new(Point::new(plot.left, plot.top)),
    }
}

/// Empty plot with a centered status line (loading, load failure).
pub fn status_scene(opts: &ViewOptions, message: &str) -> Scene {
    let mut scene = empty_scene(opts);
    let plot = scene.plot;
    scene.overlay.commands.push(DrawCommand::Text {
        at: Point::new(plot.width() * 0.5, plot.height() * 0.5),
        text: message.to_string(),
        size: STATUS_FONT_SIZE,
        color: opts.theme.status_text,
        anchor: Anchor::Middle,
        baseline: TextBaseline::Middle,
    });
    scene
}

/// Build a complete frame from the full record set and the current inputs.
///
/// `colors` must come from the full dataset; it is only read here. When the
/// filter leaves nothing with a valid timestamp the plot area stays empty.
pub fn compute_view_model(
    records: &[Record],
    term: &str,
    colors: &ColorAssignment,
    zoom: ZoomTransform,
    opts: &ViewOptions,
) -> Scene {
    let filter = NameFilter::new(term, &opts.exact_terms);
    let visible = filter.apply(records);
    let mut series = group(visible.iter().copied());
    if opts.sort_points_by_time {
        series = series.into_iter().map(Series::sorted_by_time).collect();
    }

    let mut scene = empty_scene(opts);
    let keys = legend_keys(opts.legend_policy, &series, colors);
    scene.legend.commands = render_legend(&keys, colors, &opts.theme);

    let Some(scales) = build_scales(visible.iter().copied(), opts.plot_width(), opts.plot_height()) else {
        tracing::debug!(term = filter.term(), visible = visible.len(), "nothing drawable; plot left empty");
        return scene;
    };

    scene.scales = Some(scales);
    scene.series.commands = render_series(&series, &scales, colors, opts.stroke_width);
    scene.y_axis.commands = render_y_axis(&scales.y, opts.y_ticks, &opts.theme);
    apply_view_transform(&mut scene, zoom);

    tracing::debug!(
        term = filter.term(),
        visible = visible.len(),
        series = series.len(),
        paths = scene.path_count(),
        "computed view model"
    );
    scene
}

/// Zoom/pan update without recomputing path geometry: the series layer gets
/// `transform` and the bottom axis is redrawn from the rescaled x-scale. The
/// y-axis is left untouched.
pub fn apply_view_transform(scene: &mut Scene, transform: ZoomTransform) {
    scene.series.transform = transform;
    if let Some(scales) = scene.scales {
        scene.x_axis.commands = render_x_axis(&transform.rescale_x(&scales.x), scene.x_ticks, &scene.theme);
    }
}
