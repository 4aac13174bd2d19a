// File: crates/chart-core/src/scene.rs
// Summary: Renderer-agnostic draw list for one frame, split into layers.

use crate::color::Rgba;
use crate::geometry::{Point, Rect};
use crate::scale::Scales;
use crate::theme::Theme;
use crate::zoom::ZoomTransform;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// Vertical placement of text relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Alphabetic,
    Middle,
    Hanging,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Open stroked path, no fill. `key` names the course it belongs to.
    Polyline { key: String, points: Vec<Point>, stroke: Rgba, width: f64 },
    Line { from: Point, to: Point, stroke: Rgba, width: f64 },
    Rect { rect: Rect, fill: Rgba },
    Text { at: Point, text: String, size: f64, color: Rgba, anchor: Anchor, baseline: TextBaseline },
}

/// Commands sharing a coordinate space.
///
/// Painting order for a point `p`: `origin + transform(p)`, clipped to `clip`
/// expressed in origin-relative, pre-transform space.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub origin: Point,
    pub transform: ZoomTransform,
    pub clip: Option<Rect>,
    pub commands: Vec<DrawCommand>,
}

impl Layer {
    pub fn new(origin: Point) -> Self {
        Self { origin, transform: ZoomTransform::IDENTITY, clip: None, commands: Vec::new() }
    }

    pub fn with_clip(mut self, clip: Rect) -> Self {
        self.clip = Some(clip);
        self
    }

    pub fn is_empty(&self) -> bool { self.commands.is_empty() }
}

/// A full chart frame: plot geometry plus enough state to redraw the bottom
/// axis when only the zoom transform changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Rgba,
    /// Plot rectangle in canvas coordinates.
    pub plot: Rect,
    pub theme: Theme,
    /// Unzoomed scales, `None` when nothing was drawable.
    pub scales: Option<Scales>,
    pub x_ticks: usize,
    pub series: Layer,
    pub x_axis: Layer,
    pub y_axis: Layer,
    pub legend: Layer,
    pub overlay: Layer,
}

impl Scene {
    /// Layers in paint order.
    pub fn layers(&self) -> [&Layer; 5] {
        [&self.series, &self.x_axis, &self.y_axis, &self.legend, &self.overlay]
    }

    /// Number of drawn series paths.
    pub fn path_count(&self) -> usize {
        self.series.commands.iter().filter(|c| matches!(c, DrawCommand::Polyline { .. })).count()
    }

    /// `(course, points, stroke)` of every series path, in draw order.
    pub fn series_paths(&self) -> impl Iterator<Item = (&str, &[Point], Rgba)> + '_ {
        self.series.commands.iter().filter_map(|c| match c {
            DrawCommand::Polyline { key, points, stroke, .. } => Some((key.as_str(), points.as_slice(), *stroke)),
            _ => None,
        })
    }

    /// Text of the overlay status line, if any.
    pub fn status(&self) -> Option<&str> {
        self.overlay.commands.iter().find_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
