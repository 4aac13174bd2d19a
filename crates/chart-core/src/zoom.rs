// File: crates/chart-core/src/zoom.rs
// Summary: Zoom/pan transform, its clamping rules, and the controller that owns it.
// Notes:
// - Only the x-scale is ever rescaled. The series layer receives the uniform
//   transform as-is, so vertical stretching under zoom is expected.

use std::fmt;

use crate::geometry::{clamp, Point, Rect};
use crate::scale::TimeScale;

pub const MIN_SCALE: f64 = 1.0;
pub const MAX_SCALE: f64 = 10.0;

/// Uniform scale `k` followed by translation `(x, y)`: `p' = p * k + (x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self { k: 1.0, x: 0.0, y: 0.0 };

    pub const fn new(k: f64, x: f64, y: f64) -> Self {
        Self { k, x, y }
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(p.x * self.k + self.x, p.y * self.k + self.y)
    }

    pub fn invert(&self, p: Point) -> Point {
        Point::new(self.invert_x(p.x), self.invert_y(p.y))
    }
    pub fn invert_x(&self, x: f64) -> f64 { (x - self.x) / self.k }
    pub fn invert_y(&self, y: f64) -> f64 { (y - self.y) / self.k }

    /// Translate by `(dx, dy)` in pre-scale units.
    pub fn translate_by(&self, dx: f64, dy: f64) -> Self {
        Self { k: self.k, x: self.x + self.k * dx, y: self.y + self.k * dy }
    }

    /// Scale to `k` while the screen point `p` stays fixed.
    pub fn scale_about(&self, k: f64, p: Point) -> Self {
        let p0 = self.invert(p);
        Self { k, x: p.x - p0.x * k, y: p.y - p0.y * k }
    }

    /// X-scale whose domain is the part of the unzoomed domain currently in view.
    pub fn rescale_x(&self, x: &TimeScale) -> TimeScale {
        let (r0, r1) = x.range;
        let d0 = x.from_px(self.invert_x(r0));
        let d1 = x.from_px(self.invert_x(r1));
        TimeScale::new((d0, d1), x.range)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for ZoomTransform {
    fn default() -> Self { Self::IDENTITY }
}

/// SVG transform attribute syntax.
impl fmt::Display for ZoomTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({},{}) scale({})", self.x, self.y, self.k)
    }
}

/// Limits a transform must respect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomExtent {
    /// Allowed `k` interval.
    pub scale: (f64, f64),
    /// Content bounds the viewport may never leave.
    pub translate: Rect,
    /// The viewport itself.
    pub viewport: Rect,
}

impl ZoomExtent {
    /// Scale `[min_scale, max_scale]`, translate and viewport both the plot rectangle.
    pub fn for_plot(width: f64, height: f64, min_scale: f64, max_scale: f64) -> Self {
        let plot = Rect::from_size(width, height);
        Self { scale: (min_scale, max_scale), translate: plot, viewport: plot }
    }

    pub fn clamp_scale(&self, k: f64) -> f64 {
        clamp(k, self.scale.0, self.scale.1)
    }

    /// Shift `t` so the viewport stays inside the translate extent. When the
    /// content is narrower than the viewport it is centered instead.
    pub fn constrain(&self, t: ZoomTransform) -> ZoomTransform {
        let v = &self.viewport;
        let e = &self.translate;
        let dx0 = t.invert_x(v.left) - e.left;
        let dx1 = t.invert_x(v.right) - e.right;
        let dy0 = t.invert_y(v.top) - e.top;
        let dy1 = t.invert_y(v.bottom) - e.bottom;
        t.translate_by(settle(dx0, dx1), settle(dy0, dy1))
    }
}

fn settle(d0: f64, d1: f64) -> f64 {
    if d1 > d0 {
        return (d0 + d1) / 2.0;
    }
    let low = d0.min(0.0);
    if low != 0.0 { low } else { d1.max(0.0) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelMode {
    Pixel,
    Line,
    Page,
}

/// Raw interaction, in plot-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomEvent {
    Wheel { delta_y: f64, mode: WheelMode, at: Point },
    Pinch { factor: f64, at: Point },
    Drag { dx: f64, dy: f64 },
    Set(ZoomTransform),
}

/// Wheel delta to `log2(scale factor)`; wheel down zooms out.
pub fn wheel_delta(delta_y: f64, mode: WheelMode) -> f64 {
    let unit = match mode {
        WheelMode::Pixel => 0.002,
        WheelMode::Line => 0.05,
        WheelMode::Page => 1.0,
    };
    -delta_y * unit
}

/// Owns the current transform of one chart instance.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomController {
    transform: ZoomTransform,
    extent: ZoomExtent,
}

impl ZoomController {
    pub fn new(extent: ZoomExtent) -> Self {
        Self { transform: ZoomTransform::IDENTITY, extent }
    }

    pub fn for_plot(width: f64, height: f64) -> Self {
        Self::new(ZoomExtent::for_plot(width, height, MIN_SCALE, MAX_SCALE))
    }

    pub fn transform(&self) -> ZoomTransform { self.transform }
    pub fn extent(&self) -> &ZoomExtent { &self.extent }

    /// Scale clamp followed by translate constraint.
    pub fn clamp(&self, t: ZoomTransform) -> ZoomTransform {
        let k = self.extent.clamp_scale(t.k);
        self.extent.constrain(ZoomTransform { k, ..t })
    }

    /// Apply one interaction and return the clamped transform now in effect.
    pub fn on_zoom_event(&mut self, event: ZoomEvent) -> ZoomTransform {
        let t = self.transform;
        let proposed = match event {
            ZoomEvent::Wheel { delta_y, mode, at } => {
                let k = self.extent.clamp_scale(t.k * 2f64.powf(wheel_delta(delta_y, mode)));
                t.scale_about(k, at)
            }
            ZoomEvent::Pinch { factor, at } => {
                if !(factor.is_finite() && factor > 0.0) {
                    return t;
                }
                t.scale_about(self.extent.clamp_scale(t.k * factor), at)
            }
            ZoomEvent::Drag { dx, dy } => ZoomTransform { k: t.k, x: t.x + dx, y: t.y + dy },
            ZoomEvent::Set(next) => next,
        };
        if !(proposed.k.is_finite() && proposed.x.is_finite() && proposed.y.is_finite()) {
            tracing::debug!(?event, "ignoring non-finite zoom proposal");
            return t;
        }
        self.transform = self.clamp(proposed);
        self.transform
    }

    pub fn rescale_x(&self, x: &TimeScale) -> TimeScale {
        self.transform.rescale_x(x)
    }

    pub fn reset(&mut self) {
        self.transform = ZoomTransform::IDENTITY;
    }
}
