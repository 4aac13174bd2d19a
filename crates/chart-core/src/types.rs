// File: crates/chart-core/src/types.rs
// Summary: Canvas defaults and plot margins.

use serde::Deserialize;

/// Default chart width in pixels, legend column excluded.
pub const WIDTH: u32 = 800;
/// Default chart height in pixels.
pub const HEIGHT: u32 = 400;

/// Margins between the canvas edge and the plot area, in pixels.
/// Axes and their labels live inside these margins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn horizontal(&self) -> u32 { self.left + self.right }
    pub const fn vertical(&self) -> u32 { self.top + self.bottom }

    /// Plot size left inside a `width` x `height` canvas; zero when the margins eat it all.
    pub const fn plot_size(&self, width: u32, height: u32) -> (u32, u32) {
        (width.saturating_sub(self.horizontal()), height.saturating_sub(self.vertical()))
    }
}

impl Default for Insets {
    fn default() -> Self {
        // top 20, right 30, bottom 30, left 60
        Self::new(60, 30, 20, 30)
    }
}
