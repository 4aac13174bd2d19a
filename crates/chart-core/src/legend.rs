// File: crates/chart-core/src/legend.rs
// Summary: Legend rows (swatch + course label) and the policy deciding which courses are listed.

use serde::Deserialize;

use crate::color::ColorAssignment;
use crate::geometry::{Point, Rect};
use crate::scene::{Anchor, DrawCommand, TextBaseline};
use crate::series::Series;
use crate::theme::Theme;

/// Vertical distance between legend rows.
pub const ROW_PITCH: f64 = 20.0;
pub const SWATCH_SIZE: f64 = 10.0;
/// Label x offset from the swatch's left edge.
pub const LABEL_OFFSET: f64 = 20.0;
pub const LABEL_SIZE: f64 = 12.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegendPolicy {
    /// List only the courses drawn under the current filter.
    #[default]
    MirrorChart,
    /// List every course of the loaded dataset.
    Global,
}

/// Keys to list, in series order (mirror) or assignment order (global).
/// Mirroring skips series with no plottable point, since no line is drawn for them.
pub fn legend_keys<'a>(policy: LegendPolicy, visible: &'a [Series], colors: &'a ColorAssignment) -> Vec<&'a str> {
    match policy {
        LegendPolicy::MirrorChart => visible
            .iter()
            .filter(|s| s.plottable().next().is_some())
            .map(|s| s.key.as_str())
            .collect(),
        LegendPolicy::Global => colors.keys().iter().map(String::as_str).collect(),
    }
}

/// One row per key, stacked at `ROW_PITCH`, in legend-local coordinates.
pub fn render_legend<S: AsRef<str>>(keys: &[S], colors: &ColorAssignment, theme: &Theme) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(keys.len() * 2);
    for (i, key) in keys.iter().enumerate() {
        let key = key.as_ref();
        let top = i as f64 * ROW_PITCH;
        out.push(DrawCommand::Rect {
            rect: Rect::from_ltwh(0.0, top, SWATCH_SIZE, SWATCH_SIZE),
            fill: colors.color_of(key),
        });
        out.push(DrawCommand::Text {
            at: Point::new(LABEL_OFFSET, top + SWATCH_SIZE),
            text: key.to_string(),
            size: LABEL_SIZE,
            color: theme.legend_label,
            anchor: Anchor::Start,
            baseline: TextBaseline::Middle,
        });
    }
    out
}
