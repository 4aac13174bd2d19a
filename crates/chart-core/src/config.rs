// File: crates/chart-core/src/config.rs
// Summary: Chart configuration (TOML file + WAITLIST_* environment), with defaults for every field.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::color::Rgba;
use crate::error::{ChartError, Result};
use crate::filter::DEFAULT_EXACT_TERMS;
use crate::legend::LegendPolicy;
use crate::scale::MAX_TICKS;
use crate::theme::{self, Theme};
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewOptions;
use crate::zoom::{ZoomExtent, MAX_SCALE, MIN_SCALE};

/// Course waitlist CSV used when no source is configured.
pub const DEFAULT_SOURCE: &str =
    "https://raw.githubusercontent.com/brybrycha/dsc106_p3/main/p3/public/CSVs/dsc_course.csv";

/// Fewest distinct series colors a palette may carry.
pub const MIN_PALETTE_COLORS: usize = 10;

/// Environment prefix, e.g. `WAITLIST_CANVAS__WIDTH=1000`.
pub const ENV_PREFIX: &str = "WAITLIST";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub data: DataConfig,
    pub canvas: CanvasConfig,
    pub zoom: ZoomConfig,
    pub filter: FilterConfig,
    pub legend: LegendConfig,
    pub theme: ThemeConfig,
    pub series: SeriesConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// HTTP(S) URL or local file path.
    pub source: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { source: DEFAULT_SOURCE.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub x_ticks: usize,
    pub y_ticks: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, insets: Insets::default(), x_ticks: 10, y_ticks: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self { min_scale: MIN_SCALE, max_scale: MAX_SCALE }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Terms matched by equality rather than substring.
    pub exact_terms: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self { exact_terms: DEFAULT_EXACT_TERMS.iter().map(|s| s.to_string()).collect() }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub policy: LegendPolicy,
    pub width: u32,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self { policy: LegendPolicy::default(), width: 160 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub name: String,
    /// Optional series palette override as `#rrggbb` strings.
    pub palette: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { name: "light".to_string(), palette: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    /// Sort each series chronologically before drawing instead of keeping input order.
    pub sort_by_time: bool,
    pub stroke_width: f64,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self { sort_by_time: false, stroke_width: 2.0 }
    }
}

impl ChartConfig {
    /// Defaults, then the optional TOML file, then `WAITLIST_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );
        let cfg: ChartConfig = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        tracing::debug!(source = %cfg.data.source, theme = %cfg.theme.name, "configuration loaded");
        Ok(cfg)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: ChartConfig = config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let c = &self.canvas;
        let (pw, ph) = c.insets.plot_size(c.width, c.height);
        if pw == 0 || ph == 0 {
            return Err(ChartError::invalid_config(format!(
                "canvas {}x{} leaves no plot area inside insets {:?}",
                c.width, c.height, c.insets
            )));
        }
        for (axis, n) in [("x_ticks", c.x_ticks), ("y_ticks", c.y_ticks)] {
            if !(1..=MAX_TICKS).contains(&n) {
                return Err(ChartError::invalid_config(format!(
                    "canvas.{axis} = {n} must lie within 1..={MAX_TICKS}"
                )));
            }
        }
        let z = &self.zoom;
        if !(MIN_SCALE <= z.min_scale && z.min_scale <= z.max_scale && z.max_scale <= MAX_SCALE) {
            return Err(ChartError::invalid_config(format!(
                "zoom scale extent [{}, {}] must satisfy {MIN_SCALE} <= min <= max <= {MAX_SCALE}",
                z.min_scale, z.max_scale
            )));
        }
        if !(self.series.stroke_width > 0.0) {
            return Err(ChartError::invalid_config("series.stroke_width must be positive"));
        }
        if self.data.source.trim().is_empty() {
            return Err(ChartError::invalid_config("data.source is empty"));
        }
        let distinct: HashSet<Rgba> = self.palette()?.into_iter().collect();
        if distinct.len() < MIN_PALETTE_COLORS {
            return Err(ChartError::invalid_config(format!(
                "palette has {} distinct colors, need at least {MIN_PALETTE_COLORS}",
                distinct.len()
            )));
        }
        Ok(())
    }

    /// Configured palette override, or the theme palette.
    pub fn palette(&self) -> Result<Vec<Rgba>> {
        if self.theme.palette.is_empty() {
            return Ok(self.theme().palette.to_vec());
        }
        self.theme
            .palette
            .iter()
            .map(|s| Rgba::from_hex(s).ok_or_else(|| ChartError::invalid_config(format!("bad palette color `{s}`"))))
            .collect()
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme.name)
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            width: self.canvas.width,
            height: self.canvas.height,
            insets: self.canvas.insets,
            theme: self.theme(),
            legend_policy: self.legend.policy,
            legend_width: self.legend.width,
            exact_terms: self.filter.exact_terms.clone(),
            sort_points_by_time: self.series.sort_by_time,
            stroke_width: self.series.stroke_width,
            x_ticks: self.canvas.x_ticks,
            y_ticks: self.canvas.y_ticks,
        }
    }

    pub fn zoom_extent(&self) -> ZoomExtent {
        let opts = self.view_options();
        ZoomExtent::for_plot(opts.plot_width(), opts.plot_height(), self.zoom.min_scale, self.zoom.max_scale)
    }
}
