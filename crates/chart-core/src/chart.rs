// File: crates/chart-core/src/chart.rs
// Summary: Chart session: owns the loaded records, the color assignment, the filter term and the zoom state.
// Notes:
// - The color assignment is rebuilt on dataset load only, never on filter change.
// - A filter change rebuilds the whole scene and resets the zoom transform.

use crate::color::{ColorAssignment, Rgba};
use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::record::Record;
use crate::scene::Scene;
use crate::session::{LoadSession, LoadTicket};
use crate::view::{apply_view_transform, compute_view_model, empty_scene, status_scene, ViewOptions};
use crate::zoom::{ZoomController, ZoomEvent, ZoomExtent, ZoomTransform, MAX_SCALE, MIN_SCALE};

pub const LOADING_MESSAGE: &str = "Loading data…";

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// What `Chart::apply_load` did with a fetch result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Failed,
    /// The ticket was stale (newer load or teardown); nothing changed.
    Discarded,
}

pub struct Chart {
    records: Vec<Record>,
    colors: ColorAssignment,
    palette: Vec<Rgba>,
    filter_term: String,
    zoom: ZoomController,
    options: ViewOptions,
    state: LoadState,
    session: LoadSession,
    scene: Scene,
}

impl Chart {
    pub fn new(options: ViewOptions, extent: ZoomExtent, palette: Vec<Rgba>) -> Self {
        let scene = empty_scene(&options);
        Self {
            records: Vec::new(),
            colors: ColorAssignment::build(std::iter::empty::<String>(), &palette),
            palette,
            filter_term: String::new(),
            zoom: ZoomController::new(extent),
            options,
            state: LoadState::Idle,
            session: LoadSession::new(),
            scene,
        }
    }

    /// Default zoom limits over the plot area and the theme palette.
    pub fn with_options(options: ViewOptions) -> Self {
        let extent = ZoomExtent::for_plot(options.plot_width(), options.plot_height(), MIN_SCALE, MAX_SCALE);
        let palette = options.theme.palette.to_vec();
        Self::new(options, extent, palette)
    }

    pub fn from_config(cfg: &ChartConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self::new(cfg.view_options(), cfg.zoom_extent(), cfg.palette()?))
    }

    /// Chart already holding `records`, as if a load had just succeeded.
    pub fn with_records(records: Vec<Record>, options: ViewOptions) -> Self {
        let mut chart = Self::with_options(options);
        chart.set_records(records);
        chart
    }

    /// Start a load; any result carrying an earlier ticket will be discarded.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.state = LoadState::Loading;
        self.recompute_geometry();
        self.session.begin()
    }

    /// Apply a fetch result if `ticket` is still current.
    pub fn apply_load(&mut self, ticket: &LoadTicket, result: Result<Vec<Record>>) -> LoadOutcome {
        if !self.session.is_current(ticket) {
            tracing::debug!(generation = ticket.generation(), "discarding stale load result");
            return LoadOutcome::Discarded;
        }
        match result {
            Ok(records) => {
                self.set_records(records);
                LoadOutcome::Applied
            }
            Err(err) => {
                tracing::error!(error = %err, "dataset load failed");
                self.fail(&err);
                LoadOutcome::Failed
            }
        }
    }

    /// Replace the dataset: new color assignment, zoom reset, full redraw.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.colors = ColorAssignment::from_records(&records, &self.palette);
        self.records = records;
        self.state = LoadState::Ready;
        self.zoom.reset();
        tracing::info!(records = self.records.len(), courses = self.colors.len(), "dataset loaded");
        self.recompute_geometry();
    }

    /// New search term: zoom reset and full redraw. Colors are kept.
    pub fn set_filter(&mut self, term: &str) {
        if self.filter_term != term {
            tracing::debug!(term, "filter changed");
        }
        self.filter_term = term.to_string();
        self.zoom.reset();
        self.recompute_geometry();
    }

    /// Clamp and apply one pan/zoom interaction; path geometry is reused.
    pub fn on_zoom_event(&mut self, event: ZoomEvent) -> ZoomTransform {
        let t = self.zoom.on_zoom_event(event);
        apply_view_transform(&mut self.scene, t);
        t
    }

    /// Invalidate pending loads, e.g. when the hosting view goes away.
    pub fn teardown(&mut self) {
        self.session.teardown();
    }

    pub fn scene(&self) -> &Scene { &self.scene }
    pub fn records(&self) -> &[Record] { &self.records }
    pub fn colors(&self) -> &ColorAssignment { &self.colors }
    pub fn filter_term(&self) -> &str { &self.filter_term }
    pub fn zoom_transform(&self) -> ZoomTransform { self.zoom.transform() }
    pub fn zoom(&self) -> &ZoomController { &self.zoom }
    pub fn state(&self) -> &LoadState { &self.state }
    pub fn options(&self) -> &ViewOptions { &self.options }

    fn fail(&mut self, err: &ChartError) {
        self.state = LoadState::Failed(err.to_string());
        self.recompute_geometry();
    }

    fn recompute_geometry(&mut self) {
        self.scene = match &self.state {
            LoadState::Loading => status_scene(&self.options, LOADING_MESSAGE),
            LoadState::Failed(message) => status_scene(&self.options, &failure_message(message)),
            LoadState::Idle | LoadState::Ready => compute_view_model(
                &self.records,
                &self.filter_term,
                &self.colors,
                self.zoom.transform(),
                &self.options,
            ),
        };
    }
}

fn failure_message(message: &str) -> String {
    if message.starts_with("failed to load") {
        message.to_string()
    } else {
        format!("failed to load data: {message}")
    }
}
