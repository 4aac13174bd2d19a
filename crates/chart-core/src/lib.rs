// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the waitlist chart engine (records -> scene) and its session state.

pub mod chart;
pub mod color;
pub mod config;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod legend;
pub mod record;
pub mod scale;
pub mod scene;
pub mod series;
pub mod session;
pub mod source;
pub mod svg;
pub mod theme;
pub mod types;
pub mod view;
pub mod zoom;

pub use chart::{Chart, LoadOutcome, LoadState};
pub use color::{ColorAssignment, Rgba, CATEGORY10};
pub use config::ChartConfig;
pub use error::{ChartError, Result};
pub use filter::{filter, NameFilter};
pub use legend::LegendPolicy;
pub use record::{read_records, read_records_from_str, Record};
pub use scale::{build_scales, Scales, TimeScale, ValueScale};
pub use scene::{DrawCommand, Layer, Scene};
pub use series::{group, Series};
pub use session::{LoadSession, LoadTicket};
pub use source::DataSource;
pub use theme::Theme;
pub use view::{apply_view_transform, compute_view_model, ViewOptions};
pub use zoom::{WheelMode, ZoomController, ZoomEvent, ZoomExtent, ZoomTransform};
