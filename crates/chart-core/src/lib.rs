// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart kinds, page event loop and rendering helpers.

pub mod axis;
pub mod chart;
pub mod charts;
pub mod data;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod interaction;
pub mod legend;
pub mod page;
#[cfg(feature = "raster")]
pub mod raster;
pub mod resize;
pub mod scale;
pub mod svg;
pub mod telemetry;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{ChartInstance, ChartStatus, Container};
pub use charts::{
    BarChart, BarRow, ChartSpec, DonutChart, DonutRow, Drawing, LineChart, LineRow, ScatterChart, ScatterRow,
};
pub use data::{CsvSource, FileSource, MemorySource, ParseOutcome, RowSchema, SkippedRow};
pub use error::{ChartError, ChartResult};
pub use geometry::Point;
pub use interaction::Tooltip;
pub use page::{Page, PageEvent, PageLayout, Widget};
pub use resize::Debouncer;
pub use svg::Element;
pub use telemetry::{init_default_tracing, init_tracing};
pub use theme::{Color, Theme};
pub use types::{Dimensions, Insets, Size};
