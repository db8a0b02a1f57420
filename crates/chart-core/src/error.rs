// File: crates/chart-core/src/error.rs
// Summary: Error type shared by data loading and rendering.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The CSV could not be fetched or parsed. Never retried.
    #[error("{path}: {message}")]
    DataLoad { path: String, message: String },

    /// Data loaded fine but the chart could not be drawn from it.
    #[error("{0}")]
    Render(String),

    /// Writing exported output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "raster")]
    #[error("raster export failed: {0}")]
    Raster(String),
}

impl ChartError {
    pub fn data_load(path: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::DataLoad { path: path.into(), message: message.to_string() }
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }

    /// True for failures raised before any row reached a renderer.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::DataLoad { .. })
    }
}
