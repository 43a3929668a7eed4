// src/error.rs
use folio_layout::LayoutError;
use folio_render_core::RenderError;
use thiserror::Error;

/// Everything that can stop a report from being produced.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration is invalid: {0}")]
    Config(String),

    #[error("Background render task failed: {0}")]
    Task(String),
}

impl From<LayoutError> for PipelineError {
    fn from(e: LayoutError) -> Self {
        match e {
            LayoutError::InvalidGeometry(msg) => PipelineError::Config(msg),
        }
    }
}

impl From<tokio::task::JoinError> for PipelineError {
    fn from(e: tokio::task::JoinError) -> Self {
        PipelineError::Task(e.to_string())
    }
}
