//! folio composes paginated PDF reports.
//!
//! Two document kinds are supported:
//! - narrative reports flowed from Markdown-flavoured text over A4-height pages
//! - single-page tabular payment reports built from grouped records
//!
//! ```no_run
//! use folio::{PipelineBuilder, PipelineError};
//!
//! fn main() -> Result<(), PipelineError> {
//!     let pipeline = PipelineBuilder::new().with_footer_label("Memoria").build()?;
//!     let artifact = pipeline.render_narrative_text("# Resumen\n\nTodo en orden.")?;
//!     artifact.write_to_file(artifact.filename())?;
//!     Ok(())
//! }
//! ```

pub mod artifact;
pub mod assembler;
pub mod config;
pub mod error;
pub mod pipeline;

pub use artifact::PdfArtifact;
pub use config::{FileNames, FolioConfig, FooterConfig};
pub use error::PipelineError;
pub use pipeline::{PipelineBuilder, RenderOutcome, ReportPipeline, read_groups_file, read_narrative_file};

pub use folio_layout::{Group, NarrativeConfig, SubItem, TabularConfig};
pub use folio_render_core::{DocumentBackend, RecordingBackend, RenderError};
pub use folio_render_lopdf::LopdfBackend;
