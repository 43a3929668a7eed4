//! PDF document backend using lopdf.
//!
//! Pages are kept as display lists until `finish`, then written as one
//! uncompressed PDF 1.7 file that references the standard Helvetica faces
//! with WinAnsi encoding. Text measurement uses the Adobe font metrics of
//! those faces, so measured widths match what viewers render.

mod backend;
mod helpers;
pub mod metrics;

pub use backend::LopdfBackend;
