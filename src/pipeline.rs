// src/pipeline.rs
use crate::artifact::PdfArtifact;
use crate::assembler;
use crate::config::FolioConfig;
use crate::error::PipelineError;
use folio_layout::{FlowingCompositor, Group, TabularCompositor};
use folio_render_core::DocumentBackend;
use folio_render_lopdf::LopdfBackend;
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::Path;

fn read_source(path: &Path, what: &str) -> Result<String, PipelineError> {
    fs::read_to_string(path).map_err(|e| {
        PipelineError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read {} from '{}': {}", what, path.display(), e),
        ))
    })
}

/// Reads a narrative text file, naming the path in any I/O error.
pub fn read_narrative_file<P: AsRef<Path>>(path: P) -> Result<String, PipelineError> {
    read_source(path.as_ref(), "narrative")
}

/// Reads and parses a JSON array of groups, naming the path in any I/O error.
pub fn read_groups_file<P: AsRef<Path>>(path: P) -> Result<Vec<Group>, PipelineError> {
    let json = read_source(path.as_ref(), "report data")?;
    Ok(serde_json::from_str(&json)?)
}

/// What a tabular run produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    Rendered(PdfArtifact),
    /// The input had no groups; nothing was drawn or written.
    NothingToRender,
}

impl RenderOutcome {
    pub fn artifact(&self) -> Option<&PdfArtifact> {
        match self {
            RenderOutcome::Rendered(artifact) => Some(artifact),
            RenderOutcome::NothingToRender => None,
        }
    }
}

/// A builder for creating a `ReportPipeline`.
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    config: FolioConfig,
    footer_label: Option<String>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: FolioConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads settings from a JSON file. Missing keys keep their defaults.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.config = FolioConfig::from_json_file(path)?;
        Ok(self)
    }

    /// Overrides the footer label, taking precedence over any loaded config.
    pub fn with_footer_label(mut self, label: impl Into<String>) -> Self {
        self.footer_label = Some(label.into());
        self
    }

    pub fn build(self) -> Result<ReportPipeline, PipelineError> {
        let mut config = self.config;
        if let Some(label) = self.footer_label {
            config.footer.label = label;
        }
        config.validate()?;
        Ok(ReportPipeline { config })
    }
}

/// Runs composition and assembly for both report kinds.
///
/// Every call allocates its own backend and document, so one pipeline can
/// serve concurrent requests without locking.
#[derive(Debug, Clone)]
pub struct ReportPipeline {
    config: FolioConfig,
}

impl ReportPipeline {
    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    /// Renders narrative lines to a PDF through the lopdf backend.
    pub fn render_narrative<I, S>(&self, lines: I) -> Result<PdfArtifact, PipelineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.render_narrative_with(LopdfBackend::new(), lines)
    }

    /// Splits `text` on line breaks (`\n` or `\r\n`) and renders it.
    pub fn render_narrative_text(&self, text: &str) -> Result<PdfArtifact, PipelineError> {
        self.render_narrative(text.lines())
    }

    pub fn render_narrative_file<P: AsRef<Path>>(&self, path: P) -> Result<PdfArtifact, PipelineError> {
        let text = read_narrative_file(path)?;
        self.render_narrative_text(&text)
    }

    pub fn render_narrative_with<B, I, S>(&self, backend: B, lines: I) -> Result<PdfArtifact, PipelineError>
    where
        B: DocumentBackend,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let compositor = FlowingCompositor::new(self.config.narrative.clone());
        let doc = compositor.compose(backend, lines)?;
        let pages = doc.page_count();
        let bytes = assembler::assemble(doc, &self.config.footer)?;
        info!("Rendered narrative report: {} pages, {} bytes", pages, bytes.len());
        Ok(PdfArtifact::new(bytes, self.config.filenames.narrative.clone(), pages))
    }

    /// Renders the payment report through the lopdf backend.
    pub fn render_tabular(&self, groups: &[Group]) -> Result<RenderOutcome, PipelineError> {
        self.render_tabular_with(LopdfBackend::new(), groups)
    }

    /// Reads a JSON array of groups and renders it.
    pub fn render_tabular_json(&self, json: &str) -> Result<RenderOutcome, PipelineError> {
        let groups: Vec<Group> = serde_json::from_str(json)?;
        debug!("Parsed {} groups", groups.len());
        self.render_tabular(&groups)
    }

    pub fn render_tabular_file<P: AsRef<Path>>(&self, path: P) -> Result<RenderOutcome, PipelineError> {
        let json = read_source(path.as_ref(), "report data")?;
        self.render_tabular_json(&json)
    }

    pub fn render_tabular_with<B: DocumentBackend>(
        &self,
        backend: B,
        groups: &[Group],
    ) -> Result<RenderOutcome, PipelineError> {
        let compositor = TabularCompositor::new(self.config.tabular.clone());
        let Some(doc) = compositor.compose(backend, groups)? else {
            warn!("No payments in the selected period; no report generated");
            return Ok(RenderOutcome::NothingToRender);
        };
        let pages = doc.page_count();
        let bytes = assembler::assemble(doc, &self.config.footer)?;
        info!("Rendered payment report: {} groups, {} bytes", groups.len(), bytes.len());
        Ok(RenderOutcome::Rendered(PdfArtifact::new(
            bytes,
            self.config.filenames.tabular.clone(),
            pages,
        )))
    }

    /// Runs `render_narrative_text` on the blocking pool.
    pub async fn render_narrative_async(&self, text: String) -> Result<PdfArtifact, PipelineError> {
        let pipeline = self.clone();
        tokio::task::spawn_blocking(move || pipeline.render_narrative_text(&text)).await?
    }

    /// Runs `render_tabular` on the blocking pool.
    pub async fn render_tabular_async(&self, groups: Vec<Group>) -> Result<RenderOutcome, PipelineError> {
        let pipeline = self.clone();
        tokio::task::spawn_blocking(move || pipeline.render_tabular(&groups)).await?
    }
}
