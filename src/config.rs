// src/config.rs
use crate::error::PipelineError;
use folio_layout::{NarrativeConfig, TabularConfig};
use folio_types::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Page footer stamped on every page once the page count is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterConfig {
    /// Leading text, e.g. the report name.
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub color: Color,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            label: "Informe".to_string(),
            x: 50.0,
            y: 20.0,
            font_size: 8.0,
            color: Color::gray(0x80),
        }
    }
}

/// Top-level settings. Every field has a default, so a JSON file only needs
/// the values it changes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FolioConfig {
    pub narrative: NarrativeConfig,
    pub tabular: TabularConfig,
    pub footer: FooterConfig,
    pub filenames: FileNames,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNames {
    pub narrative: String,
    pub tabular: String,
}

impl Default for FileNames {
    fn default() -> Self {
        Self {
            narrative: "informe.pdf".to_string(),
            tabular: "informe-pagos.pdf".to_string(),
        }
    }
}

impl FolioConfig {
    pub fn from_json_str(source: &str) -> Result<Self, PipelineError> {
        let config: FolioConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json_str(&source)
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        self.narrative.validate()?;
        self.tabular.validate()?;
        if self.footer.font_size <= 0.0 {
            return Err(PipelineError::Config(format!(
                "footer font size must be positive, got {}",
                self.footer.font_size
            )));
        }
        if self.filenames.narrative.trim().is_empty() || self.filenames.tabular.trim().is_empty() {
            return Err(PipelineError::Config("output filenames must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_the_default() {
        assert_eq!(FolioConfig::from_json_str("{}").unwrap(), FolioConfig::default());
    }

    #[test]
    fn partial_overrides() {
        let config = FolioConfig::from_json_str(
            r##"{
                "narrative": { "margin": 40 },
                "footer": { "label": "Memoria anual", "color": "#333" },
                "filenames": { "tabular": "pagos-marzo.pdf" }
            }"##,
        )
        .unwrap();
        assert_eq!(config.narrative.margin, 40.0);
        assert_eq!(config.narrative.line_height, 14.0);
        assert_eq!(config.footer.label, "Memoria anual");
        assert_eq!(config.footer.color, Color::gray(0x33));
        assert_eq!(config.filenames.tabular, "pagos-marzo.pdf");
        assert_eq!(config.filenames.narrative, "informe.pdf");
    }

    #[test]
    fn invalid_geometry_is_a_config_error() {
        let err = FolioConfig::from_json_str(r#"{ "narrative": { "lineHeight": 0 } }"#).unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));

        let err = FolioConfig::from_json_str(r#"{ "narrative": { "margin": "wide" } }"#).unwrap_err();
        assert!(matches!(err, PipelineError::Json(_)));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = FolioConfig::from_json_file("/nonexistent/folio.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/folio.json"));
    }
}
