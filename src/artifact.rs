use std::fs;
use std::path::Path;

/// A finished PDF and the name it should be delivered under.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfArtifact {
    bytes: Vec<u8>,
    filename: String,
    page_count: usize,
}

impl PdfArtifact {
    pub const CONTENT_TYPE: &'static str = "application/pdf";

    pub fn new(bytes: Vec<u8>, filename: impl Into<String>, page_count: usize) -> Self {
        Self {
            bytes,
            filename: filename.into(),
            page_count,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Value for a `Content-Disposition` header that triggers a download.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename.replace('"', ""))
    }

    /// Writes the bytes to `path`, creating parent directories as needed.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let output_path = path.as_ref();
        if let Some(parent_dir) = output_path.parent() {
            fs::create_dir_all(parent_dir)?;
        }
        fs::write(output_path, &self.bytes)
    }
}
