use serde::{Deserialize, Serialize};
use std::path::Path;

/// Content type of an imported source, used to pick a splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Markdown,
    Text,
    /// HTML already converted to text by the fetching side.
    Html,
}

impl SourceFormat {
    /// Detect the format from a file extension, case-insensitively.
    /// Unknown or missing extensions are treated as plain text.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("md") | Some("markdown") => SourceFormat::Markdown,
            Some("html") | Some("htm") => SourceFormat::Html,
            _ => SourceFormat::Text,
        }
    }
}
