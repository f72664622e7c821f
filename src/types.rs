//! Page records shared by the generator, the CLI listing and the JSON manifest.

use serde::{Deserialize, Serialize};

/// Stork file type tag. Everything this tool indexes is rendered HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileType {
    #[serde(rename = "HTML")]
    Html,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Html => "HTML",
        }
    }
}

/// One indexable page, as written to a `[[input.files]]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// File name relative to `base_directory` (`about.html`).
    pub path: String,
    /// URL relative to `url_prefix`. Empty for the home page.
    pub url: String,
    pub filetype: FileType,
    /// `<title>` text, or the file stem when the page has none.
    pub title: String,
}
