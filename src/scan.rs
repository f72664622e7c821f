//! Output directory scanning.
//!
//! Lists the pages an external site generator rendered into its output
//! directory and decides which of them are worth indexing.
//!
//! ## Directory Structure
//!
//! ```text
//! output/                       # Rendered site (scan root)
//! ├── index.html                # Home page → url ""
//! ├── about.html                # Page → url "about.html"
//! ├── can-bus-sniffing.html     # Article
//! ├── 404.html                  # Reserved → skipped
//! ├── archives.html             # Reserved → skipped
//! ├── authors.html              # Reserved → skipped
//! ├── categories.html           # Reserved → skipped
//! ├── tags.html                 # Reserved → skipped
//! ├── .draft.html               # Hidden, still indexed
//! ├── feeds/                    # Subdirectory → not descended into
//! └── theme/
//! ```
//!
//! Only the top level is scanned. Entries are returned sorted by file name so
//! that the generated document is a pure function of the directory listing.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Listing pages generated alongside the articles. They are navigation
/// scaffolding, not content, and are never indexed.
pub const RESERVED_PAGES: &[&str] = &[
    "404.html",
    "authors.html",
    "categories.html",
    "tags.html",
    "archives.html",
];

/// The site root. Its record gets an empty URL.
pub const HOME_PAGE: &str = "index.html";

const HTML_EXTENSION: &str = "html";

/// One candidate page in the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFile {
    /// File name with extension, no directory (`about.html`).
    pub name: String,
    /// Full path for reading the content.
    pub path: PathBuf,
}

impl PageFile {
    /// File name without its extension (`about.html` → `about`).
    pub fn stem(&self) -> String {
        Path::new(&self.name)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.name.clone())
    }

    pub fn is_home(&self, marker: &str) -> bool {
        self.name == marker
    }
}

/// List the indexable HTML files directly inside `dir`.
///
/// `excluded` holds exact file names to drop (normally [`RESERVED_PAGES`]).
/// Fails only if the directory itself cannot be read.
pub fn scan(dir: &Path, excluded: &[&str]) -> Result<Vec<PageFile>, ScanError> {
    let mut pages: Vec<PageFile> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| is_html_file(p))
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().to_string();
            if excluded.contains(&name.as_str()) {
                return None;
            }
            Some(PageFile { name, path })
        })
        .collect();

    pages.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(pages)
}

fn is_html_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .map(|e| e == HTML_EXTENSION)
            .unwrap_or(false)
}
