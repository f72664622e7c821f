//! Shared test utilities.
//!
//! `fixtures/output/` is a small rendered blog: a home page, two articles,
//! a page without a title, one with a blank title, every reserved listing
//! page, and a `feeds/` subdirectory that must not be descended into.

use std::path::Path;
use tempfile::TempDir;

use crate::scan::PageFile;
use crate::types::PageRecord;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/output/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/output");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write `content` to `dir/name`.
pub fn write_page(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

// =========================================================================
// Lookups, panicking with a clear message on miss
// =========================================================================

/// Find a scanned page by file name. Panics if not found.
pub fn find_page_file<'a>(pages: &'a [PageFile], name: &str) -> &'a PageFile {
    pages.iter().find(|p| p.name == name).unwrap_or_else(|| {
        let names: Vec<&str> = pages.iter().map(|p| p.name.as_str()).collect();
        panic!("page file '{name}' not found. Available: {names:?}")
    })
}

/// Find a record by path. Panics if not found.
pub fn find_record<'a>(records: &'a [PageRecord], path: &str) -> &'a PageRecord {
    records.iter().find(|r| r.path == path).unwrap_or_else(|| {
        let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
        panic!("record '{path}' not found. Available: {paths:?}")
    })
}

/// All record titles in order.
pub fn record_titles(records: &[PageRecord]) -> Vec<&str> {
    records.iter().map(|r| r.title.as_str()).collect()
}
