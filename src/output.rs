//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Pages
//! 001 about
//!     Source: about.html
//!     Url: about.html
//! 002 mmmorks.net
//!     Source: index.html
//!     Url: (home)
//!
//! 2 pages in output
//! ```
//!
//! ## Generate
//!
//! ```text
//! Generated stork.toml with 2 files
//! ```

use crate::generate::Summary;
use crate::types::PageRecord;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Format the page listing for `scan`.
pub fn format_scan_output(records: &[PageRecord], source: &Path) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];

    for (i, record) in records.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), record.title));
        lines.push(format!("    Source: {}", record.path));
        if record.url.is_empty() {
            lines.push("    Url: (home)".to_string());
        } else {
            lines.push(format!("    Url: {}", record.url));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{} in {}",
        plural(records.len(), "page"),
        source.display()
    ));
    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(records: &[PageRecord], source: &Path) {
    for line in format_scan_output(records, source) {
        println!("{}", line);
    }
}

/// Format the one-line summary of a generate run.
pub fn format_generate_output(summary: &Summary) -> Vec<String> {
    vec![format!(
        "Generated {} with {} files",
        summary.destination.display(),
        summary.page_count()
    )]
}

/// Print generate output to stdout.
pub fn print_generate_output(summary: &Summary) {
    for line in format_generate_output(summary) {
        println!("{}", line);
    }
}
