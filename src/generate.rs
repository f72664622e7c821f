//! Stork configuration generation.
//!
//! Turns the scanned page files into page records and renders them into the
//! config consumed by `stork build`.
//!
//! ## Output Format
//!
//! ```toml
//! [input]
//! base_directory = "output"
//! url_prefix = "/"
//!
//! [[input.files]]
//! path = "about.html"
//! url = "about.html"
//! filetype = "HTML"
//! title = "About"
//!
//! [[input.files]]
//! path = "index.html"
//! url = ""
//! filetype = "HTML"
//! title = "Home"
//! ```
//!
//! The document is rendered by hand rather than through a TOML serializer so
//! that its layout is fixed byte for byte. Values are quoted but not escaped:
//! a title containing `"` produces a config Stork will reject.
//!
//! ## Failure Model
//!
//! Per-page problems never surface here. Title extraction falls back to the
//! file stem on any error (see [`crate::title`]). Only listing the source
//! directory and writing the destination can fail the run.

use crate::config::{self, IndexConfig, InputConfig};
use crate::scan::{self, HOME_PAGE, PageFile, RESERVED_PAGES};
use crate::title;
use crate::types::{FileType, PageRecord};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scan error: {0}")]
    Scan(#[from] scan::ScanError),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result of a generate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub destination: PathBuf,
    pub records: Vec<PageRecord>,
}

impl Summary {
    pub fn page_count(&self) -> usize {
        self.records.len()
    }
}

/// Build one record per page file, resolving titles from the file content.
///
/// Order is preserved, so sorted input gives sorted records.
pub fn build_records(pages: &[PageFile], home: &str) -> Vec<PageRecord> {
    pages.iter().map(|page| build_record(page, home)).collect()
}

fn build_record(page: &PageFile, home: &str) -> PageRecord {
    // url_prefix already carries the leading slash
    let url = if page.is_home(home) {
        String::new()
    } else {
        page.name.clone()
    };
    PageRecord {
        path: page.name.clone(),
        url,
        filetype: FileType::Html,
        title: title::title_from_file(&page.path, &page.stem()),
    }
}

/// Render the `[input]` section followed by one `[[input.files]]` per record.
pub fn render_document(input: &InputConfig, records: &[PageRecord]) -> String {
    let mut lines = vec![
        "[input]".to_string(),
        format!(r#"base_directory = "{}""#, input.base_directory),
        format!(r#"url_prefix = "{}""#, input.url_prefix),
        String::new(),
    ];

    for record in records {
        lines.extend([
            "[[input.files]]".to_string(),
            format!(r#"path = "{}""#, record.path),
            format!(r#"url = "{}""#, record.url),
            format!(r#"filetype = "{}""#, record.filetype.as_str()),
            format!(r#"title = "{}""#, record.title),
            String::new(),
        ]);
    }

    lines.join("\n")
}

/// Write the document, replacing whatever was at `destination`.
pub fn write_document(destination: &Path, document: &str) -> Result<(), GenerateError> {
    fs::write(destination, document)?;
    Ok(())
}

/// Scan `config.source`, extract titles, and write `config.destination`.
pub fn generate(config: &IndexConfig) -> Result<Summary, GenerateError> {
    let pages = scan::scan(&config.source, RESERVED_PAGES)?;
    let records = build_records(&pages, HOME_PAGE);
    let document = render_document(&config.input, &records);
    write_document(&config.destination, &document)?;

    Ok(Summary {
        destination: config.destination.clone(),
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn config_for(tmp: &TempDir) -> IndexConfig {
        IndexConfig {
            source: tmp.path().join("output"),
            destination: tmp.path().join("stork.toml"),
            ..IndexConfig::default()
        }
    }

    fn record(path: &str, url: &str, title: &str) -> PageRecord {
        PageRecord {
            path: path.to_string(),
            url: url.to_string(),
            filetype: FileType::Html,
            title: title.to_string(),
        }
    }

    // =========================================================================
    // render_document tests
    // =========================================================================

    #[test]
    fn render_header_only_when_no_records() {
        let doc = render_document(&InputConfig::default(), &[]);
        assert_eq!(doc, "[input]\nbase_directory = \"output\"\nurl_prefix = \"/\"\n");
    }

    #[test]
    fn render_exact_layout() {
        let records = vec![
            record("about.html", "about.html", "about"),
            record("index.html", "", "Home"),
        ];
        let doc = render_document(&InputConfig::default(), &records);
        let expected = "\
[input]
base_directory = \"output\"
url_prefix = \"/\"

[[input.files]]
path = \"about.html\"
url = \"about.html\"
filetype = \"HTML\"
title = \"about\"

[[input.files]]
path = \"index.html\"
url = \"\"
filetype = \"HTML\"
title = \"Home\"
";
        assert_eq!(doc, expected);
    }

    #[test]
    fn render_uses_configured_labels() {
        let input = InputConfig {
            base_directory: "public".to_string(),
            url_prefix: "https://mmmorks.net/".to_string(),
        };
        let doc = render_document(&input, &[]);
        assert!(doc.contains(r#"base_directory = "public""#));
        assert!(doc.contains(r#"url_prefix = "https://mmmorks.net/""#));
    }

    #[test]
    fn rendered_document_is_valid_toml() {
        let records = vec![
            record("a.html", "a.html", "Tips & Tricks"),
            record("index.html", "", "Home"),
        ];
        let doc = render_document(&InputConfig::default(), &records);
        let value: toml::Value = toml::from_str(&doc).unwrap();

        let input = value.get("input").unwrap();
        assert_eq!(input.get("url_prefix").unwrap().as_str(), Some("/"));
        let files = input.get("files").unwrap().as_array().unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].get("title").unwrap().as_str(), Some("Tips & Tricks"));
        assert_eq!(files[1].get("url").unwrap().as_str(), Some(""));
    }

    #[test]
    fn embedded_quotes_are_not_escaped() {
        let records = vec![record("q.html", "q.html", r#"The "best" post"#)];
        let doc = render_document(&InputConfig::default(), &records);
        assert!(doc.contains(r#"title = "The "best" post""#));
    }

    // =========================================================================
    // build_records tests
    // =========================================================================

    #[test]
    fn home_page_has_empty_url() {
        let tmp = setup_fixtures();
        let pages = scan::scan(tmp.path(), RESERVED_PAGES).unwrap();
        let records = build_records(&pages, HOME_PAGE);

        let home = find_record(&records, "index.html");
        assert_eq!(home.url, "");
        for other in records.iter().filter(|r| r.path != "index.html") {
            assert_eq!(other.url, other.path);
        }
    }

    #[test]
    fn titles_resolved_from_fixture_content() {
        let tmp = setup_fixtures();
        let pages = scan::scan(tmp.path(), RESERVED_PAGES).unwrap();
        let records = build_records(&pages, HOME_PAGE);

        assert_eq!(
            record_titles(&records),
            vec![
                "about",
                "CAN bus sniffing on a budget",
                "Dumping firmware \u{2014} notes & pitfalls",
                "mmmorks.net",
                "untitled",
            ]
        );
    }

    #[test]
    fn every_record_is_html() {
        let tmp = setup_fixtures();
        let pages = scan::scan(tmp.path(), RESERVED_PAGES).unwrap();
        for record in build_records(&pages, HOME_PAGE) {
            assert_eq!(record.filetype, FileType::Html);
        }
    }

    #[test]
    fn unreadable_page_falls_back_to_stem() {
        let tmp = TempDir::new().unwrap();
        let page = PageFile {
            name: "ghost.html".to_string(),
            path: tmp.path().join("ghost.html"),
        };
        let records = build_records(&[page], HOME_PAGE);
        assert_eq!(records[0].title, "ghost");
        assert_eq!(records[0].url, "ghost.html");
    }

    // =========================================================================
    // generate tests
    // =========================================================================

    #[test]
    fn generate_home_about_and_404() {
        let tmp = TempDir::new().unwrap();
        let config = config_for(&tmp);
        fs::create_dir_all(&config.source).unwrap();
        write_page(&config.source, "index.html", "<html><head><title>Home</title></head></html>");
        write_page(&config.source, "about.html", "<html><body><p>No title here</p></body></html>");
        write_page(&config.source, "404.html", "<title>Not Found</title>");

        let summary = generate(&config).unwrap();
        assert_eq!(summary.page_count(), 2);

        let doc = fs::read_to_string(&config.destination).unwrap();
        let about = doc.find(r#"path = "about.html""#).unwrap();
        let index = doc.find(r#"path = "index.html""#).unwrap();
        assert!(about < index);
        assert!(doc.contains(
            "path = \"about.html\"\nurl = \"about.html\"\nfiletype = \"HTML\"\ntitle = \"about\""
        ));
        assert!(doc.contains(
            "path = \"index.html\"\nurl = \"\"\nfiletype = \"HTML\"\ntitle = \"Home\""
        ));
        assert!(!doc.contains("404"));
        assert_eq!(doc.matches("[[input.files]]").count(), 2);
    }

    #[test]
    fn generate_excludes_all_reserved_pages() {
        let tmp = TempDir::new().unwrap();
        let config = config_for(&tmp);
        fs::create_dir_all(&config.source).unwrap();
        for name in ["one.html", "two.html"] {
            write_page(&config.source, name, "<title>Post</title>");
        }
        for name in RESERVED_PAGES {
            write_page(&config.source, name, "<title>Listing</title>");
        }

        let summary = generate(&config).unwrap();
        assert_eq!(summary.page_count(), 2);

        let doc = fs::read_to_string(&config.destination).unwrap();
        assert_eq!(doc.matches("[[input.files]]").count(), 2);
        assert!(!doc.contains("Listing"));
    }

    #[test]
    fn generate_is_deterministic() {
        let tmp = setup_fixtures();
        let out = TempDir::new().unwrap();
        let config = IndexConfig {
            source: tmp.path().to_path_buf(),
            destination: out.path().join("stork.toml"),
            ..IndexConfig::default()
        };

        generate(&config).unwrap();
        let first = fs::read(&config.destination).unwrap();
        generate(&config).unwrap();
        let second = fs::read(&config.destination).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn generate_overwrites_previous_output() {
        let tmp = TempDir::new().unwrap();
        let config = config_for(&tmp);
        fs::create_dir_all(&config.source).unwrap();
        let stale = "stale content that is much longer than the new document\n".repeat(50);
        fs::write(&config.destination, stale).unwrap();

        let summary = generate(&config).unwrap();
        assert_eq!(summary.page_count(), 0);
        assert_eq!(
            fs::read_to_string(&config.destination).unwrap(),
            render_document(&config.input, &[])
        );
    }

    #[test]
    fn generate_missing_source_is_error() {
        let tmp = TempDir::new().unwrap();
        let config = config_for(&tmp);

        let result = generate(&config);
        assert!(matches!(result, Err(GenerateError::Scan(_))));
        assert!(!config.destination.exists());
    }

    #[test]
    fn generate_unwritable_destination_is_error() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_for(&tmp);
        fs::create_dir_all(&config.source).unwrap();
        config.destination = tmp.path().join("missing-dir").join("stork.toml");

        let result = generate(&config);
        assert!(matches!(result, Err(GenerateError::Io(_))));
    }

    #[test]
    fn generate_survives_malformed_pages() {
        let tmp = TempDir::new().unwrap();
        let config = config_for(&tmp);
        fs::create_dir_all(&config.source).unwrap();
        write_page(&config.source, "broken.html", "<html><head><title");
        fs::write(config.source.join("binary.html"), [0xff, 0xfe, 0x00, 0x3c]).unwrap();

        let summary = generate(&config).unwrap();
        assert_eq!(record_titles(&summary.records), vec!["binary", "broken"]);
    }
}
