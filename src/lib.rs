//! # stork-gen
//!
//! Generates the configuration file for [Stork](https://stork-search.net), a
//! client-side search indexer, from a static blog's rendered HTML.
//!
//! The site generator runs first and fills an output directory with pages.
//! `stork-gen` then lists that directory once, pulls a title out of each
//! page, and writes `stork.toml` for `stork build` to consume.
//!
//! ```text
//! output/*.html  →  scan  →  titles  →  stork.toml
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists the top-level HTML files, skipping reserved listing pages |
//! | [`title`] | Extracts the first `<title>` of a page, falling back to the file stem |
//! | [`generate`] | Builds page records and renders/writes the Stork config |
//! | [`config`] | `stork-gen.toml` loading, merging over stock defaults, validation |
//! | [`types`] | `PageRecord`, shared by the generator, listings and JSON output |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Never Fail on a Page
//!
//! A page that cannot be read or tokenized still gets indexed, under its file
//! stem. Only the directory listing and the final write can abort a run, so a
//! single odd file never leaves the site without a search index.
//!
//! ## Deterministic Output
//!
//! Pages are sorted by file name and the document is rendered by hand, so
//! running twice over the same directory produces byte-identical output and
//! the generated file diffs cleanly in version control.
//!
//! ## Explicit Labels
//!
//! `base_directory` and `url_prefix` travel through [`config::IndexConfig`]
//! into [`generate::render_document`] rather than living as globals. The
//! reserved page list and home page name are fixed constants in [`scan`].

pub mod config;
pub mod generate;
pub mod output;
pub mod scan;
pub mod title;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
