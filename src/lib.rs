//! Medication Screening Server
//!
//! Detects which of a fixed set of pain-medication categories are
//! mentioned in the text of an uploaded document.
//!
//! # Features
//!
//! - **Static catalog**: categories, entries, and synonyms compiled in and
//!   precomputed once at startup
//! - **Length-dependent matching**: long terms match by containment in a
//!   letters-only stream, short terms require whole-token isolation
//! - **Ordered reports**: fixed category display order, empty categories
//!   omitted
//! - **Thin HTTP surface**: multipart upload with page-wise PDF text
//!   extraction
//!
//! # Modules
//!
//! - `types`: core data structures (Category, MatchReport)
//! - `catalog`: the static category → entry → synonym configuration
//! - `analyzer`: text normalization and matching engine
//! - `extract`: PDF page text extraction
//! - `api`: Axum HTTP endpoints
//!
//! # Example
//!
//! ```
//! use medscreen::{analyze, Category};
//!
//! let report = analyze("Patient started OXYCODONE 10mg.");
//! assert!(report.entries(Category::StrongOpioids).is_some());
//! ```

pub mod analyzer;
pub mod api;
pub mod catalog;
pub mod extract;
pub mod types;

// Re-export commonly used items at crate root
pub use analyzer::{analyze, NormalizedText, LONG_TERM_MIN_LEN};
pub use catalog::{catalog, Catalog, Entry};
pub use extract::{document_text, DocumentText};
pub use types::{Category, CategoryMatches, MatchReport, ScreenResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
