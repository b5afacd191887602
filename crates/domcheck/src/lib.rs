//! domcheck batch layer
//!
//! Loads a CSV table or Excel worksheet, classifies the selected
//! company/domain columns row by row with [`domcheck_core`], and writes the
//! table back out (CSV, JSON or xlsx) with three result columns appended.
//!
//! # Example
//!
//! ```rust
//! use domcheck::{annotate, BatchConfig, Dataset};
//!
//! let csv = "Company,Email\nAcme Corp,jane@acme.com\n";
//! let dataset = Dataset::from_reader(csv.as_bytes(), b',').unwrap();
//! let annotated = annotate(dataset, &BatchConfig::new("Company", "Email")).unwrap();
//! assert_eq!(annotated.summary().likely_match, 1);
//! ```

pub mod annotate;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;

pub use annotate::{annotate, AnnotatedDataset, Summary};
pub use config::{BatchConfig, ExportFormat, OutputColumns};
pub use dataset::Dataset;
pub use error::{BatchError, BatchResult};
pub use export::{render_table, write_csv, write_dataset, write_json, write_xlsx, RESULTS_SHEET};
