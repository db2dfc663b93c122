//! Export rendering for the Gudang collections.
//!
//! Both exporters are pure functions from a slice of uniform records to
//! a text blob. Records are flattened through their JSON representation,
//! so any serializable record type exports without per-type code.
//!
//! # Modules
//!
//! - [`csv`] -- Comma-separated rendering with double-quote escaping
//! - [`report`] -- A minimal print-formatted HTML document

pub mod csv;
pub mod report;

pub use csv::to_csv;
pub use report::to_report_html;

/// Errors that can occur while rendering an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// A record failed to serialize.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A record did not flatten to a field/value map.
    #[error("records must serialize to JSON objects")]
    NotARecord,
}
