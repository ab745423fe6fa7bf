//! View state for the dashboard screens. Each view owns its local state and
//! talks to the completion client directly; nothing here is shared between views.

pub mod admin;
pub mod audit;
pub mod billing;
pub mod dashboard;
pub mod export;
pub mod keywords;
pub mod tracker;
pub mod writer;

pub use audit::{AuditState, AuditView};
pub use export::ReportLayout;
pub use keywords::{DifficultyBand, KdSort, KeywordTable};
pub use writer::WriterView;

/// Message shown under the action control whenever an operation fails.
pub const ANALYSIS_FAILED: &str =
    "Analysis failed. The neural engine encountered an error or the URL is unreachable.";

pub const GENERIC_ERROR: &str = "An error occurred";
