pub mod differ;
pub mod report_writer;

pub use differ::{not_reciprocating, AnalysisReport};
pub use report_writer::{numbered_entries, render_report, ReportWriter, REPORT_HEADER};
