// Resume analytics: sub-scores, insights and the aggregated report.
// Pure and synchronous. Handlers call `compute_score_report` on every request.

pub mod handlers;
pub mod insights;
pub mod report;
pub mod scoring;

pub use report::{compute_score_report, ScoreReport};
