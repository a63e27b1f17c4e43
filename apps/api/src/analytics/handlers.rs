use axum::Json;
use tracing::debug;

use crate::analytics::{compute_score_report, ScoreReport};
use crate::models::resume::ResumeDocument;

/// POST /api/v1/analytics
pub async fn handle_score(Json(document): Json<ResumeDocument>) -> Json<ScoreReport> {
    let report = compute_score_report(&document);
    debug!(
        "Scored resume: overall={} ats={} impact={} readability={} keywords={:.1}",
        report.overall,
        report.scores.ats,
        report.scores.impact,
        report.scores.readability,
        report.scores.keywords
    );
    Json(report)
}
