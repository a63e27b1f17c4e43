use serde::{Deserialize, Serialize};

use crate::analytics::insights::{derive_insights, Insight};
use crate::analytics::scoring::{round_half_up, RoundedScores, SubScores};
use crate::models::resume::ResumeDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 80.0 => ScoreBand::Excellent,
            s if s >= 60.0 => ScoreBand::Good,
            _ => ScoreBand::NeedsWork,
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent! Your resume is well-optimized.",
            ScoreBand::Good => "Good progress! A few improvements will make it great.",
            ScoreBand::NeedsWork => "Your resume needs some work to stand out to employers.",
        }
    }
}

/// One row of the "Detailed Analysis" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    pub name: String,
    pub score: u32,
    pub band: ScoreBand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickStats {
    pub experience_count: usize,
    pub skills_count: usize,
}

/// Everything the analytics panel renders. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Unrounded sub-scores; `keywords` may be fractional.
    pub scores: SubScores,
    pub rounded: RoundedScores,
    pub overall: u32,
    pub band: ScoreBand,
    pub verdict: String,
    pub breakdown: Vec<ScoreLine>,
    pub insights: Vec<Insight>,
    pub stats: QuickStats,
}

const BREAKDOWN_LABELS: [&str; 5] = [
    "Completion",
    "ATS Compatibility",
    "Impact & Results",
    "Readability",
    "Keywords",
];

/// Scores a document. Total: any document, however incomplete, yields a report.
pub fn compute_score_report(doc: &ResumeDocument) -> ScoreReport {
    let scores = SubScores::compute(doc);
    let overall = scores.overall();
    let band = ScoreBand::from_score(overall as f64);

    let breakdown = BREAKDOWN_LABELS
        .iter()
        .zip(scores.as_array())
        .map(|(name, score)| ScoreLine {
            name: name.to_string(),
            score: round_half_up(score),
            band: ScoreBand::from_score(score),
        })
        .collect();

    ScoreReport {
        scores,
        rounded: scores.rounded(),
        overall,
        band,
        verdict: band.verdict().to_string(),
        breakdown,
        insights: derive_insights(doc, &scores),
        stats: QuickStats {
            experience_count: doc.experience.len(),
            skills_count: doc.skills.len(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Education, Experience, ExperienceMetrics};

    fn assert_in_range(report: &ScoreReport) {
        for score in report.scores.as_array() {
            assert!((0.0..=100.0).contains(&score), "sub-score {score} out of range");
        }
        assert!(report.overall <= 100);
    }

    fn rich_document() -> ResumeDocument {
        let mut doc = ResumeDocument::default();
        doc.personal_info.full_name = "Grace Hopper".to_string();
        doc.personal_info.email = "grace@example.com".to_string();
        doc.personal_info.summary =
            "Engineer and leader who shipped compilers used by thousands of developers.".to_string();
        doc.experience.push(Experience {
            id: "1".to_string(),
            description: "Led the compiler team and developed COBOL tooling".to_string(),
            achievements: vec![
                "Improved build times".to_string(),
                "Managed a team of 12".to_string(),
            ],
            metrics: Some(ExperienceMetrics {
                revenue: Some("$2M".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        doc.education.push(Education::default());
        doc.skills = ["COBOL", "FORTRAN", "Leadership", "Compilers", "Teaching"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        doc.metadata.completion_score = 90.0;
        doc
    }

    #[test]
    fn test_empty_document_report() {
        let report = compute_score_report(&ResumeDocument::default());
        assert_eq!(
            report.rounded,
            RoundedScores {
                completion: 0,
                ats: 0,
                impact: 0,
                readability: 80,
                keywords: 0,
            }
        );
        assert_eq!(report.overall, 16);
        assert_eq!(report.band, ScoreBand::NeedsWork);
        assert_eq!(report.insights.len(), 4);
        assert_eq!(
            report.stats,
            QuickStats {
                experience_count: 0,
                skills_count: 0
            }
        );
        assert_in_range(&report);
    }

    #[test]
    fn test_rich_document_report() {
        let report = compute_score_report(&rich_document());
        assert_eq!(report.scores.ats, 100.0);
        assert_eq!(report.scores.impact, 100.0);
        assert_eq!(report.scores.readability, 80.0);
        // led, developed, improved, managed
        assert_eq!(report.rounded.keywords, 67);
        // (90 + 100 + 100 + 80 + 66.67) / 5 = 87.33
        assert_eq!(report.overall, 87);
        assert_eq!(report.band, ScoreBand::Excellent);
        assert_eq!(report.verdict, "Excellent! Your resume is well-optimized.");
        assert!(!report.insights[1].implemented);
        assert!(report.insights[0].implemented);
        assert!(report.insights[2].implemented);
        assert!(report.insights[3].implemented);
        assert_in_range(&report);
    }

    #[test]
    fn test_breakdown_rows() {
        let report = compute_score_report(&rich_document());
        let names: Vec<&str> = report.breakdown.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, BREAKDOWN_LABELS.to_vec());
        assert_eq!(report.breakdown[4].score, 67);
        assert_eq!(report.breakdown[4].band, ScoreBand::Good);
        assert_eq!(report.breakdown[3].band, ScoreBand::Excellent);
    }

    #[test]
    fn test_report_is_deterministic() {
        let doc = rich_document();
        assert_eq!(compute_score_report(&doc), compute_score_report(&doc.clone()));
    }

    #[test]
    fn test_bounds_hold_for_extreme_documents() {
        let mut doc = rich_document();
        doc.metadata.completion_score = 1e9;
        for _ in 0..50 {
            doc.experience.push(Experience {
                description: "achieved ".repeat(40),
                ..Default::default()
            });
        }
        let report = compute_score_report(&doc);
        assert_eq!(report.scores.completion, 100.0);
        assert_eq!(report.scores.readability, 0.0);
        assert_in_range(&report);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ScoreBand::from_score(80.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79.9), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(60.0), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(59.9), ScoreBand::NeedsWork);
    }
}
