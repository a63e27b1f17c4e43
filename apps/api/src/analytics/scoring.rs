//! Sub-score heuristics for the analytics panel.
//!
//! Every function here is total over any document: absent data scores as
//! absent, never as an error. All sub-scores land in [0, 100].

use serde::{Deserialize, Serialize};

use crate::models::resume::{Experience, ResumeDocument};

pub const MAX_SCORE: f64 = 100.0;

/// Action verbs the keyword sub-score looks for (matched as lowercase substrings).
pub const ACTION_KEYWORDS: &[&str] = &[
    "led",
    "managed",
    "developed",
    "improved",
    "increased",
    "achieved",
];

const READABILITY_BASE: f64 = 80.0;
const LONG_DESCRIPTION_PENALTY: f64 = 10.0;
const LONG_DESCRIPTION_CHARS: usize = 200;

pub const SUMMARY_MIN_CHARS: usize = 50;
pub const SKILLS_TARGET: usize = 5;

/// The five component scores, kept unrounded. Round only for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub completion: f64,
    pub ats: f64,
    pub impact: f64,
    pub readability: f64,
    pub keywords: f64,
}

impl SubScores {
    pub fn compute(doc: &ResumeDocument) -> Self {
        Self {
            completion: completion_score(doc),
            ats: ats_score(doc),
            impact: impact_score(doc),
            readability: readability_score(doc),
            keywords: keyword_score(&doc.experience),
        }
    }

    pub fn as_array(&self) -> [f64; 5] {
        [
            self.completion,
            self.ats,
            self.impact,
            self.readability,
            self.keywords,
        ]
    }

    pub fn mean(&self) -> f64 {
        self.as_array().iter().sum::<f64>() / 5.0
    }

    /// Mean of the unrounded sub-scores, rounded half-up.
    pub fn overall(&self) -> u32 {
        round_half_up(self.mean())
    }

    pub fn rounded(&self) -> RoundedScores {
        RoundedScores {
            completion: round_half_up(self.completion),
            ats: round_half_up(self.ats),
            impact: round_half_up(self.impact),
            readability: round_half_up(self.readability),
            keywords: round_half_up(self.keywords),
        }
    }
}

/// Display form of [`SubScores`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundedScores {
    pub completion: u32,
    pub ats: u32,
    pub impact: u32,
    pub readability: u32,
    pub keywords: u32,
}

pub fn round_half_up(value: f64) -> u32 {
    (value + 0.5).floor() as u32
}

/// Pass-through of the externally tracked completion percentage.
pub fn completion_score(doc: &ResumeDocument) -> f64 {
    let score = doc.metadata.completion_score;
    if score.is_finite() {
        score.clamp(0.0, MAX_SCORE)
    } else {
        0.0
    }
}

/// Applicant-tracking compatibility: are the sections a parser expects present?
pub fn ats_score(doc: &ResumeDocument) -> f64 {
    let checks = [
        (!doc.personal_info.full_name.is_empty(), 20.0),
        (!doc.personal_info.email.is_empty(), 15.0),
        (!doc.experience.is_empty(), 25.0),
        (!doc.education.is_empty(), 20.0),
        (doc.skills.len() >= SKILLS_TARGET, 20.0),
    ];
    sum_points(&checks)
}

pub fn impact_score(doc: &ResumeDocument) -> f64 {
    let has_metrics = doc
        .experience
        .iter()
        .any(|exp| exp.metrics.as_ref().is_some_and(|m| m.has_any()));
    let has_achievements = doc.experience.iter().any(|exp| !exp.achievements.is_empty());

    let checks = [
        (has_metrics, 40.0),
        (has_achievements, 30.0),
        (has_long_summary(doc), 30.0),
    ];
    sum_points(&checks)
}

pub fn readability_score(doc: &ResumeDocument) -> f64 {
    let long_descriptions = doc
        .experience
        .iter()
        .filter(|exp| exp.description.chars().count() > LONG_DESCRIPTION_CHARS)
        .count();
    (READABILITY_BASE - long_descriptions as f64 * LONG_DESCRIPTION_PENALTY).clamp(0.0, MAX_SCORE)
}

/// Share of [`ACTION_KEYWORDS`] that appear anywhere in the experience text.
/// Each keyword counts once no matter how often it occurs.
pub fn keyword_score(experience: &[Experience]) -> f64 {
    let text = experience_text(experience);
    let found = ACTION_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .count();
    (found as f64 / ACTION_KEYWORDS.len() as f64 * MAX_SCORE).min(MAX_SCORE)
}

pub fn has_long_summary(doc: &ResumeDocument) -> bool {
    doc.personal_info.summary.chars().count() > SUMMARY_MIN_CHARS
}

/// Lowercased description plus achievements of every entry, space separated.
fn experience_text(experience: &[Experience]) -> String {
    experience
        .iter()
        .map(|exp| format!("{} {}", exp.description, exp.achievements.join(" ")))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn sum_points(checks: &[(bool, f64)]) -> f64 {
    checks
        .iter()
        .filter(|(passed, _)| *passed)
        .map(|(_, points)| points)
        .sum::<f64>()
        .min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Education, ExperienceMetrics};

    fn experience(description: &str, achievements: &[&str]) -> Experience {
        Experience {
            id: "e".to_string(),
            description: description.to_string(),
            achievements: achievements.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }

    fn skills(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("skill-{i}")).collect()
    }

    #[test]
    fn test_empty_document_scores() {
        let scores = SubScores::compute(&ResumeDocument::default());
        assert_eq!(scores.completion, 0.0);
        assert_eq!(scores.ats, 0.0);
        assert_eq!(scores.impact, 0.0);
        assert_eq!(scores.readability, 80.0);
        assert_eq!(scores.keywords, 0.0);
        assert_eq!(scores.overall(), 16);
    }

    #[test]
    fn test_full_ats_without_impact() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.full_name = "Ada".to_string();
        doc.personal_info.email = "ada@example.com".to_string();
        doc.experience.push(experience("Wrote code", &[]));
        doc.education.push(Education::default());
        doc.skills = skills(5);

        assert_eq!(ats_score(&doc), 100.0);
        assert_eq!(impact_score(&doc), 0.0);
    }

    #[test]
    fn test_ats_partial_points() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.email = "ada@example.com".to_string();
        doc.skills = skills(4);
        assert_eq!(ats_score(&doc), 15.0);
    }

    #[test]
    fn test_ats_never_decreases_when_a_field_is_added() {
        let mut doc = ResumeDocument::default();
        let mut previous = ats_score(&doc);

        let steps: Vec<Box<dyn Fn(&mut ResumeDocument)>> = vec![
            Box::new(|d: &mut ResumeDocument| d.personal_info.full_name = "Ada".to_string()),
            Box::new(|d: &mut ResumeDocument| d.personal_info.email = "a@b.c".to_string()),
            Box::new(|d: &mut ResumeDocument| d.experience.push(Experience::default())),
            Box::new(|d: &mut ResumeDocument| d.education.push(Education::default())),
            Box::new(|d: &mut ResumeDocument| d.skills = skills(5)),
        ];
        for step in steps {
            step(&mut doc);
            let current = ats_score(&doc);
            assert!(current >= previous, "{current} < {previous}");
            previous = current;
        }
        assert_eq!(previous, 100.0);
    }

    #[test]
    fn test_full_impact() {
        let mut doc = ResumeDocument::default();
        let mut exp = experience("Sales", &["Closed deals", "Opened region"]);
        exp.metrics = Some(ExperienceMetrics {
            revenue: Some("$2M".to_string()),
            ..Default::default()
        });
        doc.experience.push(exp);
        doc.personal_info.summary = "x".repeat(60);
        assert_eq!(impact_score(&doc), 100.0);
    }

    #[test]
    fn test_impact_summary_boundary() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.summary = "x".repeat(50);
        assert_eq!(impact_score(&doc), 0.0);
        doc.personal_info.summary.push('x');
        assert_eq!(impact_score(&doc), 30.0);
    }

    #[test]
    fn test_impact_ignores_empty_metric_values() {
        let mut doc = ResumeDocument::default();
        let mut exp = experience("", &[]);
        exp.metrics = Some(ExperienceMetrics {
            revenue: Some(String::new()),
            team_size: None,
            improvement: Some(String::new()),
        });
        doc.experience.push(exp);
        assert_eq!(impact_score(&doc), 0.0);
    }

    #[test]
    fn test_readability_penalises_long_descriptions() {
        let mut doc = ResumeDocument::default();
        doc.experience.push(experience(&"a".repeat(200), &[]));
        assert_eq!(readability_score(&doc), 80.0);

        doc.experience[0].description.push('a');
        assert_eq!(readability_score(&doc), 70.0);

        doc.experience.push(experience(&"b".repeat(201), &[]));
        assert_eq!(readability_score(&doc), 60.0);
    }

    #[test]
    fn test_readability_floor_is_zero() {
        let mut doc = ResumeDocument::default();
        for _ in 0..20 {
            doc.experience.push(experience(&"word ".repeat(50), &[]));
        }
        assert_eq!(readability_score(&doc), 0.0);
    }

    #[test]
    fn test_keyword_fraction() {
        let exp = experience("I led the team", &["and improved uptime"]);
        let score = keyword_score(&[exp]);
        assert!((score - 100.0 / 3.0).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let upper = keyword_score(&[experience("LED the team", &[])]);
        let lower = keyword_score(&[experience("led the team", &[])]);
        assert_eq!(upper, lower);
        assert!(upper > 0.0);
    }

    #[test]
    fn test_keyword_counted_once() {
        let exp = experience("managed managed managed", &["managed"]);
        let score = keyword_score(&[exp]);
        assert!((score - 100.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_keywords_span_achievements_and_entries() {
        let entries = vec![
            experience("Developed services", &["Increased revenue"]),
            experience("Managed budgets", &["Achieved targets", "Led hiring", "Improved onboarding"]),
        ];
        assert_eq!(keyword_score(&entries), 100.0);
    }

    #[test]
    fn test_completion_is_passed_through_and_clamped() {
        let mut doc = ResumeDocument::default();
        doc.metadata.completion_score = 42.5;
        assert_eq!(completion_score(&doc), 42.5);
        doc.metadata.completion_score = 140.0;
        assert_eq!(completion_score(&doc), 100.0);
        doc.metadata.completion_score = -3.0;
        assert_eq!(completion_score(&doc), 0.0);
        doc.metadata.completion_score = f64::NAN;
        assert_eq!(completion_score(&doc), 0.0);
    }

    #[test]
    fn test_overall_uses_unrounded_subscores() {
        // (0 + 100 + 0 + 80 + 33.33) / 5 = 42.67 -> 43
        let scores = SubScores {
            completion: 0.0,
            ats: 100.0,
            impact: 0.0,
            readability: 80.0,
            keywords: 100.0 / 3.0,
        };
        assert_eq!(scores.overall(), 43);
        assert_eq!(scores.rounded().keywords, 33);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(16.5), 17);
        assert_eq!(round_half_up(16.49), 16);
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(100.0), 100);
    }
}
