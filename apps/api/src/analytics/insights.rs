use serde::{Deserialize, Serialize};

use crate::analytics::scoring::{has_long_summary, SubScores, SKILLS_TARGET};
use crate::models::resume::ResumeDocument;

/// Keyword sub-score above which "Optimize Keywords" counts as done.
const KEYWORD_TARGET: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightPriority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    pub priority: InsightPriority,
    pub implemented: bool,
}

struct InsightRule {
    title: &'static str,
    description: &'static str,
    priority: InsightPriority,
    is_implemented: fn(&ResumeDocument, &SubScores) -> bool,
}

// Order is part of the contract; the panel renders these top to bottom.
const INSIGHT_RULES: &[InsightRule] = &[
    InsightRule {
        title: "Add Quantifiable Results",
        description:
            "Include specific numbers, percentages, or dollar amounts in your achievements",
        priority: InsightPriority::High,
        is_implemented: |doc, _| {
            doc.experience
                .iter()
                .any(|exp| exp.metrics.as_ref().is_some_and(|m| m.has_revenue()))
        },
    },
    InsightRule {
        title: "Optimize Keywords",
        description: "Use industry-specific terms and action verbs to improve ATS compatibility",
        priority: InsightPriority::Medium,
        is_implemented: |_, scores| scores.keywords > KEYWORD_TARGET,
    },
    InsightRule {
        title: "Professional Summary",
        description: "Write a compelling 2-3 sentence summary highlighting your value proposition",
        priority: InsightPriority::High,
        is_implemented: |doc, _| has_long_summary(doc),
    },
    InsightRule {
        title: "Skills Section",
        description: "Include both technical and soft skills relevant to your target role",
        priority: InsightPriority::Medium,
        is_implemented: |doc, _| doc.skills.len() >= SKILLS_TARGET,
    },
];

/// Evaluates every recommendation against the current document.
pub fn derive_insights(doc: &ResumeDocument, scores: &SubScores) -> Vec<Insight> {
    INSIGHT_RULES
        .iter()
        .map(|rule| Insight {
            title: rule.title.to_string(),
            description: rule.description.to_string(),
            priority: rule.priority,
            implemented: (rule.is_implemented)(doc, scores),
        })
        .collect()
}
