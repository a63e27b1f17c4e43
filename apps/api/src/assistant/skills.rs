use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    #[default]
    Popular,
    Technical,
    Soft,
    Trending,
}

impl SkillCategory {
    pub fn title(self) -> &'static str {
        match self {
            SkillCategory::Popular => "Most Popular",
            SkillCategory::Technical => "Technical Skills",
            SkillCategory::Soft => "Soft Skills",
            SkillCategory::Trending => "Trending",
        }
    }

    pub fn catalog(self) -> &'static [&'static str] {
        match self {
            SkillCategory::Popular => &[
                "JavaScript",
                "Python",
                "React",
                "Node.js",
                "SQL",
                "Git",
                "Project Management",
                "Communication",
                "Leadership",
                "Problem Solving",
                "Team Collaboration",
                "Critical Thinking",
            ],
            SkillCategory::Technical => &[
                "TypeScript",
                "Java",
                "AWS",
                "Docker",
                "Kubernetes",
                "MongoDB",
                "PostgreSQL",
                "Redis",
                "GraphQL",
                "REST APIs",
                "Microservices",
                "CI/CD",
                "Unit Testing",
                "Agile",
                "Scrum",
            ],
            SkillCategory::Soft => &[
                "Strategic Thinking",
                "Adaptability",
                "Time Management",
                "Creativity",
                "Emotional Intelligence",
                "Conflict Resolution",
                "Public Speaking",
                "Mentoring",
                "Cross-functional Collaboration",
                "Decision Making",
            ],
            SkillCategory::Trending => &[
                "Machine Learning",
                "AI/ML",
                "Data Science",
                "Cloud Computing",
                "DevOps",
                "Cybersecurity",
                "Blockchain",
                "IoT",
                "AR/VR",
                "Remote Work",
                "Digital Marketing",
                "UX/UI Design",
            ],
        }
    }
}

const SKILL_REASONS: &[(&str, &str)] = &[
    ("JavaScript", "Essential for web development"),
    ("Python", "Versatile and in-demand"),
    ("React", "Popular frontend framework"),
    ("Leadership", "Valued across all industries"),
    ("Communication", "Critical soft skill"),
    ("Project Management", "High-demand skill"),
    ("Machine Learning", "Growing field with opportunities"),
    ("Cloud Computing", "Industry standard technology"),
];

const DEFAULT_REASON: &str = "Relevant to your field";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSuggestion {
    pub skill: String,
    pub reason: String,
}

pub fn recommendation_reason(skill: &str) -> &'static str {
    SKILL_REASONS
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, reason)| *reason)
        .unwrap_or(DEFAULT_REASON)
}

/// Catalog entries for `category` the resume does not list yet (exact match).
pub fn suggest_skills(category: SkillCategory, current: &[String]) -> Vec<SkillSuggestion> {
    category
        .catalog()
        .iter()
        .filter(|skill| !current.iter().any(|c| c == *skill))
        .map(|skill| SkillSuggestion {
            skill: skill.to_string(),
            reason: recommendation_reason(skill).to_string(),
        })
        .collect()
}
