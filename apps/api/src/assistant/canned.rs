//! Fixed assistant text used by `CannedSuggestionProvider`.

const SOFTWARE_ENGINEER: &[&str] = &[
    "Developed and maintained scalable web applications using React and Node.js",
    "Collaborated with cross-functional teams to deliver high-quality software solutions",
    "Implemented automated testing procedures, reducing bug reports by 40%",
    "Optimized database queries resulting in 25% faster page load times",
    "Led code reviews and mentored junior developers",
];

const MARKETING_MANAGER: &[&str] = &[
    "Developed and executed comprehensive marketing strategies across multiple channels",
    "Increased brand awareness by 45% through targeted social media campaigns",
    "Managed a team of 5 marketing professionals and coordinated project timelines",
    "Analyzed market trends and competitor strategies to inform decision-making",
    "Generated $2M in new revenue through innovative lead generation campaigns",
];

const DATA_ANALYST: &[&str] = &[
    "Analyzed large datasets to identify trends and provide actionable business insights",
    "Created automated reports and dashboards using SQL, Python, and Tableau",
    "Collaborated with stakeholders to define KPIs and measurement frameworks",
    "Improved data accuracy by 30% through implementation of quality control processes",
    "Presented findings to C-level executives and influenced strategic decisions",
];

const GENERAL: &[&str] = &[
    "Demonstrated strong problem-solving abilities in fast-paced environments",
    "Collaborated effectively with diverse teams to achieve common goals",
    "Managed multiple projects simultaneously while meeting strict deadlines",
    "Implemented process improvements that increased efficiency by 20%",
    "Communicated complex information clearly to various stakeholders",
];

/// Suggestions for a job title, matched case-insensitively after trimming.
pub fn suggestions_for(role: &str) -> &'static [&'static str] {
    match role.trim().to_lowercase().as_str() {
        "software engineer" => SOFTWARE_ENGINEER,
        "marketing manager" => MARKETING_MANAGER,
        "data analyst" => DATA_ANALYST,
        _ => GENERAL,
    }
}

pub fn summary_for(role: &str) -> String {
    let role = match role.trim() {
        "" => "professional",
        r => r,
    };
    format!(
        "Results-driven {role} with proven expertise in delivering high-impact solutions. \
         Demonstrated ability to drive innovation, lead cross-functional teams, and exceed \
         performance targets. Passionate about leveraging cutting-edge technologies and \
         data-driven insights to solve complex business challenges and drive organizational growth."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_matching_ignores_case_and_padding() {
        assert_eq!(suggestions_for("Marketing Manager"), MARKETING_MANAGER);
        assert_eq!(suggestions_for(" data analyst "), DATA_ANALYST);
        assert_eq!(suggestions_for(""), GENERAL);
    }

    #[test]
    fn test_summary_defaults_to_professional() {
        assert!(summary_for("   ").starts_with("Results-driven professional with"));
        assert!(summary_for("Nurse").starts_with("Results-driven Nurse with"));
        assert!(summary_for("Nurse").ends_with("drive organizational growth."));
    }
}
