//! JSON import and the downloadable starter template.

use std::collections::HashSet;

use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::document::sections::SectionOrder;
use crate::models::resume::{Entry, ResumeDocument};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid JSON format: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Resume data must be a JSON object")]
    NotAnObject,

    #[error("Resume data has an unexpected shape: {0}")]
    Shape(#[source] serde_json::Error),

    #[error("A LinkedIn profile URL is required")]
    MissingProfileUrl,
}

/// Parses user-supplied JSON into a document ready for the editor.
///
/// Missing sections default to empty. Skills are trimmed and de-duplicated,
/// entries without an id get a fresh one, and an empty section order is
/// replaced by the default order.
pub fn parse_import(raw: &str) -> Result<ResumeDocument, ImportError> {
    let value: Value = serde_json::from_str(raw).map_err(ImportError::InvalidJson)?;
    if !value.is_object() {
        return Err(ImportError::NotAnObject);
    }
    let mut document: ResumeDocument = serde_json::from_value(value).map_err(ImportError::Shape)?;
    normalize(&mut document);

    info!(
        "Imported resume: {} experience, {} education, {} skills",
        document.experience.len(),
        document.education.len(),
        document.skills.len()
    );
    Ok(document)
}

fn normalize(document: &mut ResumeDocument) {
    let mut seen = HashSet::new();
    document.skills = std::mem::take(&mut document.skills)
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect();

    assign_missing_ids(&mut document.experience);
    assign_missing_ids(&mut document.education);
    assign_missing_ids(&mut document.languages);
    assign_missing_ids(&mut document.certifications);
    assign_missing_ids(&mut document.projects);
    assign_missing_ids(&mut document.volunteer);
    assign_missing_ids(&mut document.awards);

    if document.sections.is_empty() {
        document.sections = SectionOrder::default();
    }
}

fn assign_missing_ids<T: Entry>(entries: &mut [T]) {
    for entry in entries.iter_mut().filter(|e| e.id().is_empty()) {
        let id = Uuid::new_v4().to_string();
        debug!("Assigned id {id} to imported {} entry", T::KIND);
        entry.set_id(id);
    }
}

/// Simulated LinkedIn import: a fixed sample profile carrying the given URL.
/// No request leaves the service.
pub fn linkedin_import(profile_url: &str) -> Result<ResumeDocument, ImportError> {
    let profile_url = profile_url.trim();
    if profile_url.is_empty() {
        return Err(ImportError::MissingProfileUrl);
    }

    let sample = json!({
        "personalInfo": {
            "fullName": "John Doe",
            "email": "john.doe@email.com",
            "location": "San Francisco, CA",
            "linkedin": profile_url,
            "summary": "Experienced software engineer with 5+ years in full-stack development"
        },
        "experience": [{
            "id": "1",
            "company": "Tech Corp",
            "position": "Senior Software Engineer",
            "startDate": "2020-01",
            "endDate": "",
            "description": "Led development of scalable web applications using React and Node.js"
        }],
        "education": [{
            "id": "1",
            "institution": "University of Technology",
            "degree": "Bachelor of Science",
            "field": "Computer Science",
            "startDate": "2016-09",
            "endDate": "2020-05"
        }],
        "skills": ["JavaScript", "React", "Node.js", "Python", "SQL"]
    });
    let mut document: ResumeDocument =
        serde_json::from_value(sample).map_err(ImportError::Shape)?;
    normalize(&mut document);

    info!("Imported sample LinkedIn profile for {profile_url}");
    Ok(document)
}

/// The sample document offered as "Download Template".
pub fn import_template() -> Value {
    json!({
        "personalInfo": {
            "fullName": "Your Name",
            "email": "your.email@example.com",
            "phone": "+1 (555) 123-4567",
            "location": "City, State",
            "summary": "Your professional summary here"
        },
        "experience": [{
            "id": "1",
            "company": "Company Name",
            "position": "Job Title",
            "startDate": "2020-01",
            "endDate": "2023-12",
            "description": "Job description",
            "achievements": ["Achievement 1", "Achievement 2"]
        }],
        "education": [{
            "id": "1",
            "institution": "University Name",
            "degree": "Degree Type",
            "field": "Field of Study",
            "startDate": "2016-09",
            "endDate": "2020-05"
        }],
        "skills": ["Skill 1", "Skill 2", "Skill 3"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_imports_cleanly() {
        let raw = import_template().to_string();
        let doc = parse_import(&raw).unwrap();
        assert_eq!(doc.personal_info.full_name, "Your Name");
        assert_eq!(doc.experience[0].achievements.len(), 2);
        assert_eq!(doc.education[0].institution, "University Name");
        assert_eq!(doc.skills, vec!["Skill 1", "Skill 2", "Skill 3"]);
        assert_eq!(doc.sections, SectionOrder::default());
        assert_eq!(doc.metadata.version, 1);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = parse_import("{ not json").unwrap_err();
        assert!(matches!(err, ImportError::InvalidJson(_)));
        assert!(err.to_string().starts_with("Invalid JSON format"));
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(matches!(
            parse_import("[1, 2, 3]").unwrap_err(),
            ImportError::NotAnObject
        ));
    }

    #[test]
    fn test_wrong_field_type_is_a_shape_error() {
        let err = parse_import(r#"{ "skills": "Rust, Go" }"#).unwrap_err();
        assert!(matches!(err, ImportError::Shape(_)));
    }

    #[test]
    fn test_skills_are_trimmed_and_deduplicated() {
        let doc = parse_import(r#"{ "skills": [" Rust", "Rust ", "", "Go", "Rust"] }"#).unwrap();
        assert_eq!(doc.skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_missing_ids_are_filled_and_existing_kept() {
        let doc = parse_import(
            r#"{ "experience": [{ "company": "A" }, { "id": "keep", "company": "B" }] }"#,
        )
        .unwrap();
        assert!(!doc.experience[0].id.is_empty());
        assert_eq!(doc.experience[1].id, "keep");
    }

    #[test]
    fn test_empty_section_order_is_restored() {
        let doc = parse_import(r#"{ "sections": [] }"#).unwrap();
        assert_eq!(doc.sections, SectionOrder::default());
    }

    #[test]
    fn test_linkedin_import_fills_profile_url() {
        let doc = linkedin_import(" https://linkedin.com/in/jdoe ").unwrap();
        assert_eq!(
            doc.personal_info.linkedin.as_deref(),
            Some("https://linkedin.com/in/jdoe")
        );
        assert_eq!(doc.personal_info.full_name, "John Doe");
        assert_eq!(doc.experience[0].company, "Tech Corp");
        assert_eq!(doc.skills.len(), 5);
        assert_eq!(doc.sections, SectionOrder::default());
    }

    #[test]
    fn test_linkedin_import_requires_url() {
        assert!(matches!(
            linkedin_import("   ").unwrap_err(),
            ImportError::MissingProfileUrl
        ));
    }

    #[test]
    fn test_explicit_section_order_is_kept() {
        let doc = parse_import(r#"{ "sections": ["skills", "personal"] }"#).unwrap();
        assert_eq!(doc.sections.len(), 2);
    }
}
