#![allow(dead_code)]

//! The resume document as edited in the browser.
//!
//! Field names follow the editor's JSON (camelCase). Every field tolerates
//! being absent or `null` so a half-filled document always deserializes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::document::sections::SectionOrder;

/// Templates the preview knows how to render.
pub const TEMPLATES: &[&str] = &["modern", "classic", "creative", "minimal", "executive", "tech"];
pub const DEFAULT_TEMPLATE: &str = "modern";

/// Treats an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// Optional hard numbers attached to a role. Any non-empty value counts as a metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceMetrics {
    pub revenue: Option<String>,
    pub team_size: Option<String>,
    pub improvement: Option<String>,
}

impl ExperienceMetrics {
    pub fn has_revenue(&self) -> bool {
        is_filled(self.revenue.as_deref())
    }

    pub fn has_any(&self) -> bool {
        self.has_revenue()
            || is_filled(self.team_size.as_deref())
            || is_filled(self.improvement.as_deref())
    }
}

fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ExperienceMetrics>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub field: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub honors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub issuer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolunteerWork {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub organization: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Award {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub issuer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomSectionKind {
    #[default]
    List,
    Paragraph,
    Achievements,
}

impl CustomSectionKind {
    /// Initial `content` for a new section: an empty list for `List`, empty text otherwise.
    pub fn empty_content(self) -> serde_json::Value {
        match self {
            CustomSectionKind::List => serde_json::Value::Array(Vec::new()),
            CustomSectionKind::Paragraph | CustomSectionKind::Achievements => {
                serde_json::Value::String(String::new())
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomSection {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "type")]
    pub kind: CustomSectionKind,
    /// Free-form payload; its shape depends on `kind` and is owned by the editor.
    pub content: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeMetadata {
    /// Supplied by the form-completeness tracker, expected in [0, 100].
    #[serde(deserialize_with = "null_as_default")]
    pub completion_score: f64,
    pub last_modified: Option<DateTime<Utc>>,
    pub version: u32,
    pub template: String,
}

impl Default for ResumeMetadata {
    fn default() -> Self {
        Self {
            completion_score: 0.0,
            last_modified: None,
            version: 1,
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub languages: Vec<Language>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<Certification>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "null_as_default")]
    pub volunteer: Vec<VolunteerWork>,
    #[serde(deserialize_with = "null_as_default")]
    pub awards: Vec<Award>,
    #[serde(deserialize_with = "null_as_default")]
    pub custom_sections: Vec<CustomSection>,
    #[serde(deserialize_with = "null_as_default")]
    pub sections: SectionOrder,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: ResumeMetadata,
}

/// A collection member addressed by its string id.
pub trait Entry: Default {
    /// Name used in error messages, e.g. "experience".
    const KIND: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);

    fn with_id(id: String) -> Self {
        let mut entry = Self::default();
        entry.set_id(id);
        entry
    }
}

macro_rules! impl_entry {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl Entry for $ty {
                const KIND: &'static str = $kind;

                fn id(&self) -> &str {
                    &self.id
                }

                fn set_id(&mut self, id: String) {
                    self.id = id;
                }
            }
        )*
    };
}

impl_entry! {
    Experience => "experience",
    Education => "education",
    Language => "language",
    Certification => "certification",
    Project => "project",
    VolunteerWork => "volunteer",
    Award => "award",
}
