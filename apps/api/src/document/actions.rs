//! Reducer-style updates to a [`ResumeDocument`].
//!
//! Each editor callback maps to exactly one [`ResumeAction`]. `apply` either
//! performs the whole action and stamps `lastModified`, or returns an error
//! and leaves the document as it was.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::document::sections::SectionId;
use crate::document::DocumentError;
use crate::models::resume::{
    Award, Certification, CustomSection, CustomSectionKind, Education, Entry, Experience,
    Language, PersonalInfo, Project, ResumeDocument, VolunteerWork, TEMPLATES,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    Location,
    Summary,
    Website,
    Linkedin,
    Github,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResumeAction {
    SetPersonalField { field: PersonalField, value: String },

    AddExperience,
    UpdateExperience { entry: Experience },
    RemoveExperience { id: String },

    AddEducation,
    UpdateEducation { entry: Education },
    RemoveEducation { id: String },

    AddLanguage,
    UpdateLanguage { entry: Language },
    RemoveLanguage { id: String },

    AddCertification,
    UpdateCertification { entry: Certification },
    RemoveCertification { id: String },

    AddProject,
    UpdateProject { entry: Project },
    RemoveProject { id: String },

    AddVolunteer,
    UpdateVolunteer { entry: VolunteerWork },
    RemoveVolunteer { id: String },

    AddAward,
    UpdateAward { entry: Award },
    RemoveAward { id: String },

    AddSkill { skill: String },
    RemoveSkill { skill: String },

    MoveSection { from: usize, to: usize },
    ReorderSections { active: SectionId, over: SectionId },
    AddCustomSection { title: String, kind: CustomSectionKind },

    SetTemplate { template: String },
    Duplicate,
    ApplySuggestion { suggestion: String },
}

impl ResumeDocument {
    /// A blank document as the editor starts with it.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: ResumeAction, now: DateTime<Utc>) -> Result<(), DocumentError> {
        match action {
            ResumeAction::SetPersonalField { field, value } => {
                set_personal_field(&mut self.personal_info, field, value)
            }

            ResumeAction::AddExperience => push_new(&mut self.experience),
            ResumeAction::UpdateExperience { entry } => replace_entry(&mut self.experience, entry)?,
            ResumeAction::RemoveExperience { id } => remove_entry(&mut self.experience, &id)?,

            ResumeAction::AddEducation => push_new(&mut self.education),
            ResumeAction::UpdateEducation { entry } => replace_entry(&mut self.education, entry)?,
            ResumeAction::RemoveEducation { id } => remove_entry(&mut self.education, &id)?,

            ResumeAction::AddLanguage => push_new(&mut self.languages),
            ResumeAction::UpdateLanguage { entry } => replace_entry(&mut self.languages, entry)?,
            ResumeAction::RemoveLanguage { id } => remove_entry(&mut self.languages, &id)?,

            ResumeAction::AddCertification => push_new(&mut self.certifications),
            ResumeAction::UpdateCertification { entry } => {
                replace_entry(&mut self.certifications, entry)?
            }
            ResumeAction::RemoveCertification { id } => {
                remove_entry(&mut self.certifications, &id)?
            }

            ResumeAction::AddProject => push_new(&mut self.projects),
            ResumeAction::UpdateProject { entry } => replace_entry(&mut self.projects, entry)?,
            ResumeAction::RemoveProject { id } => remove_entry(&mut self.projects, &id)?,

            ResumeAction::AddVolunteer => push_new(&mut self.volunteer),
            ResumeAction::UpdateVolunteer { entry } => replace_entry(&mut self.volunteer, entry)?,
            ResumeAction::RemoveVolunteer { id } => remove_entry(&mut self.volunteer, &id)?,

            ResumeAction::AddAward => push_new(&mut self.awards),
            ResumeAction::UpdateAward { entry } => replace_entry(&mut self.awards, entry)?,
            ResumeAction::RemoveAward { id } => remove_entry(&mut self.awards, &id)?,

            ResumeAction::AddSkill { skill } => {
                let skill = skill.trim();
                if !skill.is_empty() && !self.skills.iter().any(|s| s == skill) {
                    self.skills.push(skill.to_string());
                }
            }
            ResumeAction::RemoveSkill { skill } => self.skills.retain(|s| *s != skill),

            ResumeAction::MoveSection { from, to } => self.sections.move_section(from, to)?,
            ResumeAction::ReorderSections { active, over } => {
                self.sections.reorder(&active, &over)?
            }
            ResumeAction::AddCustomSection { title, kind } => {
                let id = Uuid::new_v4().to_string();
                self.sections.push(SectionId::custom(id.clone()));
                self.custom_sections.push(CustomSection {
                    id,
                    title,
                    kind,
                    content: kind.empty_content(),
                });
            }

            ResumeAction::SetTemplate { template } => {
                if !TEMPLATES.contains(&template.as_str()) {
                    return Err(DocumentError::UnknownTemplate(template));
                }
                self.metadata.template = template;
            }
            ResumeAction::Duplicate => {
                self.metadata.version = self.metadata.version.saturating_add(1)
            }
            ResumeAction::ApplySuggestion { suggestion } => {
                let latest = self
                    .experience
                    .last_mut()
                    .ok_or(DocumentError::NoExperience)?;
                latest.achievements.push(suggestion);
            }
        }

        self.metadata.last_modified = Some(now);
        Ok(())
    }
}

fn set_personal_field(info: &mut PersonalInfo, field: PersonalField, value: String) {
    match field {
        PersonalField::FullName => info.full_name = value,
        PersonalField::Email => info.email = value,
        PersonalField::Phone => info.phone = value,
        PersonalField::Location => info.location = value,
        PersonalField::Summary => info.summary = value,
        PersonalField::Website => info.website = non_empty(value),
        PersonalField::Linkedin => info.linkedin = non_empty(value),
        PersonalField::Github => info.github = non_empty(value),
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn push_new<T: Entry>(entries: &mut Vec<T>) {
    let id = Uuid::new_v4().to_string();
    debug!("Adding {} entry {id}", T::KIND);
    entries.push(T::with_id(id));
}

fn replace_entry<T: Entry>(entries: &mut [T], entry: T) -> Result<(), DocumentError> {
    let slot = entries
        .iter_mut()
        .find(|e| e.id() == entry.id())
        .ok_or_else(|| DocumentError::EntryNotFound {
            kind: T::KIND,
            id: entry.id().to_string(),
        })?;
    *slot = entry;
    Ok(())
}

fn remove_entry<T: Entry>(entries: &mut Vec<T>, id: &str) -> Result<(), DocumentError> {
    let index = entries
        .iter()
        .position(|e| e.id() == id)
        .ok_or_else(|| DocumentError::EntryNotFound {
            kind: T::KIND,
            id: id.to_string(),
        })?;
    entries.remove(index);
    Ok(())
}
