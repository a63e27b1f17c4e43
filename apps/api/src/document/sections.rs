#![allow(dead_code)]

//! Section ordering for the editor and preview.
//!
//! The order is a plain sequence of section ids. Drag-and-drop in the browser
//! reduces to a single array-move, so nothing here knows about pointers,
//! sensors or drop targets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::document::DocumentError;

const CUSTOM_PREFIX: &str = "custom_";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SectionId {
    Personal,
    Summary,
    Experience,
    Education,
    Skills,
    Languages,
    Certifications,
    Projects,
    Volunteer,
    Awards,
    /// A user-added section, serialized as `custom_<id>`.
    Custom(String),
}

impl SectionId {
    pub fn custom(id: impl Into<String>) -> Self {
        SectionId::Custom(id.into())
    }
}

const BUILT_IN: &[(SectionId, &str)] = &[
    (SectionId::Personal, "personal"),
    (SectionId::Summary, "summary"),
    (SectionId::Experience, "experience"),
    (SectionId::Education, "education"),
    (SectionId::Skills, "skills"),
    (SectionId::Languages, "languages"),
    (SectionId::Certifications, "certifications"),
    (SectionId::Projects, "projects"),
    (SectionId::Volunteer, "volunteer"),
    (SectionId::Awards, "awards"),
];

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let SectionId::Custom(id) = self {
            return write!(f, "{CUSTOM_PREFIX}{id}");
        }
        let name = BUILT_IN
            .iter()
            .find(|(section, _)| section == self)
            .map(|(_, name)| *name)
            .unwrap_or_default();
        f.write_str(name)
    }
}

impl FromStr for SectionId {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((section, _)) = BUILT_IN.iter().find(|(_, name)| *name == s) {
            return Ok(section.clone());
        }
        match s.strip_prefix(CUSTOM_PREFIX) {
            Some(id) if !id.is_empty() => Ok(SectionId::Custom(id.to_string())),
            _ => Err(DocumentError::UnknownSection(s.to_string())),
        }
    }
}

impl TryFrom<String> for SectionId {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SectionId> for String {
    fn from(value: SectionId) -> Self {
        value.to_string()
    }
}

/// Ordered list of sections as shown in the editor and the preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionOrder(Vec<SectionId>);

impl Default for SectionOrder {
    fn default() -> Self {
        Self(BUILT_IN.iter().map(|(section, _)| section.clone()).collect())
    }
}

impl SectionOrder {
    pub fn new(sections: Vec<SectionId>) -> Self {
        Self(sections)
    }

    pub fn as_slice(&self) -> &[SectionId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn position(&self, section: &SectionId) -> Option<usize> {
        self.0.iter().position(|s| s == section)
    }

    pub fn push(&mut self, section: SectionId) {
        self.0.push(section);
    }

    /// Moves the section at `from` so that it ends up at index `to`.
    /// Both indices must be in range; the order is untouched on error.
    pub fn move_section(&mut self, from: usize, to: usize) -> Result<(), DocumentError> {
        let len = self.0.len();
        for index in [from, to] {
            if index >= len {
                return Err(DocumentError::SectionIndexOutOfRange { index, len });
            }
        }
        let section = self.0.remove(from);
        self.0.insert(to, section);
        Ok(())
    }

    /// Drag-end semantics: the dragged section takes the slot of the one it was dropped on.
    pub fn reorder(&mut self, active: &SectionId, over: &SectionId) -> Result<(), DocumentError> {
        if active == over {
            return Ok(());
        }
        let from = self
            .position(active)
            .ok_or_else(|| DocumentError::UnknownSection(active.to_string()))?;
        let to = self
            .position(over)
            .ok_or_else(|| DocumentError::UnknownSection(over.to_string()))?;
        self.move_section(from, to)
    }
}
