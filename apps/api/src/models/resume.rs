//! Résumé record as stored in the content collection.
//!
//! The record is deserialized straight from JSON. Optional fields are `Option` at the
//! type level; renderers branch on them explicitly.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub summary: String,
    pub location: String,
    #[serde(default)]
    pub contact: Option<Contact>,
    pub education: Vec<EducationItem>,
    pub experience: Vec<Job>,
    #[serde(default)]
    pub courses: Option<Vec<Course>>,
    #[serde(default)]
    pub skills: Option<Vec<SkillGroup>>,
}

/// Contact fields, each a URL or address once placeholders are resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start: String,
    /// `None` means the position is current.
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub dates: DateRange,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub institution: String,
    pub location: String,
    pub dates: DateRange,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

/// Name and headline printed above the location line. Not part of the stored record.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentIdentity {
    pub name: String,
    pub title: String,
}
