// src/modules/site/application/ports/outgoing/settings_query.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::content_store::{FileRef, ImageRef};

//
// ──────────────────────────────────────────────────────────
// Document snapshot
// ──────────────────────────────────────────────────────────
//
// Field names are the store's camelCase projection names. Every field is
// optional: editors fill the document in incrementally and the pages
// degrade by omitting sections. Lists stay `Option<Vec<_>>` because the
// store sends an explicit null for unset fields.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    pub site_title: Option<String>,
    pub hero_headline: Option<String>,
    pub hero_subtext: Option<String>,
    pub portrait: Option<ImageRef>,
    pub summary: Option<String>,
    pub about: Option<Vec<Value>>,
    pub contact: Option<Contact>,
    pub cv_url: Option<String>,
    pub cv_file: Option<FileRef>,
    pub education: Option<Vec<EducationEntry>>,
    pub experience: Option<Vec<ExperienceEntry>>,
    pub publications: Option<Vec<Publication>>,
    pub awards: Option<Vec<String>>,
    pub memberships: Option<Vec<String>>,
    pub skills: Option<Skills>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub field: Option<String>,
    pub institution: Option<String>,
    pub location: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub notes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub company: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub current: Option<bool>,
    pub highlights: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Publication {
    pub citation: Option<String>,
    pub year: Option<i32>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    pub programming: Option<Vec<String>>,
    pub ml_data: Option<Vec<String>>,
    pub tools: Option<Vec<String>>,
    pub actuarial: Option<Vec<String>>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsQueryError {
    #[error("Content store error: {0}")]
    Upstream(String),

    #[error("Malformed settings document: {0}")]
    Decode(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read-only singleton)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SettingsQuery: Send + Sync {
    /// A site without a settings document still renders, with every
    /// optional section omitted.
    async fn fetch(&self) -> Result<Option<SiteSettings>, SettingsQueryError>;
}
