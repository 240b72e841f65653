// src/modules/site/adapter/outgoing/settings_query_http.rs

use std::sync::Arc;

use async_trait::async_trait;

use crate::shared::content_store::{ContentStoreError, QueryExecutor};
use crate::site::application::ports::outgoing::{
    SettingsQuery, SettingsQueryError, SiteSettings,
};

/// Projection for the settings singleton. The uploaded CV file is
/// dereferenced to its URL at query time.
pub const SETTINGS_QUERY: &str = r#"*[_type=="siteSettings"][0]{
  siteTitle,
  heroHeadline,
  heroSubtext,
  portrait,
  summary,
  about,
  contact,
  cvUrl,
  cvFile{asset->{url}},
  education,
  experience,
  publications,
  awards,
  memberships,
  skills
}"#;

#[derive(Clone)]
pub struct SettingsQueryHttp {
    store: Arc<dyn QueryExecutor>,
}

impl SettingsQueryHttp {
    pub fn new(store: Arc<dyn QueryExecutor>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SettingsQuery for SettingsQueryHttp {
    async fn fetch(&self) -> Result<Option<SiteSettings>, SettingsQueryError> {
        let result = self
            .store
            .query(SETTINGS_QUERY, &[])
            .await
            .map_err(map_store_err)?;

        if result.is_null() {
            return Ok(None);
        }

        let settings = serde_json::from_value(result)
            .map_err(|err| SettingsQueryError::Decode(err.to_string()))?;

        Ok(Some(settings))
    }
}

fn map_store_err(err: ContentStoreError) -> SettingsQueryError {
    match err {
        ContentStoreError::Decode(msg) => SettingsQueryError::Decode(msg),
        other => SettingsQueryError::Upstream(other.to_string()),
    }
}
