pub mod settings_query;

pub use settings_query::{
    Contact, EducationEntry, ExperienceEntry, Publication, SettingsQuery, SettingsQueryError,
    SiteSettings, Skills,
};
