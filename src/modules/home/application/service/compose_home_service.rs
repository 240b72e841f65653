// src/modules/home/application/service/compose_home_service.rs

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, Utc};

use crate::modules::blog::application::ports::incoming::list_posts::PostItemView;
use crate::modules::blog::application::ports::outgoing::post_query::PostQuery;
use crate::modules::home::application::ports::incoming::compose_home::{
    ComposeHomeError, ComposeHomeUseCase, ContactView, EducationView, ExperienceView, HomeView,
    PublicationView, SkillLine, DEFAULT_HERO_HEADLINE, DEFAULT_SITE_TITLE,
};
use crate::modules::project::application::ports::incoming::use_cases::ProjectCardView;
use crate::modules::project::application::ports::outgoing::project_query::ProjectQuery;
use crate::shared::content_store::{portable_text, Fit, ImageUrlBuilder};
use crate::site::application::ports::outgoing::{
    Contact, EducationEntry, ExperienceEntry, Publication, SettingsQuery, SiteSettings, Skills,
};

pub const FEATURED_LIMIT: usize = 4;
pub const LATEST_POSTS_LIMIT: usize = 3;
/// Homepage shows a resume preview, not the whole history.
pub const EXPERIENCE_PREVIEW: usize = 3;
pub const HIGHLIGHT_PREVIEW: usize = 3;
pub const TECH_PILL_LIMIT: usize = 5;
/// 200×200 logical, requested at 2× for crisp rendering.
pub const PORTRAIT_SIZE: u32 = 420;

/// Composes the homepage from three independent reads issued
/// concurrently: the settings singleton, the featured projects, and the
/// latest posts.
pub struct ComposeHomeService<S, P, B>
where
    S: SettingsQuery,
    P: ProjectQuery,
    B: PostQuery,
{
    settings: S,
    projects: P,
    posts: B,
    images: Arc<ImageUrlBuilder>,
}

impl<S, P, B> ComposeHomeService<S, P, B>
where
    S: SettingsQuery,
    P: ProjectQuery,
    B: PostQuery,
{
    pub fn new(settings: S, projects: P, posts: B, images: Arc<ImageUrlBuilder>) -> Self {
        Self {
            settings,
            projects,
            posts,
            images,
        }
    }
}

#[async_trait]
impl<S, P, B> ComposeHomeUseCase for ComposeHomeService<S, P, B>
where
    S: SettingsQuery + Send + Sync,
    P: ProjectQuery + Send + Sync,
    B: PostQuery + Send + Sync,
{
    async fn execute(&self) -> Result<HomeView, ComposeHomeError> {
        let settings_fut = async { self.settings.fetch().await.map_err(ComposeHomeError::from) };
        let featured_fut = async {
            self.projects
                .featured(FEATURED_LIMIT)
                .await
                .map_err(ComposeHomeError::from)
        };
        let posts_fut = async {
            self.posts
                .latest(LATEST_POSTS_LIMIT)
                .await
                .map_err(ComposeHomeError::from)
        };

        let (settings, featured, posts) = futures::try_join!(settings_fut, featured_fut, posts_fut)?;
        let settings = settings.unwrap_or_default();

        let portrait_url = settings.portrait.as_ref().and_then(|portrait| {
            self.images
                .image_url(portrait, PORTRAIT_SIZE, PORTRAIT_SIZE, Fit::Crop)
        });
        let portrait_alt = portrait_url.is_some().then(|| {
            settings
                .portrait
                .as_ref()
                .and_then(|portrait| portrait.alt.clone())
                .unwrap_or_else(|| "Portrait".to_string())
        });
        let about_html = settings
            .about
            .as_ref()
            .map(|blocks| portable_text::to_html(blocks, &self.images))
            .filter(|html| !html.is_empty());

        let featured_projects = featured
            .into_iter()
            .map(|card| {
                let mut view = ProjectCardView::direct(card, &self.images);
                view.tech_stack.truncate(TECH_PILL_LIMIT);
                view
            })
            .collect();

        Ok(HomeView {
            site_title: settings
                .site_title
                .clone()
                .unwrap_or_else(|| DEFAULT_SITE_TITLE.to_string()),
            hero_headline: settings
                .hero_headline
                .clone()
                .unwrap_or_else(|| DEFAULT_HERO_HEADLINE.to_string()),
            hero_subtext: settings.hero_subtext.clone(),
            portrait_url,
            portrait_alt,
            summary: settings.summary.clone(),
            about_html,
            contact: contact_view(settings.contact.clone()),
            cv_link: cv_link(&settings),
            featured_projects,
            latest_posts: posts.into_iter().map(PostItemView::from).collect(),
            experience: settings
                .experience
                .unwrap_or_default()
                .into_iter()
                .take(EXPERIENCE_PREVIEW)
                .map(experience_view)
                .collect(),
            education: settings
                .education
                .unwrap_or_default()
                .into_iter()
                .map(education_view)
                .collect(),
            publications: settings
                .publications
                .unwrap_or_default()
                .into_iter()
                .map(publication_view)
                .collect(),
            awards: settings.awards.unwrap_or_default(),
            memberships: settings.memberships.unwrap_or_default(),
            skills: skill_lines(settings.skills),
            year: Utc::now().year(),
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// View construction
// ──────────────────────────────────────────────────────────
//

/// The uploaded CV file is authoritative; the external URL is the
/// fallback.
fn cv_link(settings: &SiteSettings) -> Option<String> {
    settings
        .cv_file
        .as_ref()
        .and_then(|file| file.url().map(str::to_string))
        .or_else(|| {
            settings
                .cv_url
                .clone()
                .filter(|url| !url.trim().is_empty())
        })
}

fn contact_view(contact: Option<Contact>) -> ContactView {
    let contact = contact.unwrap_or_default();
    ContactView {
        email: contact.email,
        phone: contact.phone,
        location: contact.location,
        github_url: contact.github_url,
        linkedin_url: contact.linkedin_url,
    }
}

/// Fixed category order: Programming, ML / Data, Tools,
/// Actuarial / Finance. Empty categories produce no line.
fn skill_lines(skills: Option<Skills>) -> Vec<SkillLine> {
    let skills = skills.unwrap_or_default();
    let categories = [
        ("Programming", skills.programming),
        ("ML / Data", skills.ml_data),
        ("Tools", skills.tools),
        ("Actuarial / Finance", skills.actuarial),
    ];

    categories
        .into_iter()
        .filter_map(|(label, items)| {
            let items = items.unwrap_or_default();
            if items.is_empty() {
                None
            } else {
                Some(SkillLine {
                    label: label.to_string(),
                    items: items.join(", "),
                })
            }
        })
        .collect()
}

fn period_label(start: Option<&str>, end: Option<&str>, current: bool) -> Option<String> {
    match (start, end, current) {
        (Some(start), Some(end), _) => Some(format!("{start} → {end}")),
        (Some(start), None, true) => Some(format!("{start} → Present")),
        (Some(start), None, false) => Some(start.to_string()),
        (None, Some(end), _) => Some(format!("→ {end}")),
        (None, None, true) => Some("→ Present".to_string()),
        (None, None, false) => None,
    }
}

fn experience_view(entry: ExperienceEntry) -> ExperienceView {
    let role_line = match (entry.title, entry.company) {
        (Some(title), Some(company)) => format!("{title} — {company}"),
        (Some(title), None) => title,
        (None, Some(company)) => company,
        (None, None) => String::new(),
    };

    let period = period_label(
        entry.start.as_deref(),
        entry.end.as_deref(),
        entry.current.unwrap_or(false),
    );
    let meta_line = match (entry.location, period) {
        (Some(location), Some(period)) => Some(format!("{location} • {period}")),
        (Some(location), None) => Some(location),
        (None, Some(period)) => Some(period),
        (None, None) => None,
    };

    let mut highlights = entry.highlights.unwrap_or_default();
    highlights.truncate(HIGHLIGHT_PREVIEW);

    ExperienceView {
        role_line,
        meta_line,
        highlights,
    }
}

fn year_span(start: Option<i32>, end: Option<i32>) -> Option<String> {
    match (start, end) {
        (Some(start), Some(end)) => Some(format!("{start}–{end}")),
        (Some(start), None) => Some(format!("{start}–")),
        (None, Some(end)) => Some(end.to_string()),
        (None, None) => None,
    }
}

fn education_view(entry: EducationEntry) -> EducationView {
    let heading = match (entry.degree, entry.field) {
        (Some(degree), Some(field)) => Some(format!("{degree} in {field}")),
        (Some(degree), None) => Some(degree),
        (None, Some(field)) => Some(field),
        (None, None) => None,
    };

    let institution_line = match (entry.institution, entry.location) {
        (Some(institution), Some(location)) => Some(format!("{institution}, {location}")),
        (Some(institution), None) => Some(institution),
        (None, Some(location)) => Some(location),
        (None, None) => None,
    };

    EducationView {
        heading,
        institution_line,
        years: year_span(entry.start_year, entry.end_year),
        notes: entry.notes.unwrap_or_default(),
    }
}

fn publication_view(publication: Publication) -> PublicationView {
    PublicationView {
        citation: publication.citation.unwrap_or_default(),
        year: publication.year,
        link: publication.link,
    }
}
