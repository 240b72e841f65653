pub mod compose_home;

pub use compose_home::{
    ComposeHomeError, ComposeHomeUseCase, ContactView, EducationView, ExperienceView, HomeView,
    PublicationView, SkillLine, DEFAULT_HERO_HEADLINE, DEFAULT_SITE_TITLE,
};
