mod compose_home_service;

pub use compose_home_service::{
    ComposeHomeService, EXPERIENCE_PREVIEW, FEATURED_LIMIT, HIGHLIGHT_PREVIEW, LATEST_POSTS_LIMIT,
    PORTRAIT_SIZE, TECH_PILL_LIMIT,
};
