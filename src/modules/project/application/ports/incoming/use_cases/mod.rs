mod get_project_detail;
mod list_projects;

pub use get_project_detail::{
    GetProjectDetailError, GetProjectDetailUseCase, ProjectDetailOutcome, ProjectDetailView,
};
pub use list_projects::{
    ListProjectsError, ListProjectsUseCase, ProjectCardView, ProjectListView, CARD_COVER_HEIGHT,
    CARD_COVER_WIDTH,
};
