mod get_project_detail_service;
mod list_projects_service;

pub use get_project_detail_service::{
    GetProjectDetailService, DETAIL_COVER_HEIGHT, DETAIL_COVER_WIDTH,
};
pub use list_projects_service::ListProjectsService;
