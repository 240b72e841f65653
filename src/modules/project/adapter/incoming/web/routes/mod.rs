mod list_projects;
mod project_detail;

pub use list_projects::list_projects_handler;
pub use project_detail::project_detail_handler;
