pub mod project_query;

pub use project_query::{non_blank, ProjectCard, ProjectDetailDoc, ProjectQuery, ProjectQueryError};
