pub mod post_query;

pub use post_query::{PostItem, PostQuery, PostQueryError};
