pub mod list_posts;

pub use list_posts::{BlogListView, ListPostsError, ListPostsUseCase, PostItemView};
