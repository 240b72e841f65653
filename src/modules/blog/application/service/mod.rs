mod list_posts_service;

pub use list_posts_service::ListPostsService;
