mod blog;

pub use blog::blog_handler;
