mod post_query_http;

pub use post_query_http::PostQueryHttp;
