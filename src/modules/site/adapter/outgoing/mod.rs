mod settings_query_http;

pub use settings_query_http::SettingsQueryHttp;
