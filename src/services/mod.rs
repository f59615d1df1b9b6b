pub mod env_source;
pub mod line_client;
