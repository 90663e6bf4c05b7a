pub mod gnews_service;

pub use gnews_service::{parse_response, GNewsClient, DEFAULT_GNEWS_BASE_URL};
