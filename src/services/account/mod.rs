pub mod account_service;

pub use account_service::{decode_response, AccountClient};
