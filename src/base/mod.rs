pub mod repository;
pub mod repository_traits;

pub use repository::{keys, KeyValueStore};
pub use repository_traits::*;
