//! WordPress content adapter.

pub mod repository;
pub mod types;

pub use repository::WordPressRepository;
