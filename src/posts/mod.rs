pub mod core;
pub mod error;
pub mod handlers;
pub mod types;

pub use self::core::{PostStore, SharedPostStore};
pub use error::PostStoreError;
pub use types::Post;

#[cfg(test)]
mod tests;
