pub mod error;
pub mod io;
pub mod models;
mod patterns;
pub mod query;

// Re-export key types for easier usage
pub use error::QueryError;
pub use io::*;
pub use models::*;
pub use query::MarkdownQuery;
