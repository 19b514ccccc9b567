pub mod models;
pub mod paginator;
pub mod source;

// Re-exports
pub use models::*;
pub use paginator::*;
pub use source::*;
