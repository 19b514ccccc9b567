pub mod extract;
pub mod paginate;

// Re-exports
pub use extract::*;
pub use paginate::*;
