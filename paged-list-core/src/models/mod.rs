pub mod metadata;
pub mod paged_list;

// Re-exports
pub use metadata::*;
pub use paged_list::*;
