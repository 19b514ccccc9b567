pub mod count;
pub mod memory;
pub mod transform;
pub mod windowed;

// Re-exports
pub use count::*;
pub use memory::*;
pub use transform::*;
pub use windowed::*;

/// Full capability set the paginator consumes: a countable collection that can
/// hand back one bounded window
///
/// Blanket-implemented for anything providing both halves; implementors only
/// write [`Count`] and [`Windowed`].
pub trait DataSource<T>: Count + Windowed<T> {}

impl<S, T> DataSource<T> for S where S: Count + Windowed<T> {}
