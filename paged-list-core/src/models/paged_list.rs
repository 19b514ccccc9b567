use serde::Serialize;

use crate::models::metadata::PageMetadata;

/// One materialized page of a larger collection: the metadata plus the
/// extracted items, at most `page_size` of them
///
/// Built once by [`crate::paginator::paginate`] (or the mapped variant) and
/// never mutated; a new page request produces a new `PagedList`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagedList<T> {
    metadata: PageMetadata,
    items: Vec<T>,
}

impl<T> PagedList<T> {
    pub(crate) fn new(metadata: PageMetadata, items: Vec<T>) -> Self {
        debug_assert!(items.len() as u64 <= metadata.page_size);
        Self { metadata, items }
    }

    /// The derived metadata for this page
    pub fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }

    /// The items on this page, in source order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page and keep only the items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for PagedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PagedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
