use async_trait::async_trait;
use paged_list_api::BoxError;

use crate::source::count::Count;
use crate::source::windowed::Windowed;

/// Vec-backed data source for in-memory collections
///
/// Useful for tests and for paginating small supersets that are already
/// loaded; counts and windows never fail.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource<T> {
    items: Vec<T>,
}

impl<T> InMemorySource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl<T: Send + Sync> Count for InMemorySource<T> {
    async fn count(&self) -> Result<u64, BoxError> {
        Ok(self.items.len() as u64)
    }
}

#[async_trait]
impl<T: Clone + Send + Sync> Windowed<T> for InMemorySource<T> {
    async fn windowed(&self, skip: u64, take: u64) -> Result<Vec<T>, BoxError> {
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let take = usize::try_from(take).unwrap_or(usize::MAX);
        Ok(self.items.iter().skip(skip).take(take).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn count_reports_collection_size() {
        let source = InMemorySource::new(vec![1, 2, 3]);
        assert_eq!(source.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn window_skips_then_takes() {
        let source = InMemorySource::new(vec![1, 2, 3, 4, 5]);
        assert_eq!(source.windowed(2, 2).await.unwrap(), vec![3, 4]);
    }

    #[tokio::test]
    async fn window_past_the_end_is_empty() {
        let source = InMemorySource::new(vec![1, 2, 3]);
        assert!(source.windowed(10, 5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn short_tail_window_returns_what_remains() {
        let source = InMemorySource::new(vec!["a", "b", "c"]);
        assert_eq!(source.windowed(2, 5).await.unwrap(), vec!["c"]);
    }
}
