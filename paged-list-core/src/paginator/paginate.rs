use paged_list_api::{PaginationError, PaginationResult};

use crate::models::metadata::{validate_page_args, PageMetadata};
use crate::models::paged_list::PagedList;
use crate::paginator::extract::extract_page;
use crate::source::transform::TransformBatch;
use crate::source::DataSource;

/// Paginate a data source without mapping
///
/// Validates the page arguments before touching the source, reads the count,
/// derives the metadata, extracts exactly one bounded window, and assembles
/// the immutable [`PagedList`].
///
/// An absent source is not an error: it paginates as an empty collection.
/// A present source that fails either read surfaces as
/// [`PaginationError::SourceUnavailable`].
///
/// # Example
/// ```
/// use paged_list_core::paginator::paginate;
/// use paged_list_core::source::InMemorySource;
///
/// # tokio_test::block_on(async {
/// let source = InMemorySource::new((1..=10).collect::<Vec<i32>>());
/// let page = paginate(Some(&source), 4, 3).await.unwrap();
/// assert_eq!(page.items(), &[10]);
/// assert!(page.metadata().is_last_page);
/// # });
/// ```
pub async fn paginate<Src, T>(
    source: Option<&Src>,
    page_number: u64,
    page_size: u64,
) -> PaginationResult<PagedList<T>>
where
    Src: DataSource<T> + ?Sized,
{
    assemble(source, page_number, page_size, Ok).await
}

/// Paginate a data source with source -> destination mapping
/// (ex. model to view-model mapping)
///
/// Identical to [`paginate`] except that the extracted window is handed to
/// `transform` as one batch before assembly. A transform failure fails the
/// whole call with [`PaginationError::MappingFailure`]; no partial page is
/// returned.
pub async fn paginate_mapped<Src, S, D, M>(
    source: Option<&Src>,
    page_number: u64,
    page_size: u64,
    transform: &M,
) -> PaginationResult<PagedList<D>>
where
    Src: DataSource<S> + ?Sized,
    M: TransformBatch<S, D> + ?Sized,
{
    assemble(source, page_number, page_size, |batch| {
        transform
            .transform(batch)
            .map_err(|source| PaginationError::MappingFailure { source })
    })
    .await
}

/// Shared pagination path, parameterized over the element-production step
///
/// Exactly one count read and at most one window read per call; the two are
/// sequential with no snapshot guarantee between them.
async fn assemble<Src, S, R, F>(
    source: Option<&Src>,
    page_number: u64,
    page_size: u64,
    produce: F,
) -> PaginationResult<PagedList<R>>
where
    Src: DataSource<S> + ?Sized,
    F: FnOnce(Vec<S>) -> PaginationResult<Vec<R>>,
{
    validate_page_args(page_number, page_size)?;

    let total_item_count = match source {
        None => 0,
        Some(src) => src
            .count()
            .await
            .map_err(|source| PaginationError::SourceUnavailable { source })?,
    };

    let metadata = PageMetadata::compute(total_item_count, page_number, page_size)?;

    // An absent source never reaches the production step; a present source
    // runs it even on an empty window.
    let items = match source {
        Some(src) => {
            let extracted = extract_page(src, &metadata).await?;
            produce(extracted)?
        }
        None => Vec::new(),
    };

    Ok(PagedList::new(metadata, items))
}
