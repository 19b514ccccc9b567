use paged_list_api::{PaginationError, PaginationResult};
use serde::{Deserialize, Serialize};

/// Pagination metadata for one page of a larger collection
///
/// Derived entirely from `(total_item_count, page_number, page_size)` by
/// [`PageMetadata::compute`]; no field is ever written after construction.
///
/// # Example
/// ```
/// use paged_list_core::models::metadata::PageMetadata;
///
/// let meta = PageMetadata::compute(10, 4, 3).unwrap();
/// assert_eq!(meta.page_count, 4);
/// assert_eq!(meta.first_item_on_page, 10);
/// assert_eq!(meta.last_item_on_page, 10);
/// assert!(meta.is_last_page);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Count of all items in the underlying collection at the time of the
    /// count read, or 0 if the source was absent
    pub total_item_count: u64,
    /// Requested window size (at least 1)
    pub page_size: u64,
    /// Requested 1-based page index (at least 1)
    pub page_number: u64,
    /// Total number of pages; 0 when the collection is empty
    pub page_count: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub is_first_page: bool,
    /// True whenever `page_number >= page_count`, including `page_count == 0`:
    /// an out-of-range page on a short or empty collection is still "the last
    /// page", not an error
    pub is_last_page: bool,
    /// 1-based index of the first item on this page within the whole collection
    pub first_item_on_page: u64,
    /// 1-based index of the last item on this page, clamped down to
    /// `total_item_count`; less than `first_item_on_page` means the page is empty
    pub last_item_on_page: u64,
}

/// Reject page arguments below 1, naming the offending parameter
///
/// Shared by [`PageMetadata::compute`] and the paginator façade, which must
/// fail fast before any source I/O.
pub fn validate_page_args(page_number: u64, page_size: u64) -> PaginationResult<()> {
    if page_number < 1 {
        return Err(PaginationError::InvalidArgument {
            parameter: "page_number",
            value: page_number,
        });
    }
    if page_size < 1 {
        return Err(PaginationError::InvalidArgument {
            parameter: "page_size",
            value: page_size,
        });
    }
    Ok(())
}

impl PageMetadata {
    /// Compute the full metadata record for one page
    ///
    /// Pure function, no I/O.
    ///
    /// # Arguments
    /// * `total_item_count` - Item count reported by the source (0 for an absent source)
    /// * `page_number` - Requested page, 1-based
    /// * `page_size` - Requested window size
    ///
    /// # Returns
    /// * `Ok(PageMetadata)` - The derived metadata
    /// * `Err(PaginationError::InvalidArgument)` - If `page_number` or `page_size` is 0
    pub fn compute(
        total_item_count: u64,
        page_number: u64,
        page_size: u64,
    ) -> PaginationResult<Self> {
        validate_page_args(page_number, page_size)?;

        // div_ceil is an exact integer ceiling, so a total that is an exact
        // multiple of the page size does not undercount by one.
        let page_count = if total_item_count > 0 {
            total_item_count.div_ceil(page_size)
        } else {
            0
        };

        let first_item_on_page = (page_number - 1) * page_size + 1;
        // Clamped down to the total, never up: first > total leaves
        // last <= first, which callers read as "no items on this page".
        let last_item_on_page = (first_item_on_page + page_size - 1).min(total_item_count);

        Ok(Self {
            total_item_count,
            page_size,
            page_number,
            page_count,
            has_previous_page: page_number > 1,
            has_next_page: page_number < page_count,
            is_first_page: page_number == 1,
            is_last_page: page_number >= page_count,
            first_item_on_page,
            last_item_on_page,
        })
    }

    /// Number of items this page holds according to the metadata alone
    /// (`last - first + 1`, floored at 0)
    pub fn items_on_page(&self) -> u64 {
        self.last_item_on_page
            .saturating_sub(self.first_item_on_page - 1)
    }

    /// Number of items to skip before this page's window
    pub fn skip_count(&self) -> u64 {
        (self.page_number - 1) * self.page_size
    }
}
