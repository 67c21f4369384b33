//! Slicing a filtered sequence into pages.

/// One page of a filtered sequence.
///
/// `start_index` is inclusive, `end_index` exclusive, both relative to the
/// filtered sequence (for "showing X–Y of Z" rendering).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// The page actually served, after clamping.
    pub page: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Slice `items` into the requested page.
///
/// `page` is clamped to `[1, total_pages]`; an empty sequence still reports
/// one (empty) page so callers always have a valid page number to render.
/// A zero `page_size` is treated as 1.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let start_index = (page - 1) * page_size;
    let end_index = (start_index + page_size).min(total_items);

    Page {
        items: &items[start_index..end_index],
        page,
        start_index,
        end_index,
        total_pages,
        total_items,
    }
}
