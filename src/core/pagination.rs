/// Rows per page in the work history and the todo list.
pub const PAGE_SIZE: usize = 8;

/// One page of an already filtered and ordered list.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// 1-based, after clamping.
    pub number: usize,
    /// Never 0: an empty list still has one (empty) page.
    pub total_pages: usize,
    pub items: &'a [T],
}

impl<T> Page<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Slice `items` into page `requested` (1-based). Out-of-range requests are
/// clamped to the first or last page instead of failing.
pub fn paginate<T>(items: &[T], requested: usize) -> Page<'_, T> {
    let total_pages = items.len().div_ceil(PAGE_SIZE).max(1);
    let number = requested.clamp(1, total_pages);

    let start = (number - 1) * PAGE_SIZE;
    let end = (number * PAGE_SIZE).min(items.len());

    Page {
        number,
        total_pages,
        items: &items[start.min(end)..end],
    }
}
