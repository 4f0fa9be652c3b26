//! Pagination stage
//!
//! Pages are 1-based. `paginate` never clamps: asking for a page past the end
//! yields an empty slice, and callers clamp with [`clamp_page`].

use crate::constants::MAX_PAGE_BUTTONS;

/// Number of pages for `count` rows, never less than one
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// Rows `[(page-1)*size, page*size)` of the slice, cut at its end
pub fn paginate<T>(rows: &[T], page_size: usize, page: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

/// Clamp a requested page into `[1, total_pages]`
pub fn clamp_page(page: usize, count: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(count, page_size))
}

/// 1-based "Showing first to last of total" bounds of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl PageRange {
    pub fn label(&self) -> String {
        format!("Showing {} to {} of {} results", self.first, self.last, self.total)
    }
}

pub fn page_range(count: usize, page_size: usize, page: usize) -> PageRange {
    let visible = paginate_len(count, page_size, page);
    if visible == 0 {
        return PageRange { first: 0, last: 0, total: count };
    }
    let first = (page - 1) * page_size + 1;
    PageRange { first, last: first + visible - 1, total: count }
}

fn paginate_len(count: usize, page_size: usize, page: usize) -> usize {
    if page == 0 || page_size == 0 {
        return 0;
    }
    let start = (page - 1).saturating_mul(page_size);
    count.saturating_sub(start).min(page_size)
}

/// Numbered pager buttons: up to five pages starting two before the current one
pub fn page_buttons(current: usize, total: usize) -> Vec<usize> {
    let start = current.saturating_sub(2).max(1);
    (start..start + MAX_PAGE_BUTTONS.min(total))
        .filter(|page| *page <= total)
        .collect()
}
