use serde::Serialize;

/// Page size used by every paginated listing.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Number of page links shown on each side of the current page.
const PAGE_WINDOW: usize = 2;

/// Requested page (1-based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Row offset for SQL `OFFSET`. Pages below 1 are treated as the first page
    /// and offsets beyond `i64::MAX` are clamped.
    pub fn offset(&self) -> i64 {
        let rows = (self.page.max(1) - 1).saturating_mul(self.per_page);
        i64::try_from(rows).unwrap_or(i64::MAX)
    }

    /// Row count for SQL `LIMIT`.
    pub fn limit(&self) -> i64 {
        i64::try_from(self.per_page).unwrap_or(i64::MAX)
    }
}

/// A page of items plus the page links a client can render.
///
/// `pages` lists page numbers around the current one; `None` marks a gap.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub pages: Vec<Option<usize>>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, total_pages: usize) -> Self {
        Self {
            items,
            page,
            total_pages,
            pages: page_links(page, total_pages),
        }
    }
}

fn page_links(current: usize, total_pages: usize) -> Vec<Option<usize>> {
    let mut links = Vec::new();
    let mut previous = 0;

    for page in 1..=total_pages {
        let near_current =
            page.saturating_add(PAGE_WINDOW) >= current && page <= current.saturating_add(PAGE_WINDOW);
        if page == 1 || page == total_pages || near_current {
            if previous != 0 && page > previous + 1 {
                links.push(None);
            }
            links.push(Some(page));
            previous = page;
        }
    }

    links
}
