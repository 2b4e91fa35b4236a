use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 12;

/// 1-based page selection. Both values are clamped to at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn first(page_size: usize) -> Self {
        Self::new(1, page_size)
    }

    pub const fn page(&self) -> usize {
        self.page
    }

    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
}

/// Slices one page out of `items`. Pages past the end come back empty.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let total_pages = request.total_pages(items.len());
    let start = (request.page - 1).saturating_mul(request.page_size);
    let end = start.saturating_add(request.page_size).min(items.len());

    let items = if start >= items.len() {
        Vec::new()
    } else {
        items[start..end].to_vec()
    };

    Page { items, total_pages }
}
