/// List shaping for the popup: search filtering and paging
use crate::favorite::{Favorite, FavoritesList};

/// One page of favorites
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<Favorite>,
    /// 1-based, clamped into `1..=total_pages`
    pub page: usize,
    /// Never less than 1, even for an empty list
    pub total_pages: usize,
}

impl Page {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Keep favorites whose title or URL contains `query`, case-insensitively
pub fn filter_favorites(list: &FavoritesList, query: &str) -> Vec<Favorite> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return list.iter().cloned().collect();
    }

    list.iter()
        .filter(|f| {
            f.title.to_lowercase().contains(&needle) || f.url.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Slice out page `page` (1-based) of `page_size` items
pub fn paginate(items: &[Favorite], page: usize, page_size: usize) -> Page {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let items = items
        .iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    Page {
        items,
        page,
        total_pages,
    }
}
