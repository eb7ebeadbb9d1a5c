//! Client-side filter, sort and pagination for the admin tables.
//!
//! Tables hold the full row set in memory; each render derives the visible
//! page from a [`TableQuery`].

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::cmp::Ordering;

use super::config::PAGE_SIZE;

/// Category value meaning "no category filter".
pub fn is_all_category(category: &str) -> bool {
    let category = category.trim();
    category.is_empty() || category.eq_ignore_ascii_case("todos") || category.eq_ignore_ascii_case("all")
}

/// Sortable cell value.
#[derive(Clone, Debug, PartialEq)]
pub enum SortValue {
    Number(f64),
    Text(String),
}

impl SortValue {
    /// Numeric cell parsed from free text, `0` when it is not a number.
    pub fn number_from(raw: &str) -> Self {
        Self::Number(raw.trim().parse().unwrap_or(0.0))
    }

    pub fn text(raw: &str) -> Self {
        Self::Text(raw.to_lowercase())
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

/// A row that can be searched, categorised and sorted.
pub trait TableRow {
    /// Text fields the search box matches against.
    fn search_fields(&self) -> Vec<&str>;

    fn category(&self) -> Option<&str> {
        None
    }

    /// Value for sort column `key`; unknown keys sort as empty text.
    fn sort_value(&self, key: &str) -> SortValue;
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableQuery {
    pub search: String,
    pub category: String,
    pub sort: Option<(String, SortDir)>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self { search: String::new(), category: "todos".to_owned(), sort: None, page: 1, page_size: PAGE_SIZE }
    }
}

impl TableQuery {
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    pub fn set_category(&mut self, category: String) {
        self.category = category;
        self.page = 1;
    }

    /// Clicking the active column flips direction; a new column sorts ascending.
    pub fn toggle_sort(&mut self, key: &str) {
        self.sort = match self.sort.take() {
            Some((current, dir)) if current == key => Some((current, dir.toggled())),
            _ => Some((key.to_owned(), SortDir::Asc)),
        };
    }

    pub fn sort_arrow(&self, key: &str) -> &'static str {
        match &self.sort {
            Some((current, dir)) if current == key => dir.arrow(),
            _ => "",
        }
    }
}

/// One rendered page of a table.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Current page, 1-based, already clamped.
    pub page: usize,
    pub total_pages: usize,
    /// Row count after filtering.
    pub total: usize,
}

pub fn matches_search<R: TableRow>(row: &R, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    needle.is_empty() || row.search_fields().iter().any(|field| field.to_lowercase().contains(&needle))
}

pub fn matches_category<R: TableRow>(row: &R, category: &str) -> bool {
    is_all_category(category) || row.category().is_some_and(|c| c.eq_ignore_ascii_case(category.trim()))
}

/// Stable sort by column `key`.
pub fn sort_rows<R: TableRow>(rows: &mut [&R], key: &str, dir: SortDir) {
    rows.sort_by(|a, b| {
        let ord = a.sort_value(key).compare(&b.sort_value(key));
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
}

/// `ceil(total / size)`, never less than one page.
pub fn total_pages(total: usize, size: usize) -> usize {
    if size == 0 { 1 } else { total.div_ceil(size).max(1) }
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Filter, sort and slice `rows` according to `query`.
pub fn apply<R: TableRow + Clone>(rows: &[R], query: &TableQuery) -> Page<R> {
    let mut visible: Vec<&R> =
        rows.iter().filter(|r| matches_search(*r, &query.search) && matches_category(*r, &query.category)).collect();
    if let Some((key, dir)) = &query.sort {
        sort_rows(&mut visible, key, *dir);
    }
    let total = visible.len();
    let size = query.page_size.max(1);
    let total_pages = total_pages(total, size);
    let page = clamp_page(query.page, total_pages);
    let items = visible.into_iter().skip((page - 1) * size).take(size).cloned().collect();
    Page { items, page, total_pages, total }
}

/// Page numbers to show in the pager: at most `width` consecutive pages
/// centred on `current`.
pub fn page_window(current: usize, total_pages: usize, width: usize) -> Vec<usize> {
    let total_pages = total_pages.max(1);
    let width = width.clamp(1, total_pages);
    let current = clamp_page(current, total_pages);
    let start = current.saturating_sub(width / 2).max(1).min(total_pages + 1 - width);
    (start..start + width).collect()
}
