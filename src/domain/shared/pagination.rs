// src/domain/shared/pagination.rs
pub const DEFAULT_PAGE_INDEX: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// 1-based offset pagination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_index: u32,
    limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_index: DEFAULT_PAGE_INDEX,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(page_index: u32, limit: u32) -> Self {
        let page_index = if page_index < 1 {
            DEFAULT_PAGE_INDEX
        } else {
            page_index
        };
        let limit = if limit < 1 {
            DEFAULT_LIMIT
        } else {
            limit.min(MAX_LIMIT)
        };
        Self { page_index, limit }
    }

    /// Parses raw query values; anything missing, non-numeric or below 1 falls back to the default.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page_index = parse_positive(page).unwrap_or(DEFAULT_PAGE_INDEX);
        let limit = parse_positive(limit).unwrap_or(DEFAULT_LIMIT);
        Self::new(page_index, limit)
    }

    pub const fn page_index(&self) -> u32 {
        self.page_index
    }

    pub const fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page_index - 1) * u64::from(self.limit)
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.limit))
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| *value >= 1)
}

/// One page of entities plus the total row count behind it.
#[derive(Debug, Clone)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Paged<T> {
    pub const fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paged<U> {
        Paged {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}
