//! Page selection for list endpoints.
//!
//! `?page=&per_page=` arrive as loose numbers; `Pagination` turns them into
//! the row offset and limit a repository query takes.

/// Requested page of a collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based; 0 is read as 1
    pub page: u32,
    /// rows per page, clamped to `1..=MAX_PER_PAGE`
    pub per_page: u32,
}

impl Pagination {
    pub const MAX_PER_PAGE: u32 = 100;

    /// Zero-based page index and clamped page size.
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, Self::MAX_PER_PAGE);
        ((page - 1) as u64, per_page as u64)
    }

    /// `(offset, limit)` for `find_page`.
    pub fn offset_limit(self) -> (u64, u64) {
        let (page_idx, per_page) = self.normalize();
        (page_idx * per_page, per_page)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: 20 } }
}
