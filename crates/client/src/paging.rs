//! Page/limit pair sent with every paginated listing.

use hostelvoice_core::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub page: u32,
    pub limit: u32,
}

impl Paging {
    #[must_use]
    pub const fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// First page at the given size.
    #[must_use]
    pub const fn first(limit: u32) -> Self {
        Self { page: DEFAULT_PAGE, limit }
    }

    pub(crate) fn to_query(self) -> Vec<(&'static str, String)> {
        vec![("page", self.page.to_string()), ("limit", self.limit.to_string())]
    }
}

impl Default for Paging {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, limit: DEFAULT_PAGE_SIZE }
    }
}
