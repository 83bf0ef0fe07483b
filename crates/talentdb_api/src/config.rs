//! API configuration.

use talentdb_core::{sync, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Configuration for the API handlers.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Page size when a listing request carries no limit.
    pub default_page_size: usize,
    /// Ceiling for a caller-supplied limit.
    pub max_page_size: usize,
    /// Cap on the vacancy lookup-by-title scan.
    pub title_scan_limit: usize,
}

impl ApiConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            title_scan_limit: sync::DEFAULT_TITLE_SCAN_LIMIT,
        }
    }

    /// Sets the default page size.
    #[must_use]
    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    /// Sets the maximum page size.
    #[must_use]
    pub fn with_max_page_size(mut self, size: usize) -> Self {
        self.max_page_size = size;
        self
    }

    /// Sets the title scan cap.
    #[must_use]
    pub fn with_title_scan_limit(mut self, limit: usize) -> Self {
        self.title_scan_limit = limit;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new()
    }
}
