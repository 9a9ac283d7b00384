//! Application state and the derived holdings views.

use renda_model::prelude::{
    Holding, PRODUCTS_PER_PAGE, PageWindow, SortKey,
};

use crate::api_client::ApiClient;

/// Top-level state for the viewer.
///
/// The product list is owned by the data layer (fetched whole from the
/// API); search, sort, and page are independent pieces of UI state.
/// Changing one never resets another: the search text survives sort
/// and page changes, and the current page is not clamped when a
/// narrower search shrinks the result set, so an out-of-range page
/// legitimately renders empty.
pub struct State {
    pub api_client: ApiClient,

    /// Externally owned source of truth; never mutated by the view
    /// logic, only filtered/sorted/sliced into derived views.
    pub products: Vec<Holding>,
    pub loading: bool,
    pub error_message: Option<String>,

    // Filter / sort / page UI state
    pub search_query: String,
    pub sort_by: Option<SortKey>,
    /// 1-based page number.
    pub current_page: usize,
}

impl State {
    pub fn new(api_client: ApiClient) -> Self {
        Self {
            api_client,
            products: Vec::new(),
            loading: true,
            error_message: None,
            search_query: String::new(),
            sort_by: None,
            current_page: 1,
        }
    }

    /// Count of holdings matching the current search, before slicing.
    ///
    /// This is what the pagination control sees as the total, so the
    /// page count tracks filtering and is independent of sort order.
    pub fn filtered_count(&self) -> usize {
        self.products
            .iter()
            .filter(|p| p.matches_search(&self.search_query))
            .count()
    }

    /// The holdings visible on the current page: filter, then sort,
    /// then slice.
    ///
    /// When no sort key is selected the sort step is skipped outright,
    /// so the source order is preserved without leaning on sort
    /// stability.
    pub fn visible_products(&self) -> Vec<&Holding> {
        let mut filtered: Vec<&Holding> = self
            .products
            .iter()
            .filter(|p| p.matches_search(&self.search_query))
            .collect();

        if let Some(key) = self.sort_by {
            filtered.sort_by(|a, b| key.compare(a, b));
        }

        let window =
            PageWindow::for_page(self.current_page, PRODUCTS_PER_PAGE);
        window.slice(&filtered).to_vec()
    }
}
