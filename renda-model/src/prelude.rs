//! Viewer-focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes
//! when working in renda-viewer or other presentation layers.

pub use super::error::{ModelError, Result as ModelResult};
pub use super::holding::{Due, FixedIncome, Holding, Position, ProductId};
pub use super::money::{format_brl, format_days, format_percent};
#[cfg(feature = "chrono")]
pub use super::money::format_date;
pub use super::paging::{page_count, PageWindow, PRODUCTS_PER_PAGE};
pub use super::sort::SortKey;
