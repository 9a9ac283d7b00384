//! Core data model definitions shared across Renda crates.
#![allow(missing_docs)]

pub mod error;
pub mod holding;
pub mod money;
pub mod paging;
pub mod prelude;
pub mod sort;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use holding::{Due, FixedIncome, Holding, Position, ProductId};
pub use paging::{PageWindow, PRODUCTS_PER_PAGE};
pub use sort::SortKey;
