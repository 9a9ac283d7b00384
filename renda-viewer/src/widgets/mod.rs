pub mod pagination;

pub use pagination::pagination;
