pub mod error;
pub mod fixed_income;
pub mod loading;
pub mod product_row;

pub use error::*;
pub use fixed_income::*;
pub use loading::*;
