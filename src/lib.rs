pub mod error;
pub mod filter;
pub mod math;

pub use error::{FilterError, Result};
