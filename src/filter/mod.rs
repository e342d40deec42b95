//! Data-series filters applied before rendering.

pub mod douglas_peucker;

pub use douglas_peucker::{reduce, reduce_flat, reduce_indices};
