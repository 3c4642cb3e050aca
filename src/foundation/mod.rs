/// Geometry re-exports and colors.
pub mod core;
/// Error model.
pub mod error;
/// Fixed-point number formatting.
pub mod fixed;
