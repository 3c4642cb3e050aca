/// Bounds and view windows.
pub mod bounds;
/// Stroke to path data.
pub mod convert;
