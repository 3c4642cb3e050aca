/// Sampling and ink constants.
pub mod config;
/// Pointer-driven signature pad.
pub mod pad;
/// Segment geometry and ink for live drawing.
pub mod painter;
/// CPU raster surface.
pub mod raster;
/// Paint target abstraction.
pub mod surface;
