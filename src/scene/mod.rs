/// Sampling a scene at an instant.
pub mod frame;
/// Scene graph and builder.
pub mod model;
/// Clock-driven playback.
pub mod player;
/// Frame rasterization.
pub mod raster;
