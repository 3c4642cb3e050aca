/// Velocity annotation and the minimum-distance gate.
pub mod sampler;
/// Midpoint smoothing.
pub mod smoothing;
/// Strokes and the session stroke store.
pub mod stroke;
