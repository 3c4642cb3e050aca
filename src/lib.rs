//! Signature capture to animated SVG.
//!
//! Pointer samples are gated and annotated with velocity, smoothed into midpoint quadratics
//! for live ink, stored as strokes, converted to SVG path data with a view window, scheduled
//! across a fixed total duration, and then either replayed on a drawing surface, sampled as an
//! in-memory preview scene, or emitted as a `motion/react` component. Typed names follow the
//! same route through glyph outlines.
//!
//! # Pipeline overview
//!
//! 1. **Capture**: `PointerEvent -> StrokePoint` (distance gate, velocity) into a [`StrokeStore`]
//! 2. **Convert**: `[Stroke] | GlyphSet -> Signature` (path data, weights, [`ViewBox`])
//! 3. **Schedule**: `Signature + total -> [TimingEntry]` (back-to-back, rounded to 3 decimals)
//! 4. **Consume**: [`ReplayEngine`] on a [`Surface`], [`PreviewScene`] sampling, or
//!    [`generate_motion_component`] text
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Animation primitives.
pub mod animation;
/// Pointer sampling, smoothing, and the stroke store.
pub mod capture;
/// Session configuration and stroke files.
pub mod config;
/// Drawing surfaces, live ink, and the signature pad.
pub mod draw;
/// Component text generation.
pub mod export;
/// Foundation types and error model.
pub mod foundation;
/// Font outlines for typed signatures.
pub mod glyph;
/// Stroke to path conversion and view windows.
pub mod path;
/// Time-faithful stroke replay.
pub mod replay;
/// Live preview scene.
pub mod scene;
/// Pipeline hand-off model.
pub mod signature;
/// Per-path timing.
pub mod timing;

pub use animation::ease::Ease;
pub use capture::{
    sampler::{PointSampler, RawPoint, StrokePoint},
    smoothing::midpoint,
    stroke::{Stroke, StrokeStore},
};
pub use config::{SessionConfig, strokes_from_path, strokes_from_reader};
pub use draw::{
    config::{GhostStyle, PadConfig},
    pad::{PadCommands, PointerEvent, SignaturePad},
    raster::PixmapSurface,
    surface::{Ink, RecordingSurface, Segment, Surface, SurfaceOp},
};
pub use export::{motion::generate_motion_component, options::ExportOptions};
pub use foundation::core::{BezPath, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{SigError, SigResult};
pub use glyph::{
    library::FontLibrary,
    outline::{GlyphSet, OutlineOptions, SplitMode, outline_text},
    request::{ConversionRequest, TextConversion},
};
pub use path::{
    bounds::{Bounds, ViewBox, get_bounds},
    convert::{stroke_to_path, strokes_to_paths},
};
pub use replay::engine::{ReplayEngine, ReplayStep, ReplayToken, replay_to_end};
pub use scene::{
    frame::{RevealState, SceneFrame},
    model::{PreviewScene, SceneNode, Wipe},
    player::PreviewPlayer,
    raster::{rasterize_frame, save_frame_png},
};
pub use signature::{AnimationMode, InputMode, Signature, SignaturePath};
pub use timing::schedule::{TimingEntry, WeightStrategy, build_timing, stroke_weights};
