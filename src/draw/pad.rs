use tracing::debug;

use crate::{
    capture::{
        sampler::{PointSampler, RawPoint, with_velocity},
        stroke::{Stroke, StrokeStore},
    },
    draw::{config::PadConfig, painter::draw_segment, surface::Surface},
    foundation::{core::Point, error::SigResult},
    replay::engine::{ReplayEngine, ReplayStep, ReplayToken},
};

/// Pointer sample delivered by the host, in surface-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Device pointer identifier.
    pub pointer_id: u64,
    /// Surface-local x.
    pub x: f64,
    /// Surface-local y.
    pub y: f64,
    /// Monotonic timestamp in milliseconds.
    pub t: f64,
}

impl PointerEvent {
    /// Event for `pointer_id` at `(x, y)` and time `t`.
    pub fn new(pointer_id: u64, x: f64, y: f64, t: f64) -> Self {
        Self { pointer_id, x, y, t }
    }

    fn raw(&self) -> RawPoint {
        RawPoint::new(self.x, self.y, self.t)
    }
}

/// External controls of a drawing component.
pub trait PadCommands {
    /// Wipe the surface and forget every stroke. Cancels any replay.
    fn clear(&mut self);

    /// Redraw the captured strokes from scratch, starting at `now_ms`.
    ///
    /// Returns the token to pass to subsequent ticks, or `None` when there is nothing to
    /// replay (in which case an in-flight replay keeps running).
    fn replay(&mut self, now_ms: f64) -> Option<ReplayToken>;
}

#[derive(Debug, Default)]
struct PadState {
    store: StrokeStore,
    captured: Option<u64>,
    last_midpoint: Option<Point>,
    replay: ReplayEngine,
}

/// Interactive signature canvas: pointer capture, live velocity-sensitive ink, and replay.
///
/// All session state lives in one owned value; the surface is written by exactly one of live
/// drawing, replay, or clear at any time.
#[derive(Debug)]
pub struct SignaturePad<S: Surface> {
    surface: S,
    config: PadConfig,
    sampler: PointSampler,
    state: PadState,
}

impl<S: Surface> SignaturePad<S> {
    /// Pad drawing onto `surface`.
    pub fn new(surface: S, config: PadConfig) -> SigResult<Self> {
        config.validate()?;
        Ok(Self {
            surface,
            sampler: PointSampler::new(config.min_distance),
            config,
            state: PadState::default(),
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    /// Toggle the ghost stroke for subsequent segments.
    pub fn set_ghost(&mut self, enabled: bool) {
        self.config.ghost.enabled = enabled;
    }

    /// Paint target.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable paint target.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Strokes captured so far, including one still being drawn.
    pub fn strokes(&self) -> &[Stroke] {
        self.state.store.strokes()
    }

    /// Deep copy of the captured strokes.
    pub fn snapshot(&self) -> Vec<Stroke> {
        self.state.store.snapshot()
    }

    /// Replace the session with previously captured strokes without drawing them.
    pub fn load_strokes(&mut self, strokes: Vec<Stroke>) {
        self.state.replay.cancel();
        self.state.captured = None;
        self.state.last_midpoint = None;
        self.state.store.replace(strokes);
    }

    /// Whether a pointer is captured and drawing.
    pub fn is_drawing(&self) -> bool {
        self.state.captured.is_some()
    }

    /// Whether a replay is in flight.
    pub fn is_replaying(&self) -> bool {
        self.state.replay.is_replaying()
    }

    /// Pointer pressed: cancel any replay, capture the pointer and start a stroke.
    pub fn pointer_down(&mut self, event: PointerEvent) {
        self.state.replay.cancel();
        self.state.store.seal();
        self.state.captured = Some(event.pointer_id);
        self.state.last_midpoint = None;
        self.state.store.begin(with_velocity(event.raw(), None));
    }

    /// Pointer moved. Returns `true` when the sample was accepted and drawn.
    ///
    /// Moves are ignored unless they come from the captured pointer, and samples closer than
    /// the minimum distance to the last accepted one are dropped.
    pub fn pointer_move(&mut self, event: PointerEvent) -> bool {
        if self.state.captured != Some(event.pointer_id) {
            return false;
        }
        let Some(last) = self.state.store.open_stroke().and_then(Stroke::last).copied() else {
            return false;
        };
        let Some(point) = self.sampler.sample(event.raw(), Some(&last)) else {
            return false;
        };

        self.state.store.push(point);
        self.state.last_midpoint = Some(draw_segment(
            &mut self.surface,
            &self.config,
            &last,
            &point,
            self.state.last_midpoint,
        ));
        true
    }

    /// Pointer released. Seals the stroke and returns a snapshot of every stroke.
    pub fn pointer_up(&mut self, event: PointerEvent) -> Option<Vec<Stroke>> {
        self.end_stroke(event)
    }

    /// Pointer lost (e.g. the gesture was taken over). Same as release.
    pub fn pointer_cancel(&mut self, event: PointerEvent) -> Option<Vec<Stroke>> {
        self.end_stroke(event)
    }

    fn end_stroke(&mut self, event: PointerEvent) -> Option<Vec<Stroke>> {
        if self.state.captured != Some(event.pointer_id) {
            return None;
        }
        self.state.captured = None;
        self.state.store.seal();
        debug!(
            strokes = self.state.store.len(),
            points = self.state.store.strokes().last().map_or(0, Stroke::len),
            "stroke sealed"
        );
        Some(self.state.store.snapshot())
    }

    /// Advance the replay identified by `token` to `now_ms`.
    pub fn tick(&mut self, token: ReplayToken, now_ms: f64) -> ReplayStep {
        self.state
            .replay
            .tick(token, now_ms, &self.config, &mut self.surface)
    }
}

impl<S: Surface> PadCommands for SignaturePad<S> {
    fn clear(&mut self) {
        self.surface.clear();
        self.state.store.clear();
        self.state.captured = None;
        self.state.last_midpoint = None;
        self.state.replay.cancel();
        debug!("pad cleared");
    }

    fn replay(&mut self, now_ms: f64) -> Option<ReplayToken> {
        self.state.store.seal();
        self.state
            .replay
            .start(self.state.store.strokes(), now_ms, &mut self.surface)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/pad.rs"]
mod tests;
