use tracing::debug;

use crate::{
    capture::stroke::Stroke,
    draw::{config::PadConfig, painter::draw_segment, surface::Surface},
    foundation::core::Point,
};

/// Generation captured when a replay starts. Ticks carrying an older token are inert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken(u64);

impl ReplayToken {
    /// Generation number this token was issued for.
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Outcome of one replay tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayStep {
    /// More points remain; tick again on the next frame.
    Running,
    /// Every stroke has been redrawn.
    Finished,
    /// The token was superseded; nothing was drawn.
    Stale,
}

#[derive(Clone, Debug)]
struct ReplayRun {
    strokes: Vec<Stroke>,
    stroke_index: usize,
    point_index: usize,
    last_midpoint: Option<Point>,
    stroke_started: Option<f64>,
}

impl ReplayRun {
    fn next_stroke(&mut self) {
        self.stroke_index += 1;
        self.point_index = 1;
        self.last_midpoint = None;
        self.stroke_started = None;
    }

    /// Draw everything due at `now`. Returns `true` once the last stroke is complete.
    fn advance<S: Surface + ?Sized>(&mut self, now: f64, config: &PadConfig, surface: &mut S) -> bool {
        loop {
            let Some(stroke) = self.strokes.get(self.stroke_index) else {
                return true;
            };
            if stroke.len() < 2 {
                self.next_stroke();
                continue;
            }

            let started = *self.stroke_started.get_or_insert(now);
            let elapsed = now - started;
            let base = stroke.points[0].t;

            while let Some(point) = stroke.points.get(self.point_index) {
                let offset = point.t - base;
                if offset.is_finite() && offset > elapsed {
                    break;
                }
                let last = &stroke.points[self.point_index - 1];
                self.last_midpoint = Some(draw_segment(
                    surface,
                    config,
                    last,
                    point,
                    self.last_midpoint,
                ));
                self.point_index += 1;
            }

            if self.point_index < stroke.len() {
                return false;
            }
            self.next_stroke();
        }
    }
}

/// Time-faithful redraw of captured strokes, cancellable through a generation counter.
///
/// Strokes play one after another in order of their first timestamp. Inside a stroke every
/// point whose offset from the stroke's first sample has elapsed is drawn on the next tick, so
/// relative timing holds at any frame rate.
#[derive(Clone, Debug, Default)]
pub struct ReplayEngine {
    generation: u64,
    run: Option<ReplayRun>,
}

impl ReplayEngine {
    /// Idle engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a replay is in flight.
    pub fn is_replaying(&self) -> bool {
        self.run.is_some()
    }

    /// Invalidate every outstanding token and stop the current replay, if any.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if self.run.take().is_some() {
            debug!(generation = self.generation, "replay cancelled");
        }
    }

    /// Start replaying `strokes` at `now` (ms).
    ///
    /// Returns `None` without touching the surface or any in-flight replay when there is
    /// nothing to play. Otherwise the previous replay is cancelled and the surface cleared.
    pub fn start<S: Surface + ?Sized>(
        &mut self,
        strokes: &[Stroke],
        now: f64,
        surface: &mut S,
    ) -> Option<ReplayToken> {
        if strokes.is_empty() {
            return None;
        }

        let mut ordered = strokes.to_vec();
        ordered.sort_by(|a, b| {
            let at = a.start_time().unwrap_or(0.0);
            let bt = b.start_time().unwrap_or(0.0);
            at.total_cmp(&bt)
        });

        self.cancel();
        surface.clear();
        self.run = Some(ReplayRun {
            strokes: ordered,
            stroke_index: 0,
            point_index: 1,
            last_midpoint: None,
            stroke_started: Some(now),
        });
        debug!(
            generation = self.generation,
            strokes = strokes.len(),
            started_at = now,
            "replay started"
        );
        Some(ReplayToken(self.generation))
    }

    /// Advance the replay identified by `token` to `now` (ms).
    pub fn tick<S: Surface + ?Sized>(
        &mut self,
        token: ReplayToken,
        now: f64,
        config: &PadConfig,
        surface: &mut S,
    ) -> ReplayStep {
        if token.0 != self.generation {
            return ReplayStep::Stale;
        }
        let Some(run) = self.run.as_mut() else {
            return ReplayStep::Finished;
        };

        if run.advance(now, config, surface) {
            self.run = None;
            debug!(generation = self.generation, "replay finished");
            ReplayStep::Finished
        } else {
            ReplayStep::Running
        }
    }
}

/// Replay `strokes` to completion with a fixed frame interval, starting at time zero.
///
/// Returns the number of ticks taken.
pub fn replay_to_end<S: Surface + ?Sized>(
    strokes: &[Stroke],
    config: &PadConfig,
    frame_ms: f64,
    surface: &mut S,
) -> usize {
    let mut engine = ReplayEngine::new();
    let Some(token) = engine.start(strokes, 0.0, surface) else {
        return 0;
    };

    let frame_ms = if frame_ms.is_finite() && frame_ms > 0.0 {
        frame_ms
    } else {
        1000.0 / 60.0
    };

    let mut ticks = 0;
    let mut now = 0.0;
    loop {
        ticks += 1;
        if engine.tick(token, now, config, surface) != ReplayStep::Running {
            return ticks;
        }
        now += frame_ms;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/replay/engine.rs"]
mod tests;
