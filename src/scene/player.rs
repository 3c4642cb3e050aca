use crate::scene::{frame::SceneFrame, model::PreviewScene};

/// Drives a [`PreviewScene`] from a host clock in milliseconds.
///
/// Restarting re-keys the scene and moves the clock origin, so the next frame starts from
/// time zero with nothing carried over from the previous run.
#[derive(Clone, Debug)]
pub struct PreviewPlayer {
    scene: PreviewScene,
    origin_ms: f64,
}

impl PreviewPlayer {
    /// Player whose animation starts at `now_ms`.
    pub fn new(scene: PreviewScene, now_ms: f64) -> Self {
        Self {
            scene,
            origin_ms: now_ms,
        }
    }

    /// Scene being played.
    pub fn scene(&self) -> &PreviewScene {
        &self.scene
    }

    /// Swap in a rebuilt scene and restart it.
    pub fn replace(&mut self, mut scene: PreviewScene, now_ms: f64) {
        scene.replay_key = self.scene.replay_key + 1;
        self.scene = scene;
        self.origin_ms = now_ms;
    }

    /// Play again from the beginning. Returns the new replay key.
    pub fn restart(&mut self, now_ms: f64) -> u64 {
        self.scene.replay_key += 1;
        self.origin_ms = now_ms;
        self.scene.replay_key
    }

    /// Current replay key.
    pub fn replay_key(&self) -> u64 {
        self.scene.replay_key
    }

    /// Scene state at `now_ms`.
    pub fn frame_at(&self, now_ms: f64) -> SceneFrame<'_> {
        SceneFrame::new(&self.scene, (now_ms - self.origin_ms) / 1000.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/player.rs"]
mod tests;
