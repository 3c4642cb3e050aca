/// Replay state machine.
pub mod engine;
