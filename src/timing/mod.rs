/// Weighted back-to-back schedule.
pub mod schedule;
