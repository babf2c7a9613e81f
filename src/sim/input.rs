//! Per-tick input snapshot.
//!
//! Key events set and clear flags elsewhere; the simulation only ever reads
//! the latest snapshot once per tick. Input is sampled, not queued.

/// Pressed-state of the three logical controls for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputSnapshot {
    /// Snapshot with nothing pressed.
    pub const IDLE: Self = Self {
        left: false,
        right: false,
        jump: false,
    };
}
