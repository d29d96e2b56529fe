//! Frame clock - converts host timestamps into tick deltas
//!
//! Hosts that schedule frames with an absolute timestamp (milliseconds since
//! some epoch) feed it through [`FrameClock::frame`] to get the elapsed time
//! for [`Session::tick`](crate::session::Session::tick). The first frame
//! after construction or [`FrameClock::reset`] yields zero, so a game start
//! never inherits the time spent before it.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameClock {
    last_ms: Option<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    /// Record a frame at `now_ms` and return the milliseconds since the
    /// previous one. Timestamps that go backwards yield zero.
    pub fn frame(&mut self, now_ms: u64) -> u32 {
        let delta = match self.last_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => 0,
        };
        self.last_ms = Some(now_ms);
        u32::try_from(delta).unwrap_or(u32::MAX)
    }

    /// Forget the previous frame.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
