//! Short-lived on-screen notices driven by session events.
//!
//! The session only reports what happened; how long a banner stays up is a
//! presentation concern and lives here.

use crate::core::SessionEvent;
use crate::types::CLEAR_BANNER_MS;

/// What the game view should overlay this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoticeView {
    /// Rows were just cleared.
    pub clear_banner: bool,
    /// The last game ended with this score.
    pub final_score: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct Notices {
    banner_ms: u32,
    final_score: Option<u32>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, event: &SessionEvent) {
        match *event {
            SessionEvent::Started => {
                self.banner_ms = 0;
                self.final_score = None;
            }
            SessionEvent::LinesCleared { .. } => self.banner_ms = CLEAR_BANNER_MS,
            SessionEvent::GameOver { final_score } => {
                self.banner_ms = 0;
                self.final_score = Some(final_score);
            }
            SessionEvent::PieceLocked { .. } | SessionEvent::Stopped => {}
        }
    }

    /// Age the banner by `elapsed_ms`.
    pub fn update(&mut self, elapsed_ms: u32) {
        self.banner_ms = self.banner_ms.saturating_sub(elapsed_ms);
    }

    pub fn view(&self) -> NoticeView {
        NoticeView {
            clear_banner: self.banner_ms > 0,
            final_score: self.final_score,
        }
    }
}
