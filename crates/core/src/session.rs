//! Session module - one game from start to game over
//!
//! A [`Session`] owns its arena, the active piece, the score and the gravity
//! timer. It is a two-state machine:
//!
//! - **Stopped → Running** on [`Session::start`]: arena and score reset, first
//!   piece spawned, timers zeroed. Starting an already running session
//!   restarts it.
//! - **Running → Stopped** on [`Session::stop`] or on game over.
//!
//! Piece commands and ticks are ignored while stopped. Nothing here knows
//! about frames or wall-clock time; the host passes elapsed milliseconds to
//! [`Session::tick`].

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::arena::Arena;
use crate::config::{ConfigError, SessionConfig};
use crate::player::Player;
use crate::rng::{PieceSource, SimpleRng};
use crate::scoring::line_clear_score;
use crate::snapshot::{ActiveSnapshot, SessionSnapshot};
use crate::types::{GameAction, RotationDirection, Tetromino};

/// Pending events kept between two [`Session::take_events`] calls.
pub const EVENT_CAPACITY: usize = 8;

/// Things that happened inside the session that a front-end may want to
/// announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Started,
    PieceLocked { kind: Tetromino },
    /// Rows cleared by one landing, with the score after awarding them.
    LinesCleared { lines: u32, score: u32 },
    /// A freshly spawned piece collided; the arena and score were reset.
    GameOver { final_score: u32 },
    Stopped,
}

/// Events drained from a session.
pub type SessionEvents = ArrayVec<SessionEvent, EVENT_CAPACITY>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session<R = SimpleRng> {
    config: SessionConfig,
    arena: Arena,
    active: Option<Player>,
    pieces: R,
    score: u32,
    lines: u32,
    running: bool,
    drop_counter_ms: u32,
    events: SessionEvents,
}

impl Session<SimpleRng> {
    /// Stopped session with the default configuration, seeded RNG.
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl<R: PieceSource> Session<R> {
    /// Stopped session with the default configuration.
    pub fn with_source(pieces: R) -> Self {
        Self::build(SessionConfig::default(), pieces)
    }

    /// Stopped session with a validated configuration.
    pub fn with_config(config: SessionConfig, pieces: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, pieces))
    }

    fn build(config: SessionConfig, pieces: R) -> Self {
        Self {
            arena: Arena::new(config.width as usize, config.height as usize),
            config,
            active: None,
            pieces,
            score: 0,
            lines: 0,
            running: false,
            drop_counter_ms: 0,
            events: ArrayVec::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Mutable arena access, for puzzles and scripted setups.
    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    pub fn active(&self) -> Option<&Player> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.config.drop_interval_ms
    }

    /// Reset the arena and score, spawn the first piece and start running.
    ///
    /// If the very first spawn collides the session ends up stopped again.
    pub fn start(&mut self) {
        self.arena.clear();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.drop_counter_ms = 0;
        self.running = true;

        info!(
            width = self.arena.width(),
            height = self.arena.height(),
            drop_interval_ms = self.config.drop_interval_ms,
            "session started"
        );
        self.push_event(SessionEvent::Started);

        self.spawn_piece();
    }

    /// Halt a running session. The board is kept as it is.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        info!(score = self.score, "session stopped");
        self.push_event(SessionEvent::Stopped);
    }

    /// Advance the gravity timer. Returns true if a gravity step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.running {
            return false;
        }

        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms > self.config.drop_interval_ms {
            // drop_piece resets the counter
            self.drop_piece();
            return true;
        }

        false
    }

    /// Apply a game action. Returns true if the action changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if action.is_piece_command() && !self.running {
            return false;
        }

        match action {
            GameAction::Start => {
                self.start();
                true
            }
            GameAction::Stop => {
                let was_running = self.running;
                self.stop();
                was_running
            }
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::SoftDrop => {
                self.drop_piece();
                true
            }
            GameAction::RotateCw => self.rotate_piece(RotationDirection::Clockwise),
            GameAction::RotateCcw => self.rotate_piece(RotationDirection::CounterClockwise),
        }
    }

    /// Move the active piece one column. No kick: blocked moves are dropped.
    pub fn move_piece(&mut self, dx: i32) -> bool {
        if !self.running {
            return false;
        }
        match self.active.as_mut() {
            Some(player) => player.try_shift(&self.arena, dx, 0),
            None => false,
        }
    }

    /// Rotate the active piece, kicking sideways if needed.
    pub fn rotate_piece(&mut self, direction: RotationDirection) -> bool {
        if !self.running {
            return false;
        }
        match self.active.as_mut() {
            Some(player) => player.rotate(&self.arena, direction),
            None => false,
        }
    }

    /// Move the active piece one row down, locking it if it is blocked.
    ///
    /// Returns true if the piece moved, false if it locked (or nothing was
    /// active). The gravity timer restarts either way.
    pub fn drop_piece(&mut self) -> bool {
        if !self.running {
            return false;
        }

        let moved = match self.active.as_mut() {
            Some(player) => player.try_shift(&self.arena, 0, 1),
            None => false,
        };

        if !moved && self.active.is_some() {
            self.lock_piece();
        }

        self.drop_counter_ms = 0;
        moved
    }

    /// Merge the active piece, sweep full rows, award points, spawn the next piece.
    fn lock_piece(&mut self) {
        let Some(player) = self.active.take() else {
            return;
        };

        player.merge_into(&mut self.arena);
        debug!(kind = ?player.kind, x = player.x, y = player.y, "piece locked");
        self.push_event(SessionEvent::PieceLocked { kind: player.kind });

        let cleared = self.arena.sweep();
        if cleared > 0 {
            self.score = self.score.saturating_add(line_clear_score(cleared));
            self.lines = self.lines.saturating_add(cleared);
            info!(lines = cleared, score = self.score, "rows cleared");
            self.push_event(SessionEvent::LinesCleared {
                lines: cleared,
                score: self.score,
            });
        }

        self.spawn_piece();
    }

    /// Spawn a random piece at the top center. Ends the game if it collides.
    fn spawn_piece(&mut self) -> bool {
        let kind = self.pieces.next_piece();
        let player = Player::spawn(kind, self.arena.width());

        if player.collides(&self.arena) {
            self.game_over();
            return false;
        }

        debug!(kind = ?kind, x = player.x, "piece spawned");
        self.active = Some(player);
        true
    }

    fn game_over(&mut self) {
        let final_score = self.score;

        self.arena.clear();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.drop_counter_ms = 0;
        self.running = false;

        info!(final_score, "game over");
        self.push_event(SessionEvent::GameOver { final_score });
    }

    /// Queue an event. When [`EVENT_CAPACITY`] events are already pending the
    /// oldest one is evicted, so the latest state change is never lost.
    fn push_event(&mut self, event: SessionEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Take and clear the pending events, oldest first.
    pub fn take_events(&mut self) -> SessionEvents {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.width = self.arena.width();
        out.height = self.arena.height();

        out.arena.resize_with(self.arena.height(), Vec::new);
        for (dst, src) in out.arena.iter_mut().zip(self.arena.rows()) {
            dst.clear();
            dst.extend_from_slice(src);
        }

        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.score = self.score;
        out.lines = self.lines;
        out.running = self.running;
        out.drop_counter_ms = self.drop_counter_ms;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cycles through a fixed list of kinds.
    struct Scripted {
        kinds: Vec<Tetromino>,
        next: usize,
    }

    impl Scripted {
        fn new(kinds: &[Tetromino]) -> Self {
            Self {
                kinds: kinds.to_vec(),
                next: 0,
            }
        }
    }

    impl PieceSource for Scripted {
        fn next_piece(&mut self) -> Tetromino {
            let kind = self.kinds[self.next % self.kinds.len()];
            self.next += 1;
            kind
        }
    }

    fn running_session(kinds: &[Tetromino]) -> Session<Scripted> {
        let mut session = Session::with_source(Scripted::new(kinds));
        session.start();
        session
    }

    #[test]
    fn test_new_session_is_stopped() {
        let session = Session::new(12345);

        assert!(!session.running);
        assert!(session.active.is_none());
        assert_eq!(session.score, 0);
        assert_eq!(session.arena.width(), 12);
        assert_eq!(session.arena.height(), 20);
        assert_eq!(session.drop_interval_ms(), 1000);
    }

    #[test]
    fn test_start_spawns_centered_piece() {
        let session = running_session(&[Tetromino::T]);

        assert!(session.running);
        let active = session.active.unwrap();
        assert_eq!(active.kind, Tetromino::T);
        assert_eq!((active.x, active.y), (5, 0));
    }

    #[test]
    fn test_start_is_reset_and_run() {
        let mut session = running_session(&[Tetromino::O]);
        session.arena.fill_row(19, 1);
        session.arena.set(0, 18, 3);
        session.score = 70;
        session.drop_counter_ms = 500;

        session.start();

        assert!(session.running);
        assert_eq!(session.arena.occupied_count(), 0);
        assert_eq!(session.score, 0);
        assert_eq!(session.drop_counter_ms, 0);
        assert!(session.active.is_some());
    }

    #[test]
    fn test_tick_drops_only_after_interval_is_exceeded() {
        let mut session = running_session(&[Tetromino::T]);
        let y0 = session.active.unwrap().y;

        assert!(!session.tick(600));
        assert!(!session.tick(400)); // exactly 1000 is not enough
        assert_eq!(session.active.unwrap().y, y0);

        assert!(session.tick(1));
        assert_eq!(session.active.unwrap().y, y0 + 1);
        assert_eq!(session.drop_counter_ms, 0);
    }

    #[test]
    fn test_manual_drop_resets_timer() {
        let mut session = running_session(&[Tetromino::T]);
        session.tick(900);
        assert_eq!(session.drop_counter_ms, 900);

        assert!(session.apply_action(GameAction::SoftDrop));
        assert_eq!(session.drop_counter_ms, 0);

        // The full interval has to pass again.
        assert!(!session.tick(900));
    }

    #[test]
    fn test_commands_ignored_while_stopped() {
        let mut session = Session::with_source(Scripted::new(&[Tetromino::T]));

        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::RotateCw,
            GameAction::RotateCcw,
            GameAction::Stop,
        ] {
            assert!(!session.apply_action(action), "{:?}", action);
        }
        assert!(!session.tick(5_000));
        assert!(session.active.is_none());
    }

    #[test]
    fn test_stop_freezes_the_board() {
        let mut session = running_session(&[Tetromino::T]);
        let before = session.active.unwrap();

        assert!(session.apply_action(GameAction::Stop));
        assert!(!session.running);
        assert!(!session.tick(10_000));
        assert!(!session.apply_action(GameAction::MoveLeft));
        assert_eq!(session.active.unwrap(), before);

        let events = session.take_events();
        assert_eq!(events.last(), Some(&SessionEvent::Stopped));
    }

    #[test]
    fn test_landing_merges_and_spawns_next() {
        let mut session = running_session(&[Tetromino::O, Tetromino::T]);

        // O falls from y=0 to y=18 on a 20-row arena.
        let mut moves = 0;
        while session.drop_piece() {
            moves += 1;
        }
        assert_eq!(moves, 18);

        assert_eq!(session.arena.get(5, 18), Some(2));
        assert_eq!(session.arena.get(6, 19), Some(2));
        assert_eq!(session.arena.occupied_count(), 4);
        assert_eq!(session.active.unwrap().kind, Tetromino::T);
        assert_eq!(session.score, 0);

        let events = session.take_events();
        assert!(events.contains(&SessionEvent::PieceLocked {
            kind: Tetromino::O
        }));
    }

    #[test]
    fn test_line_clear_awards_ten_per_row() {
        let mut session = running_session(&[Tetromino::I]);

        // Bottom two rows full except column 5, where the vertical I falls.
        for x in 0..12 {
            if x != 5 {
                session.arena.set(x, 19, 1);
                session.arena.set(x, 18, 1);
            }
        }

        while session.drop_piece() {}

        assert_eq!(session.score, 20);
        assert_eq!(session.lines, 2);
        // Remaining I cells (rows 16 and 17 before the clear) moved down by two.
        assert_eq!(session.arena.get(5, 19), Some(5));
        assert_eq!(session.arena.get(5, 18), Some(5));
        assert_eq!(session.arena.occupied_count(), 2);

        let events = session.take_events();
        assert!(events.contains(&SessionEvent::LinesCleared { lines: 2, score: 20 }));
    }

    #[test]
    fn test_game_over_when_spawn_collides() {
        let mut session = running_session(&[Tetromino::T]);
        session.score = 40;
        // Top rows filled except the first column, so nothing sweeps.
        for y in 0..3 {
            for x in 1..12 {
                session.arena.set(x, y, 3);
            }
        }

        assert!(!session.spawn_piece());

        assert!(!session.running);
        assert_eq!(session.score, 0);
        assert_eq!(session.arena.occupied_count(), 0);
        assert!(session.active.is_none());

        let events = session.take_events();
        assert_eq!(
            events.last(),
            Some(&SessionEvent::GameOver { final_score: 40 })
        );

        // Stopped: ticks and commands do nothing until restarted.
        assert!(!session.tick(10_000));
        assert!(session.apply_action(GameAction::Start));
        assert!(session.running);
    }

    #[test]
    fn test_events_are_capped_until_drained() {
        let mut session = Session::with_source(Scripted::new(&[Tetromino::O]));
        for _ in 0..20 {
            session.start();
        }
        assert_eq!(session.take_events().len(), EVENT_CAPACITY);
        assert!(session.take_events().is_empty());
    }

    #[test]
    fn test_full_queue_keeps_game_over() {
        let mut session = running_session(&[Tetromino::T]);
        for _ in 0..EVENT_CAPACITY {
            session.push_event(SessionEvent::PieceLocked { kind: Tetromino::T });
        }
        session.score = 30;
        for x in 1..12 {
            session.arena.set(x, 1, 3);
        }

        assert!(!session.spawn_piece());

        let events = session.take_events();
        assert_eq!(events.len(), EVENT_CAPACITY);
        assert_eq!(
            events.last(),
            Some(&SessionEvent::GameOver { final_score: 30 })
        );
        // The oldest entry made room.
        assert_eq!(events[0], SessionEvent::PieceLocked { kind: Tetromino::T });
        assert!(!events.contains(&SessionEvent::Started));
    }

    #[test]
    fn test_snapshot_matches_session() {
        let mut session = running_session(&[Tetromino::L]);
        session.arena.set(0, 19, 4);
        session.tick(250);

        let snap = session.snapshot();
        assert_eq!((snap.width, snap.height), (12, 20));
        assert_eq!(snap.arena.len(), 20);
        assert!(snap.arena.iter().all(|row| row.len() == 12));
        assert_eq!(snap.arena[19][0], 4);
        assert_eq!(snap.drop_counter_ms, 250);
        assert!(snap.running);

        let active = snap.active.unwrap();
        assert_eq!(active.id, Tetromino::L.id());
        assert_eq!(active.matrix, vec![vec![0, 3, 0], vec![0, 3, 0], vec![0, 3, 3]]);
        assert_eq!((active.x, active.y), (5, 0));
    }
}
