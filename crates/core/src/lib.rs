//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole game engine: the arena, the tetromino
//! catalog, collision and rotation, line clearing, scoring and the session
//! state machine. It has no dependency on terminals, input devices or
//! wall-clock time:
//!
//! - **Deterministic**: pieces come from an injected [`PieceSource`]; the
//!   default [`SimpleRng`] replays identically from the same seed
//! - **Host-driven timing**: the host calls [`Session::tick`] with elapsed
//!   milliseconds, at whatever frame rate it runs
//! - **No globals**: every [`Session`] owns its own state, so any number of
//!   games can run side by side
//!
//! # Module Structure
//!
//! - [`arena`]: the playfield grid, collision, merge and sweep
//! - [`pieces`]: square piece matrices, the 7-piece catalog and rotation
//! - [`player`]: the active piece with move and kick-rotation rules
//! - [`session`]: the game loop state machine and its events
//! - [`rng`]: piece sources
//! - [`scoring`]: points per cleared row
//! - [`clock`]: host timestamps to tick deltas
//! - [`config`]: session configuration and validation
//! - [`headless`]: fixed-frame runs without a terminal
//! - [`snapshot`]: serializable state for renderers
//!
//! # Example
//!
//! ```
//! use arena_tetris_core::Session;
//! use arena_tetris_types::GameAction;
//!
//! let mut session = Session::new(12345);
//! session.start();
//!
//! session.apply_action(GameAction::MoveRight);
//! session.apply_action(GameAction::RotateCw);
//!
//! // Gravity: nothing happens until more than one second has passed.
//! assert!(!session.tick(1000));
//! assert!(session.tick(16));
//! assert!(session.running());
//! ```

pub mod arena;
pub mod clock;
pub mod config;
pub mod headless;
pub mod pieces;
pub mod player;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use arena_tetris_types as types;

// Re-export commonly used types for convenience
pub use arena::Arena;
pub use clock::FrameClock;
pub use config::{ConfigError, SessionConfig};
pub use headless::run_headless;
pub use pieces::{get_shape, PieceMatrix};
pub use player::Player;
pub use rng::{PieceSource, SimpleRng};
pub use scoring::line_clear_score;
pub use session::{Session, SessionEvent, SessionEvents};
pub use snapshot::{ActiveSnapshot, SessionSnapshot};
