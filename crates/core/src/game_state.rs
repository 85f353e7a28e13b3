//! Game state module - the engine a driver talks to
//!
//! This module ties together the board, the piece catalog, the spawner and the
//! collision oracle. It owns the falling piece, the lookahead piece, the score
//! and the running flag, and exposes the small set of operations an external
//! driver (tick timer + input mapping) invokes one at a time.
//!
//! # Lifecycle
//!
//! ```text
//! NoPiece --spawn--> Falling --tick/drop fails--> lock, clear, score
//!                       ^                                |
//!                       +---------- spawn ok ------------+
//!                                                        |
//!                          GameOver <--- spawn blocked --+
//! ```
//!
//! Nothing here keeps time. Gravity happens only when the driver calls
//! [`GameState::tick`].

use tracing::{debug, info, trace};

use crate::collision::collides;
use crate::config::{ConfigError, EngineConfig};
use crate::pieces::Piece;
use crate::rng::PieceSpawner;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::GameAction;
use crate::Board;

/// Grid position of a shape's top-left cell (`x` = column, `y` = row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

/// The falling piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub piece: Piece,
    pub position: Position,
}

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Running, waiting for the first spawn
    NoPiece,
    /// A piece is under player/timer control
    Falling,
    /// A spawn was blocked; only a reset leaves this phase
    GameOver,
}

/// Result of one lock: the piece was merged, rows cleared, next piece spawned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
    /// The follow-up spawn was blocked and the session ended
    pub game_over: bool,
}

/// What a tick (or drop) did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to do: session over or no piece yet
    Idle,
    /// The piece moved down one row
    Fell,
    /// The piece could not move and was locked
    Locked(LockEvent),
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    config: EngineConfig,
    board: Board,
    active: Option<ActivePiece>,
    next: Option<Piece>,
    spawner: PieceSpawner,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    score: u32,
    running: bool,
}

impl GameState {
    /// Reference 10x20 game with a seeded spawner
    pub fn new(seed: u64) -> Self {
        Self::build(EngineConfig::default(), PieceSpawner::new(seed))
    }

    /// Game with custom dimensions/scoring
    pub fn with_config(config: EngineConfig, spawner: PieceSpawner) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, spawner))
    }

    fn build(config: EngineConfig, spawner: PieceSpawner) -> Self {
        Self {
            config,
            board: Board::new(config.width, config.height),
            active: None,
            next: None,
            spawner,
            last_event: None,
            score: 0,
            running: true,
        }
    }

    /// Clear the board and score and return to [`Phase::NoPiece`].
    pub fn reset(&mut self) {
        self.board.reset();
        self.active = None;
        self.next = None;
        self.last_event = None;
        self.score = 0;
        self.running = true;
        debug!("session reset");
    }

    /// Reset and spawn the first piece
    pub fn start_new_game(&mut self) -> bool {
        self.reset();
        self.spawn()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for puzzle setups and tests.
    ///
    /// The engine assumes the board never holds a full row between
    /// operations; keeping that true is the caller's job here.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn next_piece(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> Phase {
        match (self.running, &self.active) {
            (false, _) => Phase::GameOver,
            (true, Some(_)) => Phase::Falling,
            (true, None) => Phase::NoPiece,
        }
    }

    /// Seed of the piece sequence, if it was seeded
    pub fn seed(&self) -> Option<u64> {
        self.spawner.seed()
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Put `piece` under control at `position`, replacing any falling piece.
    ///
    /// Meant for puzzle setups and tests. Returns false (and changes nothing)
    /// if the session is over or the placement collides.
    pub fn place_active(&mut self, piece: Piece, position: Position) -> bool {
        if !self.running || collides(&self.board, position, &piece.shape, 0, 0) {
            return false;
        }
        self.active = Some(ActivePiece { piece, position });
        true
    }

    /// Bring the lookahead piece into play at the spawn point.
    ///
    /// On the first call of a session the active piece is drawn directly. A
    /// new lookahead piece is drawn every time. If the new piece collides where
    /// it appears, the session ends: nothing is locked or cleared and the score
    /// is kept.
    ///
    /// Returns whether a piece is falling afterwards. Does nothing while a
    /// piece is already falling.
    pub fn spawn(&mut self) -> bool {
        if !self.running {
            return false;
        }
        if self.active.is_some() {
            return true;
        }

        let piece = match self.next.take() {
            Some(piece) => piece,
            None => self.spawner.random_piece(),
        };
        self.next = Some(self.spawner.random_piece());

        let position = Position {
            x: self.config.spawn_x,
            y: 0,
        };
        if collides(&self.board, position, &piece.shape, 0, 0) {
            self.running = false;
            info!(score = self.score, kind = ?piece.kind, "spawn blocked, game over");
            return false;
        }

        debug!(kind = %piece.kind.letter(), next = ?self.next.as_ref().map(|p| p.kind.letter()), "spawned piece");
        self.active = Some(ActivePiece { piece, position });
        true
    }

    /// Shift the falling piece by (`dx`, `dy`) if the target is free
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.running {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let (Some(x), Some(y)) = (
            active.position.x.checked_add(dx),
            active.position.y.checked_add(dy),
        ) else {
            return false;
        };
        if collides(&self.board, active.position, &active.piece.shape, dx, dy) {
            return false;
        }
        active.position = Position { x, y };
        true
    }

    /// Turn the falling piece 90° clockwise in place.
    ///
    /// No kicks: if the turned shape collides at the current position the
    /// piece keeps its orientation.
    pub fn try_rotate(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let candidate = active.piece.rotated();
        if collides(&self.board, active.position, &candidate.shape, 0, 0) {
            trace!(kind = ?active.piece.kind, x = active.position.x, y = active.position.y, "rotation blocked");
            return false;
        }
        active.piece = candidate;
        true
    }

    /// Row the falling piece would land on if dropped straight down.
    ///
    /// Read-only; `None` when nothing is falling.
    pub fn ghost_row(&self) -> Option<i8> {
        let active = self.active.as_ref()?;
        let mut probe = active.position;
        while !collides(&self.board, probe, &active.piece.shape, 0, 1) {
            probe.y += 1;
        }
        Some(probe.y)
    }

    /// Gravity step: move down one row, or lock if that is blocked
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running || self.active.is_none() {
            return TickOutcome::Idle;
        }
        if self.try_move(0, 1) {
            return TickOutcome::Fell;
        }
        self.lock_active().map_or(TickOutcome::Idle, TickOutcome::Locked)
    }

    /// Jump to the landing row and lock in one step
    pub fn hard_drop(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        let Some(landing) = self.ghost_row() else {
            return TickOutcome::Idle;
        };
        if let Some(active) = self.active.as_mut() {
            active.position.y = landing;
        }
        self.lock_active().map_or(TickOutcome::Idle, TickOutcome::Locked)
    }

    /// Merge the falling piece into the board, clear rows, score, respawn.
    fn lock_active(&mut self) -> Option<LockEvent> {
        let ActivePiece { piece, position } = self.active.take()?;

        self.board.lock(&piece.shape, piece.kind, position);
        let lines_cleared = self.board.clear_full_rows() as u32;
        let score_delta = lines_cleared * self.config.line_clear_bonus;
        self.score = self.score.saturating_add(score_delta);

        debug!(
            kind = %piece.kind.letter(),
            x = position.x,
            y = position.y,
            lines_cleared,
            score = self.score,
            "locked piece"
        );

        let game_over = !self.spawn();
        let event = LockEvent {
            lines_cleared,
            score_delta,
            game_over,
        };
        self.last_event = Some(event);
        Some(event)
    }

    /// Apply a player command.
    ///
    /// Returns whether the command changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.tick() != TickOutcome::Idle,
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => self.hard_drop() != TickOutcome::Idle,
            GameAction::NewGame => {
                self.start_new_game();
                true
            }
        }
    }

    /// Fill `out` with the state a renderer needs, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_row();
        out.next = self.next.clone();
        out.score = self.score;
        out.running = self.running;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
