//! Shared types module - piece tags, cells, actions and default constants
//!
//! Everything here is plain data with no dependencies, so it can be used by the
//! engine, the terminal view and the input mapping alike.
//!
//! # Board Dimensions
//!
//! The reference playfield is 10 columns by 20 rows:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn position**: column 3, row 0
//!
//! Both dimensions are defaults only; the engine takes its real dimensions from
//! its configuration.
//!
//! # Timing and Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 500 | Interval between gravity ticks |
//! | `LINE_CLEAR_BONUS` | 10 | Points per cleared row |
//! | `PREVIEW_SIZE` | 4 | Side of the square next-piece panel |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells
pub const BOARD_HEIGHT: u8 = 20;

/// Default gravity tick interval in milliseconds
pub const TICK_MS: u32 = 500;

/// Points awarded per row removed in a single lock
pub const LINE_CLEAR_BONUS: u32 = 10;

/// Side length of the next-piece preview box (every catalog shape fits)
pub const PREVIEW_SIZE: u8 = 4;

/// The seven piece kinds, doubling as the color tag of a locked cell
///
/// - **I**: 1x4 bar
/// - **O**: 2x2 square
/// - **T**, **S**, **Z**, **J**, **L**: 2x3 shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase letter used by panels and logs
    pub fn letter(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }
}

/// A cell on the board
///
/// - `None`: empty
/// - `Some(kind)`: locked cell tagged with the kind that filled it
pub type Cell = Option<PieceKind>;

/// Commands a player (or any driver) can issue to the engine
///
/// This is the complete set reachable from input; the tick driver only ever
/// calls the engine's tick directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down, locking it if it cannot move (same as a tick)
    SoftDrop,
    /// Rotate piece 90° clockwise, no wall kicks
    Rotate,
    /// Drop piece to its landing row and lock it
    HardDrop,
    /// Clear the board and start a fresh session
    NewGame,
}

impl GameAction {
    /// Parse action from a camelCase or lowercase name
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "harddrop" => Some(GameAction::HardDrop),
            "newgame" => Some(GameAction::NewGame),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::NewGame => "newGame",
        }
    }
}
