#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Game of Life engine.
//!
//! This crate defines the vocabulary that connects the simulation engine to
//! its adapters: cell states, tick indices, validated grid dimensions,
//! per-generation statistics, and the error kinds every engine operation may
//! report. The engine crate owns the generation history; adapters only ever
//! exchange the types declared here plus immutable views.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Binary state of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// The cell is dead and counts zero toward neighbor sums.
    #[default]
    Dead,
    /// The cell is alive and counts one toward neighbor sums.
    Alive,
}

impl Cell {
    /// Reports whether the cell is alive.
    #[must_use]
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// Converts a boolean alive flag into a cell state.
    #[must_use]
    pub const fn from_alive(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }

    /// The `0`/`1` digit used by the plain-text board format.
    #[must_use]
    pub const fn as_digit(self) -> char {
        match self {
            Self::Dead => '0',
            Self::Alive => '1',
        }
    }

    /// Parses the `0`/`1` token used by the plain-text board format.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "0" => Some(Self::Dead),
            "1" => Some(Self::Alive),
            _ => None,
        }
    }
}

/// Non-negative index identifying one generation in the history.
///
/// Tick 0 is the editable seed; every higher tick is derived from its
/// predecessor and immutable once computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tick(u32);

impl Tick {
    /// The seed generation's tick index.
    pub const ZERO: Self = Self(0);

    /// Creates a tick index with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the tick.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// The tick immediately after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// The tick immediately before this one, if any.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }

    /// The tick as a dense history index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Tick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated board dimensions, fixed for the lifetime of a simulation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDimensions {
    rows: u32,
    cols: u32,
}

impl GridDimensions {
    /// Creates validated dimensions; both axes must be positive.
    pub fn new(rows: u32, cols: u32) -> Result<Self, EngineError> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidDimension { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows in the board.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns in the board.
    #[must_use]
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells in one generation.
    #[must_use]
    pub const fn cell_count(&self) -> u32 {
        self.rows * self.cols
    }

    /// Reports whether the coordinate falls inside the board.
    #[must_use]
    pub const fn contains(&self, row: u32, col: u32) -> bool {
        row < self.rows && col < self.cols
    }

    /// Row-major index of the coordinate, if it falls inside the board.
    #[must_use]
    pub fn index(&self, row: u32, col: u32) -> Option<usize> {
        if !self.contains(row, col) {
            return None;
        }
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        let width = usize::try_from(self.cols).ok()?;
        Some(row * width + col)
    }
}

/// Aggregate alive/dead counts derived from one generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of cells that are alive at the inspected tick.
    pub alive: u32,
    /// Number of cells that are dead at the inspected tick.
    pub dead: u32,
}

impl Statistics {
    /// Creates a statistics snapshot from explicit counts.
    #[must_use]
    pub const fn new(alive: u32, dead: u32) -> Self {
        Self { alive, dead }
    }

    /// Total number of cells covered by the snapshot.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.alive + self.dead
    }
}

/// Recoverable failures reported by engine operations.
///
/// A failed call never mutates the engine; every variant leaves the
/// simulation exactly as it was before the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum EngineError {
    /// Rows or columns were zero at initialization.
    #[error("grid dimensions {rows}x{cols} must both be positive")]
    InvalidDimension {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },
    /// A coordinate fell outside the configured board.
    #[error("cell ({row}, {col}) lies outside the board")]
    OutOfBounds {
        /// Requested row index.
        row: u32,
        /// Requested column index.
        col: u32,
    },
    /// A query named a tick that has never been computed.
    #[error("tick {tick} has not been computed")]
    UnknownTick {
        /// The tick the caller asked for.
        tick: Tick,
    },
    /// The seed was edited while derived generations exist.
    #[error("generation 0 is locked while later generations exist")]
    EditLocked,
    /// A bulk row write did not match the column count.
    #[error("row of length {actual} does not match the {expected} columns")]
    LengthMismatch {
        /// Column count of the board.
        expected: u32,
        /// Length of the provided row.
        actual: u32,
    },
    /// A rewind was attempted at the seed generation.
    #[error("cannot rewind below tick 0")]
    AtGenesis,
}
