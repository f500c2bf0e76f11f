#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Plain-text board persistence for the Game of Life engine.
//!
//! Boards travel as one line per row with space-separated `0`/`1` tokens,
//! the format the simulator has always written to its per-tick snapshot
//! files. Loading validates an entire document before a single cell is
//! written into the engine, so a malformed file never leaves a partially
//! applied seed behind.

use std::{
    error::Error,
    fmt, fs, io,
    path::{Path, PathBuf},
};

use game_of_life_core::{Cell, EngineError, GridDimensions, Tick};
use game_of_life_engine::{
    query::{self, GenerationView},
    Simulation,
};

/// Extension used for per-tick snapshot files.
const SNAPSHOT_EXTENSION: &str = "txt";

/// Encodes one generation as rows of space-separated `0`/`1` tokens.
#[must_use]
pub fn encode_board(view: &GenerationView<'_>) -> String {
    let mut out = String::new();
    for row in view.rows() {
        let mut first = true;
        for cell in row {
            if !first {
                out.push(' ');
            }
            out.push(cell.as_digit());
            first = false;
        }
        out.push('\n');
    }
    out
}

/// Parses a board document against the expected dimensions.
///
/// Every row and token is checked before the rows are returned; callers can
/// therefore apply the result to an engine without risking partial writes.
pub fn parse_board(
    text: &str,
    dims: GridDimensions,
) -> Result<Vec<Vec<Cell>>, PersistenceError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() != dims.rows() as usize {
        return Err(PersistenceError::RowCountMismatch {
            expected: dims.rows(),
            actual: lines.len(),
        });
    }

    let mut rows = Vec::with_capacity(lines.len());
    for (row_index, line) in lines.iter().enumerate() {
        let row_index = row_index as u32;
        let mut cells = Vec::with_capacity(dims.cols() as usize);
        for (col_index, token) in line.split_whitespace().enumerate() {
            let cell = Cell::from_token(token).ok_or_else(|| PersistenceError::InvalidToken {
                row: row_index,
                col: col_index as u32,
                token: token.to_owned(),
            })?;
            cells.push(cell);
        }
        if cells.len() != dims.cols() as usize {
            return Err(PersistenceError::RowLengthMismatch {
                row: row_index,
                expected: dims.cols(),
                actual: cells.len(),
            });
        }
        rows.push(cells);
    }
    Ok(rows)
}

/// Replaces the engine's seed generation with the parsed board document.
///
/// The document is fully validated first; only then is the engine reset and
/// repopulated one row at a time.
pub fn load_seed(sim: &mut Simulation, text: &str) -> Result<(), PersistenceError> {
    let dims = query::dimensions(sim);
    let rows = parse_board(text, dims)?;
    sim.reset();
    for (row_index, cells) in rows.iter().enumerate() {
        sim.set_row(row_index as u32, cells)
            .map_err(PersistenceError::Engine)?;
    }
    Ok(())
}

/// Encodes every computed generation in the inclusive tick range.
pub fn encode_range(
    sim: &Simulation,
    start: Tick,
    end: Tick,
) -> Result<Vec<(Tick, String)>, PersistenceError> {
    if start > end {
        return Err(PersistenceError::InvalidRange { start, end });
    }
    let mut encoded = Vec::new();
    for value in start.get()..=end.get() {
        let tick = Tick::new(value);
        let view = query::generation(sim, tick).map_err(PersistenceError::Engine)?;
        encoded.push((tick, encode_board(&view)));
    }
    Ok(encoded)
}

/// Writes per-tick snapshot files into a folder using a file name pattern.
///
/// A tick `n` snapshot lands at `<folder>/<file_pattern><n>.txt`, the layout
/// the simulator has always used for saved ticks.
#[derive(Clone, Debug)]
pub struct SnapshotStore {
    folder: PathBuf,
    file_pattern: String,
}

impl SnapshotStore {
    /// Creates a store rooted at the provided folder with a file pattern.
    #[must_use]
    pub fn new(folder: impl Into<PathBuf>, file_pattern: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            file_pattern: file_pattern.into(),
        }
    }

    /// The path a snapshot of the provided tick would be written to.
    #[must_use]
    pub fn snapshot_path(&self, tick: Tick) -> PathBuf {
        self.folder
            .join(format!("{}{}.{SNAPSHOT_EXTENSION}", self.file_pattern, tick))
    }

    /// Persists the inclusive tick range, returning the written paths.
    pub fn write_range(
        &self,
        sim: &Simulation,
        start: Tick,
        end: Tick,
    ) -> Result<Vec<PathBuf>, PersistenceError> {
        let encoded = encode_range(sim, start, end)?;
        fs::create_dir_all(&self.folder).map_err(PersistenceError::Io)?;
        let mut written = Vec::with_capacity(encoded.len());
        for (tick, board) in encoded {
            let path = self.snapshot_path(tick);
            fs::write(&path, board).map_err(PersistenceError::Io)?;
            written.push(path);
        }
        Ok(written)
    }

    /// Reads the snapshot of the provided tick back into a seed document.
    pub fn read_snapshot(&self, tick: Tick) -> Result<String, PersistenceError> {
        fs::read_to_string(self.snapshot_path(tick)).map_err(PersistenceError::Io)
    }

    /// Folder the store writes into.
    #[must_use]
    pub fn folder(&self) -> &Path {
        &self.folder
    }
}

/// Errors that can occur while encoding, parsing, or storing boards.
#[derive(Debug)]
pub enum PersistenceError {
    /// The document's row count did not match the board dimensions.
    RowCountMismatch {
        /// Rows the board requires.
        expected: u32,
        /// Rows the document contained.
        actual: usize,
    },
    /// A row held the wrong number of tokens.
    RowLengthMismatch {
        /// Zero-based index of the offending row.
        row: u32,
        /// Columns the board requires.
        expected: u32,
        /// Tokens the row contained.
        actual: usize,
    },
    /// A token was neither `0` nor `1`.
    InvalidToken {
        /// Zero-based row of the offending token.
        row: u32,
        /// Zero-based column of the offending token.
        col: u32,
        /// The token as it appeared in the document.
        token: String,
    },
    /// The requested tick range ran backwards.
    InvalidRange {
        /// First tick of the range.
        start: Tick,
        /// Last tick of the range.
        end: Tick,
    },
    /// The engine rejected an operation while applying or reading boards.
    Engine(EngineError),
    /// A snapshot file could not be read or written.
    Io(io::Error),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowCountMismatch { expected, actual } => {
                write!(f, "board document has {actual} rows, expected {expected}")
            }
            Self::RowLengthMismatch {
                row,
                expected,
                actual,
            } => write!(f, "row {row} has {actual} cells, expected {expected}"),
            Self::InvalidToken { row, col, token } => {
                write!(f, "token '{token}' at ({row}, {col}) is not 0 or 1")
            }
            Self::InvalidRange { start, end } => {
                write!(f, "tick range {start}..={end} runs backwards")
            }
            Self::Engine(error) => write!(f, "engine rejected the operation: {error}"),
            Self::Io(error) => write!(f, "snapshot file access failed: {error}"),
        }
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Engine(error) => Some(error),
            Self::Io(error) => Some(error),
            _ => None,
        }
    }
}
