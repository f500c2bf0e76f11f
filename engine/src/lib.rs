#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative generation history for the toroidal Game of Life.
//!
//! The [`Simulation`] owns every computed generation, keyed densely by tick.
//! Generation 0 is the editable seed; every later generation is derived once
//! from its predecessor with the standard B3/S23 rule over a wraparound
//! Moore neighborhood and never mutated afterward. Mutations go through
//! `Result`-returning methods, reads go through the [`query`] module, and
//! callers only ever observe borrowed immutable views of stored boards.

use game_of_life_core::{Cell, EngineError, GridDimensions, Tick};

/// Offsets of the eight Moore-neighborhood cells around a coordinate.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One stored generation's cell values in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Generation {
    cells: Vec<Cell>,
}

impl Generation {
    fn dead(dims: GridDimensions) -> Self {
        let capacity = usize::try_from(dims.cell_count()).unwrap_or(0);
        Self {
            cells: vec![Cell::Dead; capacity],
        }
    }
}

/// Outcome of an [`Simulation::advance`] request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// The cursor moved to the returned tick, computing it if necessary.
    Advanced(Tick),
    /// The configured tick ceiling was reached; the engine is unchanged.
    AtCeiling(Tick),
}

/// Represents the simulation's complete generation history and cursor.
#[derive(Clone, Debug)]
pub struct Simulation {
    dims: GridDimensions,
    history: Vec<Generation>,
    cursor: Tick,
    ceiling: Option<Tick>,
}

impl Simulation {
    /// Creates a simulation with an all-dead seed generation at tick 0.
    ///
    /// The optional `ceiling` is a soft cap on [`Self::advance`]; it is
    /// supplied by the configuration collaborator and never changes for the
    /// lifetime of the run.
    #[must_use]
    pub fn new(dims: GridDimensions, ceiling: Option<Tick>) -> Self {
        Self {
            dims,
            history: vec![Generation::dead(dims)],
            cursor: Tick::ZERO,
            ceiling,
        }
    }

    /// Writes a single cell of the seed generation.
    ///
    /// The seed is frozen while derived generations exist; callers must
    /// [`Self::truncate_future`] before re-editing.
    pub fn set_cell(&mut self, row: u32, col: u32, cell: Cell) -> Result<(), EngineError> {
        if !self.is_seed_editable() {
            return Err(EngineError::EditLocked);
        }
        let index = self
            .dims
            .index(row, col)
            .ok_or(EngineError::OutOfBounds { row, col })?;
        self.history[Tick::ZERO.index()].cells[index] = cell;
        Ok(())
    }

    /// Writes one full row of the seed generation.
    ///
    /// Validation happens before any cell changes, so a failed call leaves
    /// the seed untouched.
    pub fn set_row(&mut self, row: u32, cells: &[Cell]) -> Result<(), EngineError> {
        if !self.is_seed_editable() {
            return Err(EngineError::EditLocked);
        }
        let start = self
            .dims
            .index(row, 0)
            .ok_or(EngineError::OutOfBounds { row, col: 0 })?;
        let width = usize::try_from(self.dims.cols()).unwrap_or(0);
        if cells.len() != width {
            return Err(EngineError::LengthMismatch {
                expected: self.dims.cols(),
                actual: u32::try_from(cells.len()).unwrap_or(u32::MAX),
            });
        }
        self.history[Tick::ZERO.index()].cells[start..start + width].copy_from_slice(cells);
        Ok(())
    }

    /// Moves the cursor forward one tick.
    ///
    /// A previously computed generation is reused as-is; otherwise the next
    /// generation is derived from the cursor's snapshot and appended to the
    /// history. When a ceiling is configured and already reached, the call
    /// is a no-op reported as [`Advance::AtCeiling`].
    pub fn advance(&mut self) -> Advance {
        if let Some(ceiling) = self.ceiling {
            if self.cursor >= ceiling {
                return Advance::AtCeiling(self.cursor);
            }
        }
        let next = self.cursor.next();
        if next.index() >= self.history.len() {
            let derived = self.derive_next();
            self.history.push(derived);
        }
        self.cursor = next;
        Advance::Advanced(next)
    }

    /// Moves the cursor back one tick without touching stored generations.
    pub fn rewind(&mut self) -> Result<Tick, EngineError> {
        let previous = self.cursor.previous().ok_or(EngineError::AtGenesis)?;
        self.cursor = previous;
        Ok(previous)
    }

    /// Discards every derived generation and unlocks the seed for editing.
    pub fn truncate_future(&mut self) {
        self.history.truncate(1);
        self.cursor = Tick::ZERO;
    }

    /// Returns the simulation to its freshly initialized all-dead state.
    pub fn reset(&mut self) {
        self.history.clear();
        self.history.push(Generation::dead(self.dims));
        self.cursor = Tick::ZERO;
    }

    /// Reports whether generation 0 currently accepts edits.
    #[must_use]
    pub fn is_seed_editable(&self) -> bool {
        self.history.len() == 1
    }

    fn derive_next(&self) -> Generation {
        let source = &self.history[self.cursor.index()];
        let mut cells = Vec::with_capacity(source.cells.len());
        for row in 0..self.dims.rows() {
            for col in 0..self.dims.cols() {
                let neighbors = live_neighbors(&source.cells, self.dims, row, col);
                let current = self
                    .dims
                    .index(row, col)
                    .and_then(|index| source.cells.get(index).copied())
                    .unwrap_or(Cell::Dead);
                let alive = neighbors == 3 || (neighbors == 2 && current.is_alive());
                cells.push(Cell::from_alive(alive));
            }
        }
        Generation { cells }
    }
}

/// Counts the live Moore neighbors of a cell with both axes wrapping.
///
/// The dimension is added before the modulo so the `-1` offsets wrap to the
/// opposite edge instead of underflowing; this single rule covers every
/// edge and corner of the torus.
fn live_neighbors(cells: &[Cell], dims: GridDimensions, row: u32, col: u32) -> u8 {
    let rows = i64::from(dims.rows());
    let cols = i64::from(dims.cols());
    let mut sum = 0;
    for (row_offset, col_offset) in NEIGHBOR_OFFSETS {
        let wrapped_row = ((i64::from(row) + row_offset + rows) % rows) as u32;
        let wrapped_col = ((i64::from(col) + col_offset + cols) % cols) as u32;
        let alive = dims
            .index(wrapped_row, wrapped_col)
            .and_then(|index| cells.get(index))
            .copied()
            .map_or(false, Cell::is_alive);
        if alive {
            sum += 1;
        }
    }
    sum
}

/// Query functions that provide read-only access to the generation history.
pub mod query {
    use game_of_life_core::{Cell, EngineError, GridDimensions, Statistics, Tick};

    use super::Simulation;

    /// Dimensions the simulation was initialized with.
    #[must_use]
    pub fn dimensions(sim: &Simulation) -> GridDimensions {
        sim.dims
    }

    /// The currently selected tick.
    #[must_use]
    pub fn cursor(sim: &Simulation) -> Tick {
        sim.cursor
    }

    /// The highest tick that has been computed so far.
    #[must_use]
    pub fn highest_tick(sim: &Simulation) -> Tick {
        Tick::new(u32::try_from(sim.history.len() - 1).unwrap_or(u32::MAX))
    }

    /// The configured soft cap on [`Simulation::advance`], if any.
    #[must_use]
    pub fn ceiling(sim: &Simulation) -> Option<Tick> {
        sim.ceiling
    }

    /// Reads one cell at an already-computed tick.
    pub fn cell(sim: &Simulation, tick: Tick, row: u32, col: u32) -> Result<Cell, EngineError> {
        let view = generation(sim, tick)?;
        view.cell(row, col)
            .ok_or(EngineError::OutOfBounds { row, col })
    }

    /// Borrows an immutable view of the board at an already-computed tick.
    pub fn generation(sim: &Simulation, tick: Tick) -> Result<GenerationView<'_>, EngineError> {
        let stored = sim
            .history
            .get(tick.index())
            .ok_or(EngineError::UnknownTick { tick })?;
        Ok(GenerationView {
            cells: &stored.cells,
            dims: sim.dims,
        })
    }

    /// Scans the board at `tick` once and derives its alive/dead counts.
    pub fn statistics(sim: &Simulation, tick: Tick) -> Result<Statistics, EngineError> {
        let view = generation(sim, tick)?;
        let alive = view
            .cells
            .iter()
            .filter(|cell| cell.is_alive())
            .count();
        let alive = u32::try_from(alive).unwrap_or(u32::MAX);
        Ok(Statistics::new(alive, sim.dims.cell_count() - alive))
    }

    /// Read-only view into one stored generation.
    #[derive(Clone, Copy, Debug)]
    pub struct GenerationView<'a> {
        pub(super) cells: &'a [Cell],
        pub(super) dims: GridDimensions,
    }

    impl<'a> GenerationView<'a> {
        /// Returns the cell at the provided coordinate, if it is in bounds.
        #[must_use]
        pub fn cell(&self, row: u32, col: u32) -> Option<Cell> {
            self.dims
                .index(row, col)
                .and_then(|index| self.cells.get(index))
                .copied()
        }

        /// Dimensions of the viewed board.
        #[must_use]
        pub const fn dimensions(&self) -> GridDimensions {
            self.dims
        }

        /// Iterates the board one row slice at a time, top to bottom.
        pub fn rows(&self) -> impl Iterator<Item = &'a [Cell]> {
            let width = usize::try_from(self.dims.cols()).unwrap_or(1).max(1);
            self.cells.chunks(width)
        }

        /// The full board in row-major order.
        #[must_use]
        pub const fn cells(&self) -> &'a [Cell] {
            self.cells
        }
    }
}
