//! Core Sudoku engine: grid model, move validation, and puzzle generation.
//!
//! The engine is a stateless function library over a value-like [`Grid`].
//! Every query is a pure function of its inputs; the only nondeterminism
//! lives in the seedable random source owned by [`Generator`], so puzzle
//! generation is reproducible under test via [`Generator::with_seed`].
//!
//! ```
//! use sudoku_engine::{Difficulty, Generator};
//!
//! let mut generator = Generator::with_seed(42);
//! let puzzle = generator.generate(Difficulty::Easy);
//! assert_eq!(puzzle.empty_count(), Difficulty::Easy.cells_to_remove());
//! assert!(puzzle.is_valid());
//! ```

mod error;
mod generator;
mod grid;

pub use error::EngineError;
pub use generator::{Difficulty, Generator};
pub use grid::{Grid, Position, BOX_SIZE, CELL_COUNT, GRID_SIZE};
