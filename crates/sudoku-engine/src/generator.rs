use crate::{Grid, Position, CELL_COUNT, GRID_SIZE};
use serde::{Deserialize, Serialize};

/// Puzzle difficulty level.
///
/// Each level is a fixed policy for how many cells are cleared from a solved
/// grid; nothing about the removal pattern is computed from the grid itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Number of cells cleared from the 81-cell solved grid
    pub fn cells_to_remove(&self) -> usize {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 45,
            Difficulty::Hard => 55,
        }
    }

    /// All difficulty levels
    pub fn all_levels() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{}' (expected easy, medium, or hard)",
                other
            )),
        }
    }
}

/// Sudoku puzzle generator.
///
/// Holds the random source for both generation steps; everything else in the
/// engine is deterministic. Construct with [`Generator::with_seed`] for a
/// reproducible sequence.
pub struct Generator {
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Generate a puzzle: a fresh solved grid with the difficulty's cell
    /// count cleared. The solved grid is discarded.
    pub fn generate(&mut self, difficulty: Difficulty) -> Grid {
        let solved = self.generate_solved();
        self.derive_puzzle(&solved, difficulty)
    }

    /// Generate a puzzle together with the solved grid it was cleared from,
    /// for callers that check moves against the solution or reveal it.
    pub fn generate_with_solution(&mut self, difficulty: Difficulty) -> (Grid, Grid) {
        let solved = self.generate_solved();
        let puzzle = self.derive_puzzle(&solved, difficulty);
        (puzzle, solved)
    }

    /// Produce a completely filled valid grid by randomized backtracking.
    ///
    /// Cells are visited in row-major order; each empty cell tries the values
    /// 1..=9 in a freshly shuffled order and undoes its placement when the
    /// rest of the grid cannot be completed. A 9x9 grid always admits a
    /// completion from a prefix built this way, so the search cannot fail.
    pub fn generate_solved(&mut self) -> Grid {
        let mut grid = Grid::empty();
        let filled = self.fill_from(&mut grid, 0);
        debug_assert!(filled, "backtracking fill of an empty 9x9 grid cannot fail");
        grid
    }

    fn fill_from(&mut self, grid: &mut Grid, index: usize) -> bool {
        if index == CELL_COUNT {
            return true;
        }
        let pos = Position::new(index / GRID_SIZE, index % GRID_SIZE);
        let mut values: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        self.shuffle(&mut values);
        for &value in &values {
            if grid.is_legal_placement(pos, value) {
                grid.set(pos, value);
                if self.fill_from(grid, index + 1) {
                    return true;
                }
                grid.clear(pos);
            }
        }
        false
    }

    /// Clear `difficulty.cells_to_remove()` cells from a copy of `solved`,
    /// picking positions uniformly at random and skipping ones already
    /// cleared. No uniqueness-of-solution check is made: the puzzle is
    /// guaranteed solvable (its solution is `solved`) but may admit others.
    ///
    /// # Panics
    ///
    /// Panics if `solved` is not a complete valid grid; the removal loop's
    /// termination depends on every pick eventually landing on a filled cell.
    pub fn derive_puzzle(&mut self, solved: &Grid, difficulty: Difficulty) -> Grid {
        assert!(
            solved.is_complete(),
            "derive_puzzle requires a complete solved grid"
        );
        let mut puzzle = *solved;
        let mut remaining = difficulty.cells_to_remove();
        while remaining > 0 {
            let pos = Position::new(
                self.rng.next_usize(GRID_SIZE),
                self.rng.next_usize(GRID_SIZE),
            );
            if puzzle.get(pos).is_some() {
                puzzle.clear(pos);
                remaining -= 1;
            }
        }
        puzzle
    }

    /// Shuffle a slice using Fisher-Yates
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.rng.next_usize(i + 1);
            slice.swap(i, j);
        }
    }
}

/// Simple PRNG, kept dependency-light for WASM targets
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        // Use getrandom for WASM-compatible random seeding
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: use a static counter if getrandom fails
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        let seed = u64::from_le_bytes(seed_bytes);
        Self::with_seed(seed)
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        // PCG-like PRNG
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_grid_is_full_and_valid() {
        let mut generator = Generator::with_seed(42);
        let grid = generator.generate_solved();
        assert_eq!(grid.empty_count(), 0);
        assert!(grid.is_valid());
        assert!(grid.is_complete());
    }

    #[test]
    fn same_seed_reproduces_the_grid() {
        let first = Generator::with_seed(7).generate_solved();
        let second = Generator::with_seed(7).generate_solved();
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_vary_the_grid() {
        let first = Generator::with_seed(1).generate_solved();
        let second = Generator::with_seed(2).generate_solved();
        assert_ne!(first, second);
    }

    #[test]
    fn removal_counts_follow_the_policy() {
        let mut generator = Generator::with_seed(42);
        let solved = generator.generate_solved();
        for &difficulty in Difficulty::all_levels() {
            let puzzle = generator.derive_puzzle(&solved, difficulty);
            assert_eq!(puzzle.empty_count(), difficulty.cells_to_remove());
            assert_eq!(
                puzzle.filled_count(),
                CELL_COUNT - difficulty.cells_to_remove()
            );
        }
    }

    #[test]
    fn puzzle_is_a_subset_of_its_solution() {
        let mut generator = Generator::with_seed(99);
        let (puzzle, solved) = generator.generate_with_solution(Difficulty::Hard);
        assert!(solved.is_complete());
        assert!(puzzle.is_valid());
        for pos in Position::all() {
            if let Some(value) = puzzle.get(pos) {
                assert_eq!(Some(value), solved.get(pos));
            }
        }
    }

    #[test]
    fn generate_matches_policy_and_stays_valid() {
        let mut generator = Generator::with_seed(3);
        let puzzle = generator.generate(Difficulty::Medium);
        assert_eq!(puzzle.empty_count(), Difficulty::Medium.cells_to_remove());
        assert!(puzzle.is_valid());
        assert!(!puzzle.is_complete());
    }

    #[test]
    #[should_panic(expected = "complete solved grid")]
    fn derive_puzzle_rejects_partial_grids() {
        let mut generator = Generator::with_seed(1);
        let partial = Grid::empty();
        generator.derive_puzzle(&partial, Difficulty::Easy);
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("MEDIUM".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn difficulty_policy_table() {
        assert_eq!(Difficulty::Easy.cells_to_remove(), 30);
        assert_eq!(Difficulty::Medium.cells_to_remove(), 45);
        assert_eq!(Difficulty::Hard.cells_to_remove(), 55);
    }
}
