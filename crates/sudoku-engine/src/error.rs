use serde::{Deserialize, Serialize};

/// Contract violations on the engine's call surface.
///
/// The engine treats out-of-range indices and values as programmer errors:
/// the panicking entry points fail fast, while the `try_` variants report
/// the same conditions as values for callers that propagate with `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    /// Row or column outside [0,8]
    InvalidIndex { row: usize, col: usize },
    /// Cell value outside [1,9]
    InvalidValue(u8),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidIndex { row, col } => {
                write!(f, "position ({}, {}) is outside the 9x9 grid", row, col)
            }
            EngineError::InvalidValue(value) => {
                write!(f, "cell value {} is outside 1..=9", value)
            }
        }
    }
}

impl std::error::Error for EngineError {}
