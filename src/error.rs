use thiserror::Error;

use crate::generators::GeneratorState;
use crate::grids::{Coord, Dimensions};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MazeError {
    #[error("invalid grid dimensions {rows}x{cols}, both must be at least 1")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("coordinate {coord:?} is outside of a {}x{} grid", .dims.rows, .dims.columns)]
    OutOfBounds { coord: Coord, dims: Dimensions },

    #[error("cells {a:?} and {b:?} are not neighbors")]
    NotAdjacent { a: Coord, b: Coord },

    #[error("generation is not in progress (state: {state:?})")]
    NotStarted { state: GeneratorState },

    /// random source picked outside of the candidate list
    #[error("random source picked index {index} out of {len} candidates")]
    InvalidChoice { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, MazeError>;
