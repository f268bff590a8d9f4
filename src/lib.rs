//! Step-by-step randomized depth first maze generation.
//!
//! [`generators::Backtracker`] owns a [`grids::WallGrid`] and carves one
//! passage (or backtracks one cell) per [`step`](generators::Backtracker::step).
//! Drawing, timers and input live outside this crate and read the generator
//! through [`generators::Snapshot`].

pub mod config;
pub mod error;
pub mod generators;
pub mod grids;

pub use config::GeneratorConfig;
pub use error::{MazeError, Result};
pub use generators::{Activity, Backtracker, Generator, GeneratorState, Snapshot, StepOutcome};
pub use grids::{Coord, Dimensions, Direction, WallGrid};
