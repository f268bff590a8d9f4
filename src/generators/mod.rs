pub mod backtracker;
pub mod rng;

pub use backtracker::{Activity, Backtracker, Snapshot, StepOutcome};
pub use rng::{RandomSource, RngSource, ScriptedSource};

use crate::error::Result;
use crate::grids::WallGrid;

pub trait Generator {
    fn step_generation(&mut self) -> Result<StepOutcome>;
    fn generate_maze(&mut self) -> Result<&WallGrid>;
    fn is_done(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    /// nothing visited, path empty
    Idle,
    Running,
    Paused,
    /// path emptied after every cell was carved into
    Complete,
}
