//! Randomized depth first maze carving, one traversal move per step.
//!
//! The generator keeps the current path from the start cell to the active
//! cell. Each step either carves into a random unvisited neighbor of the
//! active cell and pushes it, or pops the active cell when it has none left.
//! Once the path empties every cell has been visited and the open walls form
//! a spanning tree over the grid.
//!
//! Nothing in here waits on a clock. `tick_interval` is only a hint for
//! whatever drives `step`.

use std::time::Duration;

use crate::config::{GeneratorConfig, INSTANT_INTERVAL, SPEED_STEP};
use crate::error::{MazeError, Result};
use crate::generators::{Generator, GeneratorState, RandomSource, RngSource};
use crate::grids::{Coord, WallGrid};
use rand::rngs::StdRng;

pub const START: Coord = (0, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Carved { from: Coord, to: Coord },
    Backtracked { from: Coord },
    /// paused, nothing changed
    Paused,
}

/// What the active cell is about to do on the next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Carving,
    Backtracking,
}

/// Borrowed, read-only view of a generator for renderers.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid: &'a WallGrid,
    pub path: &'a [Coord],
    pub state: GeneratorState,
    pub active: Option<(Coord, Activity)>,
}

impl<'a> Snapshot<'a> {
    pub fn on_path(&self, coord: Coord) -> bool {
        self.path.contains(&coord)
    }
}

pub struct Backtracker<R: RandomSource = RngSource<StdRng>> {
    config: GeneratorConfig,
    grid: WallGrid,
    stack: Vec<Coord>,
    state: GeneratorState,
    rng: R,

    speed: Duration,
    instant_finish: bool,
    // raised on completion, lowered by take_completion or reset
    completion_pending: bool,
}

impl Backtracker {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Self::with_source(config, RngSource::from_entropy())
    }

    pub fn seeded(config: GeneratorConfig, seed: u64) -> Result<Self> {
        Self::with_source(config, RngSource::seeded(seed))
    }
}

impl<R: RandomSource> Backtracker<R> {
    pub fn with_source(config: GeneratorConfig, rng: R) -> Result<Self> {
        let grid = WallGrid::with_dims(config.rows, config.cols)?;

        Ok(Self {
            speed: config.clamp_speed(config.default_speed),
            config,
            grid,
            stack: Vec::with_capacity(config.rows * config.cols),
            state: GeneratorState::Idle,
            rng,
            instant_finish: false,
            completion_pending: false,
        })
    }

    pub fn start(&mut self) -> Result<()> {
        if self.state != GeneratorState::Idle {
            log::debug!("start ignored while {:?}", self.state);
            return Ok(());
        }

        if self.stack.is_empty() {
            self.grid.mark_visited(START)?;
            self.stack.push(START);
        }
        self.state = GeneratorState::Running;
        log::debug!(
            "started {}x{} maze at {:?}",
            self.grid.dims().rows,
            self.grid.dims().columns,
            START
        );

        Ok(())
    }

    pub fn step(&mut self) -> Result<StepOutcome> {
        match self.state {
            GeneratorState::Running => {}
            GeneratorState::Paused => return Ok(StepOutcome::Paused),
            state => return Err(MazeError::NotStarted { state }),
        }

        let current = match self.stack.last() {
            Some(current) => *current,
            None => {
                return Err(MazeError::NotStarted {
                    state: self.state,
                })
            }
        };

        let neighbors = self.grid.unvisited_neighbors(current)?;
        let outcome = if neighbors.is_empty() {
            self.stack.pop();
            StepOutcome::Backtracked { from: current }
        } else {
            let index = self.rng.pick(neighbors.len());
            let next = *neighbors.get(index).ok_or(MazeError::InvalidChoice {
                index,
                len: neighbors.len(),
            })?;

            self.grid.remove_wall_between(current, next)?;
            self.grid.mark_visited(next)?;
            self.stack.push(next);
            StepOutcome::Carved {
                from: current,
                to: next,
            }
        };
        log::trace!("{:?}, path depth {}", outcome, self.stack.len());

        if self.stack.is_empty() {
            self.state = GeneratorState::Complete;
            self.completion_pending = true;
            log::info!(
                "maze complete, {} passages carved",
                self.grid.removed_wall_count()
            );
        }

        Ok(outcome)
    }

    pub fn toggle_run(&mut self) -> Result<GeneratorState> {
        self.state = match self.state {
            GeneratorState::Running => GeneratorState::Paused,
            GeneratorState::Paused => GeneratorState::Running,
            state => return Err(MazeError::NotStarted { state }),
        };
        log::debug!("generation {:?}", self.state);

        Ok(self.state)
    }

    pub fn reset(&mut self) {
        self.grid.clear();
        self.stack.clear();
        self.state = GeneratorState::Idle;
        self.speed = self.config.clamp_speed(self.config.default_speed);
        self.instant_finish = false;
        self.completion_pending = false;
        log::debug!("generator reset");
    }

    /// Returns the interval actually applied.
    pub fn set_speed(&mut self, interval: Duration) -> Duration {
        self.speed = self.config.clamp_speed(interval);
        log::debug!("step interval {:?}", self.speed);
        self.speed
    }

    pub fn speed_up(&mut self) -> Duration {
        let faster = self.speed.checked_sub(SPEED_STEP).unwrap_or_default();
        self.set_speed(faster)
    }

    pub fn slow_down(&mut self) -> Duration {
        self.set_speed(self.speed + SPEED_STEP)
    }

    pub fn set_instant_finish(&mut self, instant: bool) {
        self.instant_finish = instant;
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn instant_finish(&self) -> bool {
        self.instant_finish
    }

    /// How long the scheduler should wait before the next `step`.
    pub fn tick_interval(&self) -> Duration {
        if self.instant_finish {
            INSTANT_INTERVAL
        } else {
            self.speed
        }
    }

    pub fn state(&self) -> GeneratorState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == GeneratorState::Complete
    }

    /// True exactly once per completed maze.
    pub fn take_completion(&mut self) -> bool {
        std::mem::replace(&mut self.completion_pending, false)
    }

    pub fn grid(&self) -> &WallGrid {
        &self.grid
    }

    pub fn path(&self) -> &[Coord] {
        &self.stack
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Active cell and whether the next step carves from it or pops it.
    pub fn active(&self) -> Result<Option<(Coord, Activity)>> {
        let current = match self.stack.last() {
            Some(current) => *current,
            None => return Ok(None),
        };
        let activity = if self.grid.has_unvisited_neighbor(current)? {
            Activity::Carving
        } else {
            Activity::Backtracking
        };

        Ok(Some((current, activity)))
    }

    pub fn snapshot(&self) -> Result<Snapshot<'_>> {
        Ok(Snapshot {
            grid: &self.grid,
            path: &self.stack,
            state: self.state,
            active: self.active()?,
        })
    }
}

impl<R: RandomSource> Generator for Backtracker<R> {
    fn step_generation(&mut self) -> Result<StepOutcome> {
        self.step()
    }

    /// Runs whatever is left of the traversal, ignoring pause and cadence.
    fn generate_maze(&mut self) -> Result<&WallGrid> {
        match self.state {
            GeneratorState::Idle => self.start()?,
            GeneratorState::Paused => {
                self.toggle_run()?;
            }
            _ => {}
        }

        while self.state == GeneratorState::Running {
            self.step()?;
        }

        Ok(&self.grid)
    }

    fn is_done(&self) -> bool {
        self.is_complete()
    }
}
