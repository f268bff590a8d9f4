use std::time::Duration;

pub const DEFAULT_DIMS: (usize, usize) = (20, 20);
pub const DEFAULT_SPEED: Duration = Duration::from_millis(50);
pub const MIN_SPEED: Duration = Duration::from_millis(10);
/// amount `speed_up`/`slow_down` nudge the step interval by
pub const SPEED_STEP: Duration = Duration::from_millis(10);
/// step interval handed to the scheduler while finishing instantly
pub const INSTANT_INTERVAL: Duration = Duration::from_millis(1);

/// Fixed at construction; a generator never changes its own config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub cols: usize,
    pub default_speed: Duration,
    pub min_speed: Duration,
}

impl GeneratorConfig {
    pub fn with_dims(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn default_speed(mut self, speed: Duration) -> Self {
        self.default_speed = speed;
        self
    }

    pub fn min_speed(mut self, floor: Duration) -> Self {
        self.min_speed = floor;
        self
    }

    /// Floor that is never zero, the interval always has to stay positive.
    pub(crate) fn speed_floor(&self) -> Duration {
        self.min_speed.max(Duration::from_millis(1))
    }

    pub(crate) fn clamp_speed(&self, speed: Duration) -> Duration {
        speed.max(self.speed_floor())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_DIMS.0,
            cols: DEFAULT_DIMS.1,
            default_speed: DEFAULT_SPEED,
            min_speed: MIN_SPEED,
        }
    }
}

#[cfg(test)]
mod test_config {
    use super::*;

    #[test]
    fn defaults() {
        let config = GeneratorConfig::default();
        assert_eq!((config.rows, config.cols), DEFAULT_DIMS);
        assert_eq!(config.default_speed, Duration::from_millis(50));
        assert_eq!(config.min_speed, Duration::from_millis(10));
    }

    #[test]
    fn clamps_to_floor() {
        let config = GeneratorConfig::with_dims(2, 2);
        assert_eq!(config.clamp_speed(Duration::from_millis(3)), MIN_SPEED);
        assert_eq!(config.clamp_speed(Duration::from_secs(5)), Duration::from_secs(5));

        let zero_floor = config.min_speed(Duration::from_millis(0));
        assert_eq!(
            zero_floor.clamp_speed(Duration::from_millis(0)),
            Duration::from_millis(1)
        );
    }
}
