use rand::prelude::*;
use rand::rngs::StdRng;

/// Source of the random choices a generator makes.
pub trait RandomSource {
    /// Picks an index in `0..len`. Never called with `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Adapts any `rand` generator into a `RandomSource`.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng>(pub R);

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        RngSource(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        RngSource(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0, len)
    }
}

/// Replays a fixed list of picks, wrapping around once exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    picks: Vec<usize>,
    next: usize,
}

impl ScriptedSource {
    /// Panics when `picks` is empty.
    pub fn new(picks: Vec<usize>) -> Self {
        assert!(!picks.is_empty(), "scripted source needs at least one pick");
        Self { picks, next: 0 }
    }

    /// Always takes the first candidate.
    pub fn first() -> Self {
        Self::new(vec![0])
    }
}

impl RandomSource for ScriptedSource {
    fn pick(&mut self, _len: usize) -> usize {
        let pick = self.picks[self.next % self.picks.len()];
        self.next += 1;
        pick
    }
}
