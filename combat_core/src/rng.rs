//! Random source abstraction for damage rolls and aggression checks

use rand::{Rng, RngCore};
use std::collections::VecDeque;

/// The two kinds of draws the combat engine makes
pub trait CombatRng {
    /// Uniform integer in `[min, max]` inclusive
    fn next_int(&mut self, min: u32, max: u32) -> u32;

    /// Uniform float in `[0, 1)`
    fn next_float(&mut self) -> f64;

    /// Uniform index in `[0, len)`; `len` must be non-zero
    fn next_index(&mut self, len: usize) -> usize {
        let max = len.saturating_sub(1).min(u32::MAX as usize) as u32;
        self.next_int(0, max) as usize
    }
}

/// Adapter turning any `rand` generator into a [`CombatRng`]
#[derive(Debug, Clone)]
pub struct RandSource<R> {
    inner: R,
}

impl<R: RngCore> RandSource<R> {
    pub fn new(inner: R) -> Self {
        RandSource { inner }
    }
}

impl<R: RngCore> CombatRng for RandSource<R> {
    fn next_int(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.inner.gen_range(min..=max)
    }

    fn next_float(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Deterministic source replaying queued values
///
/// Scripted integers are clamped into the requested range. Once a queue
/// runs dry, integers yield `min` and floats yield a value just below 1.0,
/// so an exhausted script never passes a chance check.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    ints: VecDeque<u32>,
    floats: VecDeque<f64>,
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ints(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.ints.extend(values);
        self
    }

    pub fn with_floats(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.floats.extend(values);
        self
    }

    /// Number of queued values not yet consumed (ints, floats)
    pub fn remaining(&self) -> (usize, usize) {
        (self.ints.len(), self.floats.len())
    }
}

impl CombatRng for ScriptedRng {
    fn next_int(&mut self, min: u32, max: u32) -> u32 {
        match self.ints.pop_front() {
            Some(value) => value.clamp(min, max.max(min)),
            None => min,
        }
    }

    fn next_float(&mut self) -> f64 {
        self.floats.pop_front().unwrap_or(1.0 - f64::EPSILON)
    }
}
