//! Randomness draws for the event simulator.
//!
//! Every random decision the simulator makes consumes one uniform draw
//! in `[0, 1)` from a [`DrawSource`]. Abstracting the draws behind a
//! trait makes event selection a pure function of the draw sequence:
//! production runs use a thread-local RNG, tests feed a fixed script
//! and get fully deterministic mutations back.

use std::collections::VecDeque;

use rand::Rng;

/// A source of uniform random draws in `[0, 1)`.
pub trait DrawSource: Send {
    /// Produce the next draw.
    fn draw(&mut self) -> f64;
}

/// Thread-local RNG backed draws. The production source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RngDraws;

impl RngDraws {
    /// Create a new RNG-backed draw source.
    pub const fn new() -> Self {
        Self
    }
}

impl DrawSource for RngDraws {
    fn draw(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// A fixed sequence of draws for deterministic tests.
///
/// Once the script is exhausted every further draw returns `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    script: VecDeque<f64>,
}

impl ScriptedDraws {
    /// Create a scripted source from a draw sequence.
    pub fn new(script: impl IntoIterator<Item = f64>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Number of draws remaining in the script.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DrawSource for ScriptedDraws {
    fn draw(&mut self) -> f64 {
        self.script.pop_front().unwrap_or(0.0)
    }
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn scripted_draws_replay_in_order() {
        let mut draws = ScriptedDraws::new([0.1, 0.5, 0.9]);
        assert!((draws.draw() - 0.1).abs() < f64::EPSILON);
        assert!((draws.draw() - 0.5).abs() < f64::EPSILON);
        assert!((draws.draw() - 0.9).abs() < f64::EPSILON);
        assert_eq!(draws.remaining(), 0);
    }

    #[test]
    fn exhausted_script_yields_zero() {
        let mut draws = ScriptedDraws::default();
        assert!(draws.draw().abs() < f64::EPSILON);
    }

    #[test]
    fn rng_draws_stay_in_unit_interval() {
        let mut draws = RngDraws::new();
        for _ in 0..100 {
            let value = draws.draw();
            assert!((0.0..1.0).contains(&value));
        }
    }
}
