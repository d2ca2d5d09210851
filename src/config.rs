use crate::{algebra::DEFAULT_DIVISION_EPSILON, glyphs::Glyphs};

/// How many sides an equation may have.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChainPolicy {
    /// Exactly one `=`, so exactly two sides.
    ExactlyTwo,
    /// Any number of `=`, where every side must equal the first.
    AllEqual,
}

impl Default for ChainPolicy {
    fn default() -> Self { ChainPolicy::ExactlyTwo }
}

/// Tuning knobs for a [`crate::Checker`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CheckerConfig {
    /// Relative tolerance, scaled by the larger of the two magnitudes.
    pub relative_tolerance: f64,
    /// Absolute tolerance, used when values are close to zero.
    pub absolute_tolerance: f64,
    /// Divisors with a smaller magnitude are treated as zero.
    pub division_epsilon: f64,
    pub chain: ChainPolicy,
    pub glyphs: Glyphs,
}

impl CheckerConfig {
    pub fn new() -> Self { CheckerConfig::default() }

    pub fn with_tolerances(mut self, relative: f64, absolute: f64) -> Self {
        self.relative_tolerance = relative;
        self.absolute_tolerance = absolute;
        self
    }

    pub fn with_division_epsilon(mut self, epsilon: f64) -> Self {
        self.division_epsilon = epsilon;
        self
    }

    pub fn with_chain(mut self, chain: ChainPolicy) -> Self {
        self.chain = chain;
        self
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Are `a` and `b` equal within tolerance?
    ///
    /// This is `|a - b| <= max(relative * max(|a|, |b|), absolute)`.
    pub fn values_match(&self, a: f64, b: f64) -> bool {
        approx::relative_eq!(
            a,
            b,
            epsilon = self.absolute_tolerance,
            max_relative = self.relative_tolerance
        )
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            relative_tolerance: 1e-9,
            absolute_tolerance: 1e-6,
            division_epsilon: DEFAULT_DIVISION_EPSILON,
            chain: ChainPolicy::default(),
            glyphs: Glyphs::default(),
        }
    }
}
