//! Sine-hash random draws.
//!
//! Shared seeds must keep producing identical layouts, so the transform never changes:
//! `frac(sin(value) * 10000)` scaled into the requested range.

/// Draws a value in `[min, max)` for a single counter value.
///
/// The range is not validated, `max <= min` simply applies the same formula.
pub fn seeded_random(value: i64, max: i64, min: i64) -> i64 {
    let x = (value as f64).sin() * 10000.0;
    let fraction = x - x.floor();
    (fraction * (max - min) as f64 + min as f64).floor() as i64
}

/// Running counter for one generation phase, each draw consumes the next value.
#[derive(Clone, Debug, PartialEq)]
pub struct SeedCursor {
    counter: i64,
}

impl SeedCursor {
    pub fn new(seed: i64) -> Self {
        Self { counter: seed }
    }

    pub fn next(&mut self, max: i64, min: i64) -> i64 {
        let value = seeded_random(self.counter, max, min);
        self.counter = self.counter.wrapping_add(1);
        value
    }

    /// Draws in `[0, max)`.
    pub fn below(&mut self, max: i64) -> i64 {
        self.next(max, 0)
    }

    /// `true` with a `percent` in 100 chance.
    pub fn chance(&mut self, percent: u8) -> bool {
        self.below(100) < i64::from(percent)
    }
}
