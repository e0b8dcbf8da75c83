// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth 2D pseudo-noise used to score anchor positions.

/// A seeded noise field: a short sum of sine/cosine terms over cell
/// coordinates. Smooth enough to produce organic clusters, cheap enough to
/// evaluate for every candidate anchor.
#[derive(Clone, Copy, Debug)]
pub struct Noise {
    seed: f64,
}

impl Noise {
    /// Creates a field from a seed in roughly `0..10000`.
    #[must_use]
    pub fn new(seed: f64) -> Self {
        Self { seed }
    }

    /// Samples the field at a cell coordinate. The result is in about
    /// `-1.8..1.8`; only the relative ordering matters.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let s = self.seed;
        let n1 = (x * 0.7 + s).sin() * (y * 0.9 + s * 0.7).cos();
        let n2 = (x * 1.3 + y * 0.8 + s * 1.2).sin() * 0.5;
        let n3 = (x * 0.4 - y * 1.1 + s * 0.3).cos() * 0.3;
        n1 + n2 + n3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_field() {
        let a = Noise::new(42.0);
        let b = Noise::new(42.0);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(a.sample(x as f64, y as f64), b.sample(x as f64, y as f64));
            }
        }
    }

    #[test]
    fn bounded_amplitude() {
        let noise = Noise::new(1234.5);
        for y in 0..32 {
            for x in 0..32 {
                let v = noise.sample(x as f64, y as f64);
                assert!(v.abs() <= 1.8, "noise out of range: {v}");
            }
        }
    }
}
