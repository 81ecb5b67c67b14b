//! Particle systems behind the decorative canvases.
//!
//! These types know nothing about the DOM. The canvas hook owns one system,
//! calls [`ParticleSystem::tick`] once per animation frame and paints the
//! result; tests drive the same systems with a seeded RNG.

mod butterfly;
mod starfield;
mod stars;

pub use butterfly::{Butterfly, ButterflySwarm, TrailPoint, BUTTERFLY_COLORS};
pub use starfield::{FieldStar, Starfield};
pub use stars::{Star, StarTrail};

use rand::{rngs::StdRng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

pub trait ParticleSystem {
    /// Replaces the particle set with a fresh one sized for `viewport`.
    fn seed(&mut self, viewport: Viewport);

    fn resize(&mut self, viewport: Viewport) {
        let _ = viewport;
    }

    /// Advances every particle by one frame.
    fn tick(&mut self, viewport: Viewport);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub(crate) fn runtime_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_clamps_negative() {
        let v = Viewport::new(-10.0, 20.0);
        assert_eq!(v.width, 0.0);
        assert_eq!(v.area(), 0.0);
        assert!(v.contains(0.0, 20.0));
        assert!(!v.contains(0.1, 20.0));
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        use rand::Rng;
        let a = runtime_rng(Some(7)).gen::<u64>();
        let b = runtime_rng(Some(7)).gen::<u64>();
        assert_eq!(a, b);
    }
}
