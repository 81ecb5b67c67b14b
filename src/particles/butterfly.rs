use std::f64::consts::TAU;

use rand::{rngs::StdRng, seq::SliceRandom, Rng};

use super::{runtime_rng, ParticleSystem, Viewport};

pub static BUTTERFLY_COLORS: &[&str] = &[
    "#FFB3E6", // soft pink
    "#B3E5FF", // light blue
    "#E6B3FF", // lavender
    "#FFE6B3", // soft yellow
    "#B3FFE6", // mint
    "#FFD1B3", // peach
    "#D1B3FF", // light purple
];

const SWARM_SIZE: usize = 7;
const WRAP_MARGIN: f64 = 50.0;
const TRAIL_SPACING: f64 = 5.0;
const TRAIL_START_OPACITY: f64 = 0.5;
const TRAIL_DECAY: f64 = 0.95;
const TRAIL_FLOOR: f64 = 0.05;
const TRAIL_MAX: usize = 15;
const WING_STEP: f64 = 0.15;
const FRAMES_PER_SECOND: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Butterfly {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
    /// Heading in radians.
    pub direction: f64,
    pub wing_phase: f64,
    pub color: &'static str,
    pub opacity: f64,
    pub trail: Vec<TrailPoint>,
}

impl Butterfly {
    fn random(id: usize, viewport: Viewport, rng: &mut StdRng) -> Self {
        Self {
            id,
            x: rng.gen::<f64>() * viewport.width,
            y: rng.gen::<f64>() * viewport.height,
            size: rng.gen_range(20.0..50.0),
            speed: rng.gen_range(0.3..1.0),
            direction: rng.gen::<f64>() * TAU,
            wing_phase: rng.gen::<f64>() * TAU,
            color: BUTTERFLY_COLORS.choose(rng).copied().unwrap_or("#FFFFFF"),
            opacity: rng.gen_range(0.3..0.7),
            trail: Vec::with_capacity(TRAIL_MAX + 1),
        }
    }

    /// Current wing rotation offset, a gentle flap around the body.
    pub fn wing_offset(&self) -> f64 {
        self.wing_phase.sin() * 0.3
    }

    fn step(&mut self, seconds: f64, viewport: Viewport, rng: &mut StdRng) {
        self.direction += (rng.gen::<f64>() - 0.5) * 0.1;
        self.x += self.direction.cos() * self.speed;
        self.y += self.direction.sin() * self.speed + (seconds + self.id as f64).sin() * 0.2;
        self.wing_phase += WING_STEP;

        let moved = self.trail.last().map_or(true, |last| {
            (last.x - self.x).abs() > TRAIL_SPACING || (last.y - self.y).abs() > TRAIL_SPACING
        });
        if moved {
            self.trail.push(TrailPoint {
                x: self.x,
                y: self.y,
                opacity: TRAIL_START_OPACITY,
            });
        }
        for point in self.trail.iter_mut() {
            point.opacity *= TRAIL_DECAY;
        }
        self.trail.retain(|p| p.opacity > TRAIL_FLOOR);
        if self.trail.len() > TRAIL_MAX {
            let excess = self.trail.len() - TRAIL_MAX;
            self.trail.drain(..excess);
        }

        if self.x < -WRAP_MARGIN {
            self.x = viewport.width + WRAP_MARGIN;
        } else if self.x > viewport.width + WRAP_MARGIN {
            self.x = -WRAP_MARGIN;
        }
        if self.y < -WRAP_MARGIN {
            self.y = viewport.height + WRAP_MARGIN;
        } else if self.y > viewport.height + WRAP_MARGIN {
            self.y = -WRAP_MARGIN;
        }
    }
}

/// Slow, wrapping butterflies with a sparkle trail. Nothing ever expires.
pub struct ButterflySwarm {
    butterflies: Vec<Butterfly>,
    rng: StdRng,
    frame: u64,
}

impl ButterflySwarm {
    pub fn new() -> Self {
        Self::with_seed(None)
    }

    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            butterflies: Vec::with_capacity(SWARM_SIZE),
            rng: runtime_rng(seed),
            frame: 0,
        }
    }

    pub fn butterflies(&self) -> &[Butterfly] {
        &self.butterflies
    }
}

impl Default for ButterflySwarm {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleSystem for ButterflySwarm {
    fn seed(&mut self, viewport: Viewport) {
        let rng = &mut self.rng;
        self.butterflies = (0..SWARM_SIZE)
            .map(|id| Butterfly::random(id, viewport, rng))
            .collect();
        self.frame = 0;
    }

    fn tick(&mut self, viewport: Viewport) {
        self.frame += 1;
        let seconds = self.frame as f64 / FRAMES_PER_SECOND;
        for butterfly in self.butterflies.iter_mut() {
            butterfly.step(seconds, viewport, &mut self.rng);
        }
    }

    fn len(&self) -> usize {
        self.butterflies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swarm() -> (ButterflySwarm, Viewport) {
        let viewport = Viewport::new(800.0, 600.0);
        let mut swarm = ButterflySwarm::with_seed(Some(42));
        swarm.seed(viewport);
        (swarm, viewport)
    }

    #[test]
    fn test_seed_attributes_in_range() {
        let (swarm, viewport) = swarm();
        assert_eq!(swarm.len(), SWARM_SIZE);
        for b in swarm.butterflies() {
            assert!(viewport.contains(b.x, b.y));
            assert!((20.0..50.0).contains(&b.size));
            assert!((0.3..1.0).contains(&b.speed));
            assert!((0.3..0.7).contains(&b.opacity));
            assert!(BUTTERFLY_COLORS.contains(&b.color));
            assert!(b.trail.is_empty());
        }
    }

    #[test]
    fn test_trail_bounded_and_fading() {
        let (mut swarm, viewport) = swarm();
        let mut previous: Vec<Vec<TrailPoint>> = vec![Vec::new(); SWARM_SIZE];
        for _ in 0..500 {
            swarm.tick(viewport);
            for (b, prev) in swarm.butterflies().iter().zip(previous.iter()) {
                assert!(b.trail.len() <= TRAIL_MAX);
                assert!(b.trail.iter().all(|p| p.opacity > TRAIL_FLOOR));
                assert!(b.trail.iter().all(|p| p.opacity <= TRAIL_START_OPACITY));
                // surviving points keep their position and only lose opacity
                for point in &b.trail {
                    if let Some(old) = prev.iter().find(|o| o.x == point.x && o.y == point.y) {
                        assert!(point.opacity <= old.opacity);
                    }
                }
            }
            previous = swarm
                .butterflies()
                .iter()
                .map(|b| b.trail.clone())
                .collect();
        }
    }

    #[test]
    fn test_wraps_at_margin() {
        let (mut swarm, viewport) = swarm();
        swarm.butterflies[0].x = -WRAP_MARGIN - 10.0;
        swarm.butterflies[0].speed = 0.0;
        swarm.butterflies[1].y = viewport.height + WRAP_MARGIN + 10.0;
        swarm.butterflies[1].speed = 0.0;
        swarm.tick(viewport);
        assert_eq!(swarm.butterflies[0].x, viewport.width + WRAP_MARGIN);
        assert_eq!(swarm.butterflies[1].y, -WRAP_MARGIN);
    }

    #[test]
    fn test_never_expires() {
        let (mut swarm, viewport) = swarm();
        let opacities = swarm
            .butterflies()
            .iter()
            .map(|b| b.opacity)
            .collect::<Vec<_>>();
        for _ in 0..1000 {
            swarm.tick(viewport);
        }
        assert_eq!(swarm.len(), SWARM_SIZE);
        let after = swarm
            .butterflies()
            .iter()
            .map(|b| b.opacity)
            .collect::<Vec<_>>();
        assert_eq!(opacities, after);
    }

    #[test]
    fn test_wing_phase_advances() {
        let (mut swarm, viewport) = swarm();
        let before = swarm.butterflies()[3].wing_phase;
        swarm.tick(viewport);
        let after = swarm.butterflies()[3].wing_phase;
        assert!((after - before - WING_STEP).abs() < 1e-9);
        assert!(swarm.butterflies()[3].wing_offset().abs() <= 0.3);
    }
}
