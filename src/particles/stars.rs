use std::collections::VecDeque;

use rand::{rngs::StdRng, seq::SliceRandom, Rng};

use super::{runtime_rng, ParticleSystem, Viewport};

const MAX_STARS: usize = 50;
const SPAWN_CHANCE: f64 = 0.3;
const MAX_LIFESPAN: f64 = 60.0;
const START_OPACITY: f64 = 0.8;
const FRICTION: f64 = 0.96;
const GRAVITY: f64 = 0.05;

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub color: &'static str,
    pub opacity: f64,
    /// Frames left before removal.
    pub lifespan: f64,
}

impl Star {
    /// 1.0 when fresh, 0.0 when about to be removed.
    pub fn fade_ratio(&self) -> f64 {
        (self.lifespan / MAX_LIFESPAN).clamp(0.0, 1.0)
    }

    /// Stars swell slightly as they fade.
    pub fn radius(&self) -> f64 {
        self.size * (1.0 + (1.0 - self.fade_ratio()) * 0.5)
    }
}

/// Sparkles that follow the pointer, fall under light gravity and fade out.
///
/// Nothing is emitted until the first pointer move activates tracking.
pub struct StarTrail {
    stars: VecDeque<Star>,
    palette: &'static [&'static str],
    rng: StdRng,
    active: bool,
    next_id: u64,
}

impl StarTrail {
    pub fn new(palette: &'static [&'static str]) -> Self {
        Self::with_seed(palette, None)
    }

    pub fn with_seed(palette: &'static [&'static str], seed: Option<u64>) -> Self {
        Self {
            stars: VecDeque::with_capacity(MAX_STARS + 1),
            palette,
            rng: runtime_rng(seed),
            active: false,
            next_id: 0,
        }
    }

    pub fn stars(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_palette(&mut self, palette: &'static [&'static str]) {
        self.palette = palette;
    }

    /// Called for every pointer move. Returns whether a star was emitted.
    pub fn spawn(&mut self, x: f64, y: f64) -> bool {
        self.active = true;
        if self.rng.gen::<f64>() > SPAWN_CHANCE {
            return false;
        }
        self.next_id += 1;
        let star = Star {
            id: self.next_id,
            x,
            y,
            vx: (self.rng.gen::<f64>() - 0.5) * 2.0,
            vy: (self.rng.gen::<f64>() - 0.5) * 2.0 - 1.5,
            size: self.rng.gen_range(1.0..4.0),
            color: self.palette.choose(&mut self.rng).copied().unwrap_or("#ffffff"),
            opacity: START_OPACITY,
            lifespan: self.rng.gen_range(30.0..MAX_LIFESPAN),
        };
        self.stars.push_back(star);
        if self.stars.len() > MAX_STARS {
            self.stars.pop_front();
        }
        true
    }
}

impl ParticleSystem for StarTrail {
    fn seed(&mut self, _viewport: Viewport) {
        self.stars.clear();
    }

    fn tick(&mut self, _viewport: Viewport) {
        for star in self.stars.iter_mut() {
            star.x += star.vx;
            star.y += star.vy;
            star.vx *= FRICTION;
            star.vy = star.vy * FRICTION + GRAVITY;
            star.lifespan -= 1.0;
            star.opacity = star.fade_ratio() * START_OPACITY;
        }
        self.stars.retain(|s| s.lifespan > 0.0);
    }

    fn len(&self) -> usize {
        self.stars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    static PALETTE: &[&str] = &["#6C63FF", "#2EC4B6"];

    fn trail_with(n: usize) -> StarTrail {
        let mut trail = StarTrail::with_seed(PALETTE, Some(9));
        let mut emitted = 0;
        while emitted < n {
            if trail.spawn(100.0, 100.0) {
                emitted += 1;
            }
        }
        trail
    }

    #[test]
    fn test_inactive_until_first_move() {
        let mut trail = StarTrail::with_seed(PALETTE, Some(1));
        assert!(!trail.is_active());
        trail.tick(Viewport::default());
        assert!(trail.is_empty());
        trail.spawn(0.0, 0.0);
        assert!(trail.is_active());
    }

    #[test]
    fn test_spawn_rate_roughly_thirty_percent() {
        let mut trail = StarTrail::with_seed(PALETTE, Some(3));
        let emitted = (0..10_000)
            .filter(|_| {
                let hit = trail.spawn(1.0, 1.0);
                trail.stars.clear();
                hit
            })
            .count();
        assert!((2_500..3_500).contains(&emitted), "emitted {emitted}");
    }

    #[test]
    fn test_capped_at_fifty() {
        let trail = trail_with(120);
        assert_eq!(trail.len(), MAX_STARS);
    }

    #[test]
    fn test_opacity_never_increases_and_stars_expire() {
        let mut trail = trail_with(20);
        for star in trail.stars() {
            assert_eq!(star.opacity, START_OPACITY);
            assert!(PALETTE.contains(&star.color));
        }
        let viewport = Viewport::default();
        let mut last = trail
            .stars()
            .map(|s| (s.id, s.opacity))
            .collect::<HashMap<_, _>>();
        for _ in 0..MAX_LIFESPAN as usize {
            trail.tick(viewport);
            for star in trail.stars() {
                let before = last.get(&star.id).copied().expect("no star is created by tick");
                assert!(star.opacity <= before);
                assert!(star.opacity > 0.0);
                assert!(star.lifespan > 0.0);
            }
            last = trail.stars().map(|s| (s.id, s.opacity)).collect();
        }
        assert!(trail.is_empty());
    }

    #[test]
    fn test_gravity_pulls_down() {
        let mut trail = trail_with(1);
        let vy = trail.stars().next().map(|s| s.vy).unwrap_or_default();
        trail.tick(Viewport::default());
        let star = trail.stars().next().expect("star should survive one tick");
        assert!((star.vy - (vy * FRICTION + GRAVITY)).abs() < 1e-9);
        assert!(star.radius() >= star.size);
    }
}
