use rand::{rngs::StdRng, seq::SliceRandom, Rng};

use super::{runtime_rng, ParticleSystem, Viewport};

const MIN_STARS: usize = 40;
const MAX_STARS: usize = 140;
const AREA_PER_STAR: f64 = 12_000.0;
const MAX_DRIFT: f64 = 0.15;

#[derive(Debug, Clone, PartialEq)]
pub struct FieldStar {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub opacity: f64,
    pub color: &'static str,
}

/// Ambient background of slowly drifting stars that wrap at the edges.
///
/// Painted with faint links between close neighbours, which gives the
/// "topology" look. Stars keep a constant opacity for their whole life.
pub struct Starfield {
    stars: Vec<FieldStar>,
    palette: &'static [&'static str],
    rng: StdRng,
    viewport: Viewport,
}

impl Starfield {
    pub fn new(palette: &'static [&'static str]) -> Self {
        Self::with_seed(palette, None)
    }

    pub fn with_seed(palette: &'static [&'static str], seed: Option<u64>) -> Self {
        Self {
            stars: Vec::new(),
            palette,
            rng: runtime_rng(seed),
            viewport: Viewport::default(),
        }
    }

    pub fn stars(&self) -> &[FieldStar] {
        &self.stars
    }

    /// Swaps the palette and recolours the stars already on screen.
    pub fn set_palette(&mut self, palette: &'static [&'static str]) {
        if palette.is_empty() {
            return;
        }
        self.palette = palette;
        for (i, star) in self.stars.iter_mut().enumerate() {
            star.color = palette[i % palette.len()];
        }
    }

    pub fn target_count(viewport: Viewport) -> usize {
        ((viewport.area() / AREA_PER_STAR) as usize).clamp(MIN_STARS, MAX_STARS)
    }

    /// Pairs of stars closer than `max_distance`, with a link strength in `0.0..=1.0`
    /// that falls off linearly with distance.
    pub fn links(&self, max_distance: f64) -> impl Iterator<Item = (&FieldStar, &FieldStar, f64)> {
        let stars = &self.stars;
        stars.iter().enumerate().flat_map(move |(i, a)| {
            stars[i + 1..].iter().filter_map(move |b| {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                (distance < max_distance).then(|| (a, b, 1.0 - distance / max_distance))
            })
        })
    }

    fn random_star(&mut self, viewport: Viewport) -> FieldStar {
        FieldStar {
            x: self.rng.gen::<f64>() * viewport.width,
            y: self.rng.gen::<f64>() * viewport.height,
            vx: self.rng.gen_range(-MAX_DRIFT..MAX_DRIFT),
            vy: self.rng.gen_range(-MAX_DRIFT..MAX_DRIFT),
            radius: self.rng.gen_range(0.5..1.8),
            opacity: self.rng.gen_range(0.3..0.9),
            color: self.palette.choose(&mut self.rng).copied().unwrap_or("#ffffff"),
        }
    }
}

fn wrap(value: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        0.0
    } else {
        value.rem_euclid(extent)
    }
}

impl ParticleSystem for Starfield {
    fn seed(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let count = Self::target_count(viewport);
        let stars: Vec<FieldStar> = (0..count).map(|_| self.random_star(viewport)).collect();
        self.stars = stars;
    }

    fn resize(&mut self, viewport: Viewport) {
        let old = self.viewport;
        let sx = if old.width > 0.0 { viewport.width / old.width } else { 0.0 };
        let sy = if old.height > 0.0 { viewport.height / old.height } else { 0.0 };
        for star in self.stars.iter_mut() {
            star.x = wrap(star.x * sx, viewport.width);
            star.y = wrap(star.y * sy, viewport.height);
        }
        let target = Self::target_count(viewport);
        if self.stars.len() > target {
            self.stars.truncate(target);
        }
        while self.stars.len() < target {
            let star = self.random_star(viewport);
            self.stars.push(star);
        }
        self.viewport = viewport;
    }

    fn tick(&mut self, viewport: Viewport) {
        for star in self.stars.iter_mut() {
            star.x = wrap(star.x + star.vx, viewport.width);
            star.y = wrap(star.y + star.vy, viewport.height);
        }
    }

    fn len(&self) -> usize {
        self.stars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static PALETTE: &[&str] = &["#ffffff"];

    #[test]
    fn test_count_scales_with_area() {
        assert_eq!(Starfield::target_count(Viewport::new(100.0, 100.0)), MIN_STARS);
        assert_eq!(Starfield::target_count(Viewport::new(1200.0, 800.0)), 80);
        assert_eq!(Starfield::target_count(Viewport::new(4000.0, 4000.0)), MAX_STARS);
    }

    #[test]
    fn test_stays_inside_viewport() {
        let viewport = Viewport::new(300.0, 200.0);
        let mut field = Starfield::with_seed(PALETTE, Some(5));
        field.seed(viewport);
        let opacities = field.stars().iter().map(|s| s.opacity).collect::<Vec<_>>();
        for _ in 0..5_000 {
            field.tick(viewport);
            assert!(field.stars().iter().all(|s| viewport.contains(s.x, s.y)));
        }
        let after = field.stars().iter().map(|s| s.opacity).collect::<Vec<_>>();
        assert_eq!(opacities, after);
    }

    #[test]
    fn test_resize_rescales_and_refills() {
        let small = Viewport::new(400.0, 300.0);
        let large = Viewport::new(1600.0, 1200.0);
        let mut field = Starfield::with_seed(PALETTE, Some(11));
        field.seed(small);
        assert_eq!(field.len(), MIN_STARS);
        field.resize(large);
        assert_eq!(field.len(), Starfield::target_count(large));
        assert!(field.stars().iter().all(|s| large.contains(s.x, s.y)));
        field.resize(small);
        assert_eq!(field.len(), MIN_STARS);
        assert!(field.stars().iter().all(|s| small.contains(s.x, s.y)));
    }

    #[test]
    fn test_links_respect_distance() {
        let mut field = Starfield::with_seed(PALETTE, Some(2));
        field.seed(Viewport::new(400.0, 400.0));
        for (a, b, strength) in field.links(80.0) {
            let d = (a.x - b.x).hypot(a.y - b.y);
            assert!(d < 80.0);
            assert!((0.0..=1.0).contains(&strength));
        }
        assert_eq!(field.links(0.0).count(), 0);
    }

    #[test]
    fn test_set_palette_recolours() {
        static OTHER: &[&str] = &["#000000", "#111111"];
        let mut field = Starfield::with_seed(PALETTE, Some(3));
        field.seed(Viewport::new(500.0, 500.0));
        field.set_palette(OTHER);
        assert!(field.stars().iter().all(|s| OTHER.contains(&s.color)));
        field.set_palette(&[]);
        assert!(field.stars().iter().all(|s| OTHER.contains(&s.color)));
    }

    #[test]
    fn test_zero_viewport_does_not_panic() {
        let mut field = Starfield::with_seed(PALETTE, Some(2));
        field.seed(Viewport::new(0.0, 0.0));
        field.tick(Viewport::new(0.0, 0.0));
        assert!(field.stars().iter().all(|s| s.x == 0.0 && s.y == 0.0));
    }
}
