//! Floating background particles.
//!
//! The field is generated once. A resize moves the existing particles to new
//! random positions; identity, size, duration and delay are kept so the
//! running float animations are not restarted.

use rand::Rng;

use crate::config::ParticleConfig;

/// One decorative particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub size_px: f64,
    /// Horizontal position, percent of the host width
    pub x_pct: f64,
    /// Vertical position, percent of the host height
    pub y_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Particle {
    /// Inline style placing and timing this particle.
    pub fn inline_style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {x:.2}%; top: {y:.2}%; \
             animation-duration: {dur:.2}s; animation-delay: {delay:.2}s;",
            size = self.size_px,
            x = self.x_pct,
            y = self.y_pct,
            dur = self.duration_s,
            delay = self.delay_s,
        )
    }
}

/// The full set of particles on the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Create `config.count` particles with independently random parameters.
    pub fn spawn<R: Rng + ?Sized>(config: &ParticleConfig, rng: &mut R) -> Self {
        let particles = (0..config.count)
            .map(|id| Particle {
                id,
                size_px: rng.random_range(config.size_range()),
                x_pct: random_percent(rng),
                y_pct: random_percent(rng),
                duration_s: rng.random_range(config.duration_range()),
                delay_s: if config.delay_max_s > 0.0 {
                    rng.random_range(0.0..config.delay_max_s)
                } else {
                    0.0
                },
            })
            .collect();
        Self { particles }
    }

    /// Move every particle to a fresh random position in place.
    pub fn reposition<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for particle in &mut self.particles {
            particle.x_pct = random_percent(rng);
            particle.y_pct = random_percent(rng);
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

fn random_percent<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random_range(0.0..=100.0)
}
