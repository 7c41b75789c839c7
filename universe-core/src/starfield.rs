//! Decorative drifting starfield behind the concept universe.

use glam::Vec2;
use rand::Rng;

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub z: f32,
    pub speed: f32,
    pub size: f32,
    pub opacity: f32,
}

/// A wholesale-regenerated particle set.
#[derive(Debug, Default)]
pub struct Starfield {
    pub particles: Vec<Particle>,
}

impl Starfield {
    /// Replaces the entire particle set with `count` fresh particles.
    ///
    /// Regeneration is a full atomic replacement; nothing from the previous
    /// set survives, so rapid control changes cannot mix old and new sets.
    pub fn regenerate(&mut self, count: usize, extent: Vec2, rng: &mut impl Rng) {
        self.particles = (0..count)
            .map(|_| Particle {
                pos: Vec2::new(
                    rng.random_range(0.0..extent.x),
                    rng.random_range(0.0..extent.y),
                ),
                z: rng.random_range(-100.0..=100.0),
                speed: 0.2 + rng.random_range(0.0..0.3),
                size: 1.0 + rng.random_range(0.0..2.0),
                opacity: 0.1 + rng.random_range(0.0..0.5),
            })
            .collect();
    }

    /// Advances every particle by one frame.
    ///
    /// x drifts by the particle's speed and wraps to 0 past the right edge;
    /// y gets a small sinusoidal bob and wraps at both vertical edges.
    pub fn advance(&mut self, time: f64, extent: Vec2) {
        for p in &mut self.particles {
            p.pos.x += p.speed;
            p.pos.y += ((time * 0.001 + (p.pos.x * 0.01) as f64).sin() as f32) * 0.5;

            if p.pos.x > extent.x {
                p.pos.x = 0.0;
            }
            if p.pos.y > extent.y {
                p.pos.y = 0.0;
            }
            if p.pos.y < 0.0 {
                p.pos.y = extent.y;
            }
        }
    }
}
