//! Ambient field of drifting points with mouse attraction.
//!
//! The typical host loop looks like:
//! 1. Feed input — [`FieldEngine::set_mouse`] on pointer move/leave,
//!    [`FieldEngine::set_extent`] on viewport resize.
//! 2. [`FieldEngine::tick`] — advance every point by one frame.
//! 3. [`FieldEngine::links`] — derive the proximity links to draw.

use crate::config::FieldConfig;
use glam::Vec2;
use rand::Rng;

/// A single drifting point.
#[derive(Debug, Clone, Copy)]
pub struct FieldPoint {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// A renderable link between two points, identified by their indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLink {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

/// Engine owning a fixed-size set of drifting points.
///
/// Points bounce off the viewport edges and are gently pulled toward the
/// mouse while it is inside the attraction radius. The proximity links are
/// derived fresh on every [`FieldEngine::links`] call and never cached.
#[derive(Debug)]
pub struct FieldEngine {
    pub points: Vec<FieldPoint>,
    extent: Vec2,
    mouse: Option<Vec2>,
    cfg: FieldConfig,
}

impl FieldEngine {
    /// Creates an engine populated with `cfg.point_count` random points.
    ///
    /// Positions are uniform within the extent; velocity components are
    /// uniform within ±`cfg.speed_half_range`.
    ///
    /// ### Parameters
    /// - `cfg` - Field parameters.
    /// - `extent` - Viewport size in pixels.
    /// - `rng` - Source of randomness for the initial placement.
    pub fn new(cfg: FieldConfig, extent: Vec2, rng: &mut impl Rng) -> Self {
        let mut engine = Self {
            points: Vec::new(),
            extent,
            mouse: None,
            cfg,
        };
        engine.reseed(rng);
        engine
    }

    /// Replaces the whole point set with fresh random points in the current
    /// extent. Used on explicit reset; a resize alone does not reseed.
    pub fn reseed(&mut self, rng: &mut impl Rng) {
        let s = self.cfg.speed_half_range;
        self.points = (0..self.cfg.point_count)
            .map(|_| FieldPoint {
                pos: Vec2::new(
                    rng.random_range(0.0..self.extent.x),
                    rng.random_range(0.0..self.extent.y),
                ),
                vel: Vec2::new(rng.random_range(-s..=s), rng.random_range(-s..=s)),
            })
            .collect();
    }

    /// Updates the viewport extent. Existing points keep their positions;
    /// they are neither rescaled nor reset.
    pub fn set_extent(&mut self, extent: Vec2) {
        self.extent = extent;
    }

    pub fn extent(&self) -> Vec2 {
        self.extent
    }

    /// Updates the tracked mouse position. `None` means the pointer left the
    /// surface and disables both attraction and the link opacity bonus.
    pub fn set_mouse(&mut self, mouse: Option<Vec2>) {
        self.mouse = mouse;
    }

    pub fn mouse(&self) -> Option<Vec2> {
        self.mouse
    }

    /// Advances every point by one frame.
    ///
    /// For each point:
    /// 1. Euler step: `pos += vel` (unit time step of one frame).
    /// 2. Reflect a velocity component when the corresponding coordinate
    ///    exits `[0, extent]`. Each axis flips at most once per step, and
    ///    the position is intentionally left unclamped, so a slight
    ///    overshoot beyond the bounds is tolerated between frames.
    /// 3. If a mouse position is tracked and the point lies within the
    ///    attraction radius R, nudge the position toward the mouse along
    ///    the unit direction with magnitude `((R - dist) / R) * gain` —
    ///    monotonically decreasing in distance, zero at the radius
    ///    boundary, strongest near the mouse. A positional nudge, not a
    ///    force: no momentum is added to the velocity.
    pub fn tick(&mut self) {
        for p in &mut self.points {
            p.pos += p.vel;

            if p.pos.x < 0.0 || p.pos.x > self.extent.x {
                p.vel.x = -p.vel.x;
            }
            if p.pos.y < 0.0 || p.pos.y > self.extent.y {
                p.vel.y = -p.vel.y;
            }

            if let Some(m) = self.mouse {
                let d = m - p.pos;
                let dist = d.length();
                if dist < self.cfg.mouse_radius {
                    let force = (self.cfg.mouse_radius - dist) / self.cfg.mouse_radius;
                    p.pos += d.normalize_or_zero() * force * self.cfg.attraction_gain;
                }
            }
        }
    }

    /// Derives the proximity links for rendering.
    ///
    /// Every unordered pair of points closer than `cfg.link_dist` yields a
    /// link with `opacity = base * (1 - dist / link_dist)`, plus the fixed
    /// bonus when the segment midpoint lies within the mouse radius.
    ///
    /// This is an O(N²) pairwise pass, re-derived fresh on every call.
    ///
    /// ### Returns
    /// The links to draw this frame, in pair iteration order.
    pub fn links(&self) -> Vec<FieldLink> {
        let mut links = Vec::new();

        for i in 0..self.points.len() {
            for j in (i + 1)..self.points.len() {
                let a = self.points[i].pos;
                let b = self.points[j].pos;
                let dist = a.distance(b);
                if dist >= self.cfg.link_dist {
                    continue;
                }

                let mut opacity = self.cfg.base_link_opacity * (1.0 - dist / self.cfg.link_dist);

                if let Some(m) = self.mouse {
                    let mid = (a + b) * 0.5;
                    if mid.distance(m) < self.cfg.mouse_radius {
                        opacity += self.cfg.mouse_link_bonus;
                    }
                }

                links.push(FieldLink { a: i, b: j, opacity });
            }
        }

        links
    }
}
