//! Per-frame orbital and floating motion for concept nodes.
//!
//! The clustered layout from [`crate::layout`] only seeds each node's
//! starting phase; from the first tick on, nodes orbit the viewport center
//! at a depth-modulated radius. This perpetual orbit is the intended
//! steady-state behavior, not a transition back to the cluster.

use crate::{config::UniverseConfig, node::ConceptNode};
use glam::Vec2;

/// Advances every node by one frame.
///
/// Per node:
/// 1. Advance the rotation phase by `cfg.orbit_step` scaled by the node's
///    speed multiplier. The multiplier is only rewritten when the speed
///    control changes; it is not re-read continuously.
/// 2. Orbit: radius = `cfg.orbit_base_radius + z`, position = viewport
///    center + (cos φ, sin φ) · radius. Depth layers the orbits for a
///    parallax-like effect.
/// 3. Superimpose the floating offset
///    `sin(time · floatSpeed + floatOffset) · floatAmplitude` on y. The
///    offset was derived from the concept id's length at layout time.
/// 4. Recompute the perspective scale, linear in z and clamped to the
///    configured range.
///
/// ### Parameters
/// - `nodes` - All concept nodes; live position, rotation and scale mutate.
/// - `viewport` - Current viewport size; orbits center on its midpoint.
/// - `time` - Engine time in nominal milliseconds.
/// - `cfg` - Motion parameters.
pub fn advance(nodes: &mut [ConceptNode], viewport: Vec2, time: f64, cfg: &UniverseConfig) {
    let center = viewport * 0.5;

    for node in nodes.iter_mut() {
        node.rotation += cfg.orbit_step * node.speed;

        let radius = cfg.orbit_base_radius + node.z;
        node.pos = center + Vec2::new(node.rotation.cos(), node.rotation.sin()) * radius;

        let float_phase = time * node.float_speed as f64 + node.float_offset as f64;
        node.pos.y += float_phase.sin() as f32 * node.float_amplitude;

        let scale = 0.8 + (node.z + cfg.depth_half_range) / (cfg.depth_half_range * 4.0);
        node.scale = scale.clamp(cfg.scale_min, cfg.scale_max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Concept;

    fn still_node(z: f32) -> ConceptNode {
        let mut node = ConceptNode::new(Concept::new("n", "n", "patterns", "*", "", "", 3, &[]));
        node.z = z;
        // No floating so the orbit formula can be checked exactly.
        node.float_amplitude = 0.0;
        node.speed = 1.0;
        node
    }

    #[test]
    fn orbit_position_matches_the_closed_form() {
        let viewport = Vec2::new(1000.0, 800.0);
        let cfg = UniverseConfig::default();
        let mut nodes = vec![still_node(50.0)];
        nodes[0].rotation = 1.0;

        advance(&mut nodes, viewport, 0.0, &cfg);

        let phase = 1.0 + cfg.orbit_step;
        let radius = cfg.orbit_base_radius + 50.0;
        let expected = viewport * 0.5 + Vec2::new(phase.cos(), phase.sin()) * radius;

        assert!(nodes[0].pos.distance(expected) < 1e-3);
    }

    #[test]
    fn rotation_phase_increases_monotonically_with_speed() {
        let cfg = UniverseConfig::default();
        let mut nodes = vec![still_node(0.0), still_node(0.0)];
        nodes[1].speed = 2.0;

        for _ in 0..10 {
            advance(&mut nodes, Vec2::new(1000.0, 800.0), 0.0, &cfg);
        }

        assert!(nodes[0].rotation > 0.0);
        // Twice the speed, twice the phase.
        assert!((nodes[1].rotation - 2.0 * nodes[0].rotation).abs() < 1e-6);
    }

    #[test]
    fn float_offset_is_bounded_by_the_amplitude() {
        let viewport = Vec2::new(1000.0, 800.0);
        let cfg = UniverseConfig::default();
        let mut nodes = vec![still_node(0.0)];
        nodes[0].float_amplitude = 15.0;
        nodes[0].float_speed = 0.002;
        nodes[0].speed = 0.0; // freeze the orbit, isolate the float

        let base_y = {
            let radius = cfg.orbit_base_radius;
            viewport.y * 0.5 + nodes[0].rotation.sin() * radius
        };

        for step in 0..200 {
            advance(&mut nodes, viewport, step as f64 * 16.0, &cfg);
            assert!((nodes[0].pos.y - base_y).abs() <= 15.0 + 1e-4);
        }
    }

    #[test]
    fn perspective_scale_is_linear_in_depth_and_clamped() {
        let cfg = UniverseConfig::default();
        let viewport = Vec2::new(1000.0, 800.0);

        let mut nodes = vec![still_node(-100.0), still_node(0.0), still_node(100.0)];
        advance(&mut nodes, viewport, 0.0, &cfg);

        // z = -100 -> 0.8, z = 0 -> 1.05, z = 100 -> 1.3 with defaults.
        assert!((nodes[0].scale - 0.8).abs() < 1e-6);
        assert!((nodes[1].scale - 1.05).abs() < 1e-6);
        assert!((nodes[2].scale - 1.3).abs() < 1e-6);

        // An out-of-range depth clamps instead of growing without bound.
        let mut deep = vec![still_node(1000.0)];
        advance(&mut deep, viewport, 0.0, &cfg);
        assert_eq!(deep[0].scale, cfg.scale_max);
    }
}
