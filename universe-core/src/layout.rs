//! Category-clustered initial placement of concept nodes.
//!
//! Layout runs once at startup, before relation edges are derived, and
//! assigns every node its base position, depth, and the per-node motion
//! parameters that desynchronize the floating animation.

use crate::{config::UniverseConfig, node::ConceptNode};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Returns the anchor point for a category, derived from the viewport center.
///
/// The six known categories each get a distinct region; any unrecognized
/// category falls back to the exact center rather than failing layout.
pub fn anchor_for(category: &str, center: Vec2) -> Vec2 {
    match category {
        "consensus" => Vec2::new(center.x * 0.3, center.y * 0.4),
        "messaging" => Vec2::new(center.x * 1.7, center.y * 0.4),
        "coordination" => Vec2::new(center.x * 0.3, center.y * 1.6),
        "storage" => Vec2::new(center.x * 1.7, center.y * 1.6),
        "architecture" => Vec2::new(center.x, center.y * 0.2),
        "patterns" => Vec2::new(center.x, center.y * 1.8),
        _ => center,
    }
}

/// Assigns every node an initial pseudo-3D position clustered by category.
///
/// The algorithm:
/// 1. Partition nodes by category in first-appearance order, preserving
///    catalog order within each category.
/// 2. Place the i-th node of a category along a spiral around the category
///    anchor: angle `i * 2π / count`, radius `clusterRadius * i / count`,
///    with `clusterRadius = min(cap, count * spacing)`. Later-indexed nodes
///    land farther from the anchor, early ones stay tight to it.
/// 3. Add independent random jitter of ±`cfg.jitter` per axis.
/// 4. Clamp x and y into the padded viewport rectangle (after jitter, so no
///    jitter magnitude can push a node off-screen).
/// 5. Draw a random depth z in ±`cfg.depth_half_range`.
/// 6. Store the result as both the live and the base position, assign a
///    random speed multiplier and floating parameters, and seed the orbit
///    rotation phase from the bearing of the clustered position relative to
///    the viewport center, so orbiting starts where the cluster put the node.
///
/// ### Parameters
/// - `nodes` - All concept nodes; position and motion fields are overwritten.
/// - `viewport` - Viewport size in pixels.
/// - `cfg` - Layout and motion parameters.
/// - `rng` - Source of randomness for jitter, depth, and motion parameters.
pub fn assign_layout(
    nodes: &mut [ConceptNode],
    viewport: Vec2,
    cfg: &UniverseConfig,
    rng: &mut impl Rng,
) {
    let center = viewport * 0.5;
    let min = Vec2::splat(cfg.padding);
    let max = viewport - Vec2::splat(cfg.padding);

    // Partition node indices by category, keeping first-appearance order.
    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
    for (i, node) in nodes.iter().enumerate() {
        match groups.iter_mut().find(|(c, _)| *c == node.concept.category) {
            Some((_, members)) => members.push(i),
            None => groups.push((node.concept.category.clone(), vec![i])),
        }
    }

    for (category, members) in &groups {
        let anchor = anchor_for(category, center);
        let count = members.len() as f32;
        let cluster_radius = (count * cfg.cluster_spacing).min(cfg.cluster_radius_cap);
        let angle_step = TAU / count;

        for (i, &id) in members.iter().enumerate() {
            let spiral_angle = angle_step * i as f32;
            let spiral_radius = cluster_radius * (i as f32 / count);

            let mut pos =
                anchor + Vec2::new(spiral_angle.cos(), spiral_angle.sin()) * spiral_radius;
            pos.x += rng.random_range(-cfg.jitter..=cfg.jitter);
            pos.y += rng.random_range(-cfg.jitter..=cfg.jitter);
            pos = pos.clamp(min, max);

            let z = rng.random_range(-cfg.depth_half_range..=cfg.depth_half_range);

            let node = &mut nodes[id];
            node.pos = pos;
            node.z = z;
            node.base_pos = pos;
            node.base_z = z;
            node.speed = 0.5 + rng.random_range(0.0..0.5);
            node.float_offset = node.concept.id.len() as f32 + rng.random_range(0.0..TAU);
            node.float_amplitude =
                cfg.float_amplitude_base + rng.random_range(0.0..cfg.float_amplitude_extra);
            node.float_speed = cfg.float_speed_base + rng.random_range(0.0..cfg.float_speed_extra);
            node.scale = 1.0;

            // Orbit motion starts from the clustered position's bearing.
            let dir = pos - center;
            node.rotation = dir.y.atan2(dir.x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Concept;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn node(id: &str, category: &str) -> ConceptNode {
        ConceptNode::new(Concept::new(id, id, category, "*", "", "", 3, &[]))
    }

    #[test]
    fn positions_stay_inside_the_padded_rectangle_even_with_huge_jitter() {
        let mut rng = StdRng::seed_from_u64(3);
        let viewport = Vec2::new(1200.0, 800.0);
        let mut cfg = UniverseConfig::default();
        // Jitter larger than the viewport; clamping must still hold.
        cfg.jitter = 5000.0;

        let mut nodes: Vec<ConceptNode> = (0..12)
            .map(|i| {
                let cat = ["consensus", "storage", "mystery"][i % 3];
                node(&format!("c{i}"), cat)
            })
            .collect();

        assign_layout(&mut nodes, viewport, &cfg, &mut rng);

        for n in &nodes {
            assert!(n.pos.x >= cfg.padding && n.pos.x <= viewport.x - cfg.padding);
            assert!(n.pos.y >= cfg.padding && n.pos.y <= viewport.y - cfg.padding);
        }
    }

    #[test]
    fn unknown_category_anchors_at_the_viewport_center() {
        let center = Vec2::new(600.0, 400.0);
        assert_eq!(anchor_for("definitely-not-a-category", center), center);
        // Known categories get distinct regions.
        assert_ne!(anchor_for("consensus", center), center);
    }

    #[test]
    fn same_category_pair_clusters_near_the_shared_anchor() {
        let mut rng = StdRng::seed_from_u64(4);
        let viewport = Vec2::new(1600.0, 1200.0);
        let mut cfg = UniverseConfig::default();
        // Disable jitter so the cluster radius bounds the scatter exactly.
        cfg.jitter = 0.0;

        let mut nodes = vec![node("a", "storage"), node("b", "storage")];
        assign_layout(&mut nodes, viewport, &cfg, &mut rng);

        let anchor = anchor_for("storage", viewport * 0.5);
        let cluster_radius = (2.0 * cfg.cluster_spacing).min(cfg.cluster_radius_cap);

        for n in &nodes {
            assert!(
                n.pos.distance(anchor) <= cluster_radius,
                "node {} at {:?} strayed from anchor {:?}",
                n.concept.id,
                n.pos,
                anchor
            );
        }
    }

    #[test]
    fn base_position_matches_live_position_after_layout() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut nodes = vec![node("a", "messaging"), node("b", "patterns")];

        assign_layout(&mut nodes, Vec2::new(1200.0, 800.0), &UniverseConfig::default(), &mut rng);

        for n in &nodes {
            assert_eq!(n.pos, n.base_pos);
            assert_eq!(n.z, n.base_z);
            assert!(n.z.abs() <= 100.0);
            // Motion parameters got randomized into their documented ranges.
            assert!(n.speed >= 0.5 && n.speed <= 1.0);
            assert!(n.float_amplitude >= 10.0 && n.float_amplitude <= 30.0);
            assert!(n.float_speed >= 0.001 && n.float_speed <= 0.003);
        }
    }

    #[test]
    fn rotation_phase_points_at_the_clustered_position() {
        let mut rng = StdRng::seed_from_u64(6);
        let viewport = Vec2::new(1200.0, 800.0);
        let mut nodes = vec![node("a", "consensus")];

        assign_layout(&mut nodes, viewport, &UniverseConfig::default(), &mut rng);

        let dir = nodes[0].pos - viewport * 0.5;
        assert!((nodes[0].rotation - dir.y.atan2(dir.x)).abs() < 1e-6);
    }
}
