use crate::catalog::Concept;
use glam::Vec2;

/// A concept plus its derived animation state.
///
/// Position fields are assigned by [`crate::layout::assign_layout`] once at
/// startup and then mutated every tick by [`crate::motion::advance`]; nodes
/// are never destroyed during a session.
#[derive(Debug, Clone)]
pub struct ConceptNode {
    pub concept: Concept,

    /// Live position.
    pub pos: Vec2,
    /// Live depth, used for orbit radius and perspective scale.
    pub z: f32,
    /// Pre-animation anchor from the clustered layout.
    pub base_pos: Vec2,
    pub base_z: f32,

    /// Orbit rotation phase, monotonically increasing.
    pub rotation: f32,
    /// Per-node angular speed multiplier.
    pub speed: f32,
    /// Floating animation phase offset / amplitude / speed.
    pub float_offset: f32,
    pub float_amplitude: f32,
    pub float_speed: f32,

    /// Depth-derived perspective scale for rendering.
    pub scale: f32,
    /// Cleared when the node is filtered out by category; data unchanged.
    pub visible: bool,
}

impl ConceptNode {
    pub fn new(concept: Concept) -> Self {
        Self {
            concept,
            pos: Vec2::ZERO,
            z: 0.0,
            base_pos: Vec2::ZERO,
            base_z: 0.0,
            rotation: 0.0,
            speed: 1.0,
            float_offset: 0.0,
            float_amplitude: 0.0,
            float_speed: 0.0,
            scale: 1.0,
            visible: true,
        }
    }
}
