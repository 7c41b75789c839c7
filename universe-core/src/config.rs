use std::ops::RangeInclusive;

/// Parameters for the ambient point field.
#[derive(Clone, Copy, Debug)]
pub struct FieldConfig {
    /// Number of drifting points.
    pub point_count: usize,
    /// Distance below which two points are linked for rendering.
    pub link_dist: f32,
    /// Radius of the mouse attraction / highlight region.
    pub mouse_radius: f32,
    /// Maximum positional nudge toward the mouse, in pixels per frame.
    /// The applied nudge scales down linearly to zero at the radius edge.
    pub attraction_gain: f32,
    /// Initial velocity components are drawn from ± this value.
    pub speed_half_range: f32,
    /// Link opacity at zero distance.
    pub base_link_opacity: f32,
    /// Opacity bonus for links whose midpoint is near the mouse.
    pub mouse_link_bonus: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            point_count: 50,
            link_dist: 140.0,
            mouse_radius: 180.0,
            attraction_gain: 0.9,
            speed_half_range: 0.3,
            base_link_opacity: 0.08,
            mouse_link_bonus: 0.12,
        }
    }
}

/// Parameters for the concept universe engine.
#[derive(Clone, Copy, Debug)]
pub struct UniverseConfig {
    /// Margin kept between laid-out nodes and the viewport edges.
    pub padding: f32,
    /// Upper bound on a category cluster's radius.
    pub cluster_radius_cap: f32,
    /// Cluster radius contributed per node in a category.
    pub cluster_spacing: f32,
    /// Layout jitter half-range per axis.
    pub jitter: f32,
    /// Depth (z) is drawn from ± this value.
    pub depth_half_range: f32,
    /// Base orbit radius; a node's depth is added on top.
    pub orbit_base_radius: f32,
    /// Rotation phase advance per tick at speed 1.
    pub orbit_step: f32,
    /// Nominal milliseconds accumulated per tick. The engine never reads a
    /// wall clock; visual speed is an approximation by design.
    pub frame_ms: f64,
    /// Floating animation amplitude: base plus a random extra.
    pub float_amplitude_base: f32,
    pub float_amplitude_extra: f32,
    /// Floating animation speed: base plus a random extra.
    pub float_speed_base: f32,
    pub float_speed_extra: f32,
    /// Clamp range for the depth-based perspective scale.
    pub scale_min: f32,
    pub scale_max: f32,
    /// Bounds and default for the user-facing particle count control.
    pub particle_min: usize,
    pub particle_max: usize,
    pub particle_default: usize,
    /// Dwell time per concept during a guided tour, in engine milliseconds.
    pub tour_dwell_ms: f64,
    /// Lifetime of a transient edge highlight, in engine milliseconds.
    pub highlight_ms: f64,
    /// Strength weight stored on every relation edge.
    pub edge_strength: f32,
}

impl UniverseConfig {
    /// Valid range for [`Self::particle_default`] and the particle control.
    pub fn particle_range(&self) -> RangeInclusive<usize> {
        self.particle_min..=self.particle_max
    }
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            padding: 100.0,
            cluster_radius_cap: 150.0,
            cluster_spacing: 40.0,
            jitter: 40.0,
            depth_half_range: 100.0,
            orbit_base_radius: 300.0,
            orbit_step: 0.002,
            frame_ms: 16.0,
            float_amplitude_base: 10.0,
            float_amplitude_extra: 20.0,
            float_speed_base: 0.001,
            float_speed_extra: 0.002,
            scale_min: 0.5,
            scale_max: 1.5,
            particle_min: 10,
            particle_max: 200,
            particle_default: 50,
            tour_dwell_ms: 5000.0,
            highlight_ms: 2000.0,
            edge_strength: 0.3,
        }
    }
}
