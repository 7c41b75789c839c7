//! The concept universe engine: orbiting concept nodes, a starfield, a
//! static relation graph, selection with transient highlights, a guided
//! tour, and a one-question quiz.
//!
//! The engine is advanced by an explicit [`Universe::tick`] from a host
//! scheduler. Time is a monotonically increasing counter advanced by a
//! nominal per-frame constant, never a wall clock, so timed actions (tour
//! advance, highlight expiry) are deterministic under test.

use crate::{
    catalog::{self, Concept},
    config::UniverseConfig,
    graph::{self, Edge},
    layout, motion,
    node::ConceptNode,
    starfield::Starfield,
    types::{ConceptIndex, TaskHandle},
};
use glam::Vec2;
use rand::Rng;

/// A transient highlight on one relation edge, expiring at a deadline in
/// engine time.
#[derive(Debug, Clone, Copy)]
pub struct ActiveLink {
    pub handle: TaskHandle,
    /// Index into [`Universe::edges`].
    pub edge: usize,
    pub expires_at: f64,
}

/// Pending tour advance: which concept to show next, and when.
#[derive(Debug, Clone, Copy)]
struct TourState {
    #[allow(dead_code)]
    handle: TaskHandle,
    next_index: ConceptIndex,
    due_at: f64,
}

/// A single fixed-template multiple-choice question.
#[derive(Debug, Clone)]
pub struct Quiz {
    /// The concept the question is about.
    pub concept: ConceptIndex,
    pub prompt: String,
    pub options: Vec<String>,
    /// Index of the correct option.
    pub answer: usize,
}

impl Quiz {
    /// Checks an answer: a plain equality test against the stored index.
    pub fn check(&self, choice: usize) -> bool {
        choice == self.answer
    }
}

/// Engine owning the concept nodes, relation edges, and starfield.
#[derive(Debug)]
pub struct Universe {
    pub nodes: Vec<ConceptNode>,
    pub edges: Vec<Edge>,
    pub starfield: Starfield,
    pub cfg: UniverseConfig,

    viewport: Vec2,
    time: f64,
    selected: Option<ConceptIndex>,
    show_edges: bool,
    active_links: Vec<ActiveLink>,
    tour: Option<TourState>,
    next_handle: TaskHandle,
}

impl Universe {
    /// Builds a universe from a concept catalog.
    ///
    /// Runs the clustered layout first and derives relation edges only
    /// afterwards (initialization ordering, not a data dependency), then
    /// seeds the default starfield.
    ///
    /// ### Parameters
    /// - `concepts` - The static catalog, in display/tour order.
    /// - `viewport` - Viewport size in pixels.
    /// - `cfg` - Engine parameters.
    /// - `rng` - Source of randomness for layout and the starfield.
    ///
    /// ### Panics
    /// Panics if two concepts share an id; ids are the join key for edges
    /// and detail lookups and must be unique.
    pub fn new(
        concepts: Vec<Concept>,
        viewport: Vec2,
        cfg: UniverseConfig,
        rng: &mut impl Rng,
    ) -> Self {
        assert!(
            catalog::duplicate_id(&concepts).is_none(),
            "concept ids must be unique"
        );

        let mut nodes: Vec<ConceptNode> = concepts.into_iter().map(ConceptNode::new).collect();
        layout::assign_layout(&mut nodes, viewport, &cfg, rng);
        let edges = graph::build_edges(&nodes, cfg.edge_strength);

        let mut starfield = Starfield::default();
        starfield.regenerate(cfg.particle_default, viewport, rng);

        Self {
            nodes,
            edges,
            starfield,
            cfg,
            viewport,
            time: 0.0,
            selected: None,
            show_edges: true,
            active_links: Vec::new(),
            tour: None,
            next_handle: 0,
        }
    }

    fn take_handle(&mut self) -> TaskHandle {
        self.next_handle += 1;
        self.next_handle
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn selected(&self) -> Option<ConceptIndex> {
        self.selected
    }

    pub fn show_edges(&self) -> bool {
        self.show_edges
    }

    pub fn active_links(&self) -> &[ActiveLink] {
        &self.active_links
    }

    pub fn tour_running(&self) -> bool {
        self.tour.is_some()
    }

    /// Advances the engine by one frame.
    ///
    /// 1. Accumulate nominal frame time.
    /// 2. [`motion::advance`] all nodes, advance the starfield.
    /// 3. Drop expired edge highlights.
    /// 4. If a tour advance is due, select the next concept in catalog
    ///    order and reschedule, or stop past the last one.
    pub fn tick(&mut self) {
        self.time += self.cfg.frame_ms;

        motion::advance(&mut self.nodes, self.viewport, self.time, &self.cfg);
        self.starfield.advance(self.time, self.viewport);

        let now = self.time;
        self.active_links.retain(|l| l.expires_at > now);

        if let Some(tour) = self.tour
            && tour.due_at <= now
        {
            if tour.next_index < self.nodes.len() {
                self.select(tour.next_index);
                self.tour = Some(TourState {
                    handle: self.take_handle(),
                    next_index: tour.next_index + 1,
                    due_at: now + self.cfg.tour_dwell_ms,
                });
            } else {
                self.tour = None;
            }
        }
    }

    /// Selects a concept for the detail surface.
    ///
    /// Replaces the active highlight set wholesale: every edge touching the
    /// selection gets one timed highlight that expires after the configured
    /// lifetime. Out-of-range indices are ignored.
    pub fn select(&mut self, index: ConceptIndex) {
        if index >= self.nodes.len() {
            return;
        }
        self.selected = Some(index);

        self.active_links.clear();
        let expires_at = self.time + self.cfg.highlight_ms;
        for edge in graph::edges_touching(&self.edges, index) {
            let handle = self.take_handle();
            self.active_links.push(ActiveLink {
                handle,
                edge,
                expires_at,
            });
        }
    }

    /// Closes the detail surface.
    ///
    /// Also cancels a running tour: closing the panel supersedes the tour's
    /// pending advance, and no stale deadline may fire afterwards.
    pub fn close_details(&mut self) {
        self.selected = None;
        self.tour = None;
    }

    /// Applies a category filter. `None` shows everything. Only the
    /// visibility flag changes; node data is untouched.
    pub fn set_filter(&mut self, category: Option<&str>) {
        for node in &mut self.nodes {
            node.visible = category.is_none_or(|c| node.concept.category == c);
        }
    }

    /// Rescales every node's speed to `multiplier * (0.5 + rand * 0.5)`.
    ///
    /// Applied once at the moment the control changes; ticks in between do
    /// not re-read the control.
    pub fn set_speed_multiplier(&mut self, multiplier: f32, rng: &mut impl Rng) {
        for node in &mut self.nodes {
            node.speed = multiplier * (0.5 + rng.random_range(0.0..0.5));
        }
    }

    /// Regenerates the starfield with `count` particles, clamped into the
    /// configured bounds. A full atomic replacement, safe under rapid
    /// repeated control changes.
    pub fn set_particle_count(&mut self, count: usize, rng: &mut impl Rng) {
        let count = count.clamp(self.cfg.particle_min, self.cfg.particle_max);
        self.starfield.regenerate(count, self.viewport, rng);
    }

    pub fn set_show_edges(&mut self, show: bool) {
        self.show_edges = show;
    }

    /// Updates the viewport. Future orbits center on the new midpoint;
    /// nodes are not re-laid out.
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Starts a guided tour: selects the first concept immediately and
    /// schedules the walk through the rest of the catalog in order.
    pub fn start_tour(&mut self) {
        if self.nodes.is_empty() {
            return;
        }
        self.select(0);
        self.tour = Some(TourState {
            handle: self.take_handle(),
            next_index: 1,
            due_at: self.time + self.cfg.tour_dwell_ms,
        });
    }

    pub fn stop_tour(&mut self) {
        self.tour = None;
    }

    /// Builds a quiz question about one uniformly random concept.
    ///
    /// The question is a fixed four-option template; the stored correct
    /// index derives from the concept's category. Repeated calls sample
    /// independently (the same concept may come up twice in a row).
    ///
    /// ### Returns
    /// `None` only for an empty catalog.
    pub fn quiz(&self, rng: &mut impl Rng) -> Option<Quiz> {
        if self.nodes.is_empty() {
            return None;
        }
        let concept = rng.random_range(0..self.nodes.len());
        let node = &self.nodes[concept];

        let answer = match node.concept.category.as_str() {
            "storage" => 0,
            "coordination" => 1,
            "messaging" => 2,
            _ => 3,
        };

        Some(Quiz {
            concept,
            prompt: format!("What is the main purpose of {}?", node.concept.name),
            options: vec![
                "Data storage".to_owned(),
                "Service coordination".to_owned(),
                "Message passing".to_owned(),
                "Consensus algorithm".to_owned(),
            ],
            answer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn concept(id: &str, category: &str, related: &[&str]) -> Concept {
        Concept::new(id, id, category, "*", "", "", 3, related)
    }

    fn small_universe() -> (Universe, StdRng) {
        let mut rng = StdRng::seed_from_u64(10);
        let concepts = vec![
            concept("raft", "consensus", &["paxos"]),
            concept("paxos", "consensus", &["raft"]),
            concept("kafka", "messaging", &["raft", "ghost"]),
        ];
        let universe = Universe::new(
            concepts,
            Vec2::new(1200.0, 800.0),
            UniverseConfig::default(),
            &mut rng,
        );
        (universe, rng)
    }

    #[test]
    #[should_panic(expected = "concept ids must be unique")]
    fn duplicate_ids_are_rejected_at_construction() {
        let mut rng = StdRng::seed_from_u64(11);
        let concepts = vec![concept("a", "storage", &[]), concept("a", "storage", &[])];
        Universe::new(
            concepts,
            Vec2::new(800.0, 600.0),
            UniverseConfig::default(),
            &mut rng,
        );
    }

    #[test]
    fn construction_builds_edges_after_layout_and_seeds_particles() {
        let (universe, _) = small_universe();

        // raft->paxos, paxos->raft (mutual, kept twice), kafka->raft.
        // kafka's "ghost" id dangles and contributes nothing.
        assert_eq!(universe.edges.len(), 3);
        assert_eq!(universe.starfield.particles.len(), 50);

        // Layout ran: nodes left their zero origin.
        for n in &universe.nodes {
            assert_ne!(n.base_pos, Vec2::ZERO);
        }
    }

    #[test]
    fn tick_accumulates_nominal_frame_time() {
        let (mut universe, _) = small_universe();
        for _ in 0..5 {
            universe.tick();
        }
        assert_eq!(universe.time(), 80.0);
    }

    #[test]
    fn selection_spawns_highlights_that_expire_on_schedule() {
        let (mut universe, _) = small_universe();

        universe.select(0); // raft touches raft->paxos, paxos->raft, kafka->raft
        assert_eq!(universe.selected(), Some(0));
        assert_eq!(universe.active_links().len(), 3);

        // Highlights survive until just before the lifetime elapses...
        let frames_alive = (2000.0 / 16.0) as usize - 1;
        for _ in 0..frames_alive {
            universe.tick();
        }
        assert_eq!(universe.active_links().len(), 3);

        // ...and are gone once the deadline is reached.
        universe.tick();
        assert!(universe.active_links().is_empty());
    }

    #[test]
    fn reselection_replaces_highlights_wholesale() {
        let (mut universe, _) = small_universe();

        universe.select(0);
        let first: Vec<TaskHandle> = universe.active_links().iter().map(|l| l.handle).collect();

        universe.select(2); // kafka touches only kafka->raft
        assert_eq!(universe.active_links().len(), 1);
        assert!(!first.contains(&universe.active_links()[0].handle));
    }

    #[test]
    fn tour_walks_the_catalog_in_order_and_stops_at_the_end() {
        let (mut universe, _) = small_universe();
        let dwell_frames = (5000.0 / 16.0) as usize + 1;

        universe.start_tour();
        assert!(universe.tour_running());
        assert_eq!(universe.selected(), Some(0));

        for _ in 0..dwell_frames {
            universe.tick();
        }
        assert_eq!(universe.selected(), Some(1));

        for _ in 0..dwell_frames {
            universe.tick();
        }
        assert_eq!(universe.selected(), Some(2));

        // After the last concept's dwell the tour ends on its own.
        for _ in 0..dwell_frames {
            universe.tick();
        }
        assert!(!universe.tour_running());
        assert_eq!(universe.selected(), Some(2));
    }

    #[test]
    fn closing_the_details_cancels_a_running_tour() {
        let (mut universe, _) = small_universe();
        let dwell_frames = (5000.0 / 16.0) as usize + 1;

        universe.start_tour();
        universe.close_details();
        assert!(!universe.tour_running());
        assert_eq!(universe.selected(), None);

        // No stale deadline may advance the tour afterwards.
        for _ in 0..dwell_frames * 2 {
            universe.tick();
        }
        assert_eq!(universe.selected(), None);
    }

    #[test]
    fn filter_toggles_visibility_without_touching_data() {
        let (mut universe, _) = small_universe();

        universe.set_filter(Some("messaging"));
        assert!(!universe.nodes[0].visible);
        assert!(!universe.nodes[1].visible);
        assert!(universe.nodes[2].visible);

        universe.set_filter(None);
        assert!(universe.nodes.iter().all(|n| n.visible));
        // The catalog itself never changed.
        assert_eq!(universe.nodes.len(), 3);
    }

    #[test]
    fn speed_multiplier_rescales_into_the_documented_band() {
        let (mut universe, mut rng) = small_universe();

        universe.set_speed_multiplier(2.0, &mut rng);
        for n in &universe.nodes {
            assert!(n.speed >= 1.0 && n.speed <= 2.0);
        }
    }

    #[test]
    fn particle_count_change_is_a_full_clamped_replacement() {
        let (mut universe, mut rng) = small_universe();
        assert_eq!(universe.starfield.particles.len(), 50);

        universe.set_particle_count(10, &mut rng);
        assert_eq!(universe.starfield.particles.len(), 10);

        // Out-of-bounds requests clamp into the configured range.
        universe.set_particle_count(0, &mut rng);
        assert_eq!(universe.starfield.particles.len(), 10);
        universe.set_particle_count(9999, &mut rng);
        assert_eq!(universe.starfield.particles.len(), 200);
    }

    #[test]
    fn quiz_is_well_formed_and_samples_independently() {
        let (universe, mut rng) = small_universe();

        for _ in 0..2 {
            let quiz = universe.quiz(&mut rng).unwrap();
            assert_eq!(quiz.options.len(), 4);
            assert!(quiz.answer < quiz.options.len());
            assert!(quiz.concept < universe.nodes.len());
            assert!(quiz.check(quiz.answer));
            assert!(!quiz.check((quiz.answer + 1) % 4));
        }
    }

    #[test]
    fn quiz_answer_derives_from_the_category() {
        let mut rng = StdRng::seed_from_u64(12);
        let concepts = vec![concept("cassandra", "storage", &[])];
        let universe = Universe::new(
            concepts,
            Vec2::new(800.0, 600.0),
            UniverseConfig::default(),
            &mut rng,
        );

        let quiz = universe.quiz(&mut rng).unwrap();
        assert_eq!(quiz.concept, 0);
        assert_eq!(quiz.answer, 0); // "Data storage"
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let (mut universe, _) = small_universe();
        universe.select(99);
        assert_eq!(universe.selected(), None);
        assert!(universe.active_links().is_empty());
    }
}
