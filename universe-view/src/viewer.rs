//! Interactive viewer for the ambient field and the concept universe,
//! built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns both engine instances plus
//! the UI-side control state, and implements [`eframe::App`] to feed input
//! to the engines, tick them once per repaint, and paint their state.

use eframe::App;
use glam::Vec2;
use universe_core::{
    catalog,
    config::{FieldConfig, UniverseConfig},
    field::FieldEngine,
    universe::{Quiz, Universe},
};

use crate::content;

/// Base pixel radius of a concept node disc before perspective scaling.
const NODE_RADIUS: f32 = 22.0;

/// Accent color for a concept category. Unknown categories get a neutral
/// gray instead of failing.
fn category_color(category: &str) -> egui::Color32 {
    match category {
        "consensus" => egui::Color32::from_rgb(255, 182, 66),
        "messaging" => egui::Color32::from_rgb(102, 204, 255),
        "coordination" => egui::Color32::from_rgb(144, 238, 144),
        "storage" => egui::Color32::from_rgb(255, 140, 120),
        "architecture" => egui::Color32::from_rgb(186, 145, 255),
        "patterns" => egui::Color32::from_rgb(79, 209, 199),
        _ => egui::Color32::GRAY,
    }
}

/// Main application state.
///
/// [`Viewer`] glues together:
/// - The two engines: [`FieldEngine`] (ambient background) and
///   [`Universe`] (concept nodes, starfield, tour, quiz).
/// - UI control state mirroring the engine setters (speed, particle count,
///   edge visibility, category filter).
/// - The currently open quiz, if any.
///
/// The typical per-frame update is:
/// 1. Handle global input (Escape closes the detail panel).
/// 2. Feed viewport size and pointer position to the engines.
/// 3. Tick both engines once.
/// 4. Paint field, starfield, edges, highlights, and nodes.
pub struct Viewer {
    field: FieldEngine,
    universe: Universe,

    rng: rand::rngs::ThreadRng,

    viewport: Vec2,
    speed: f32,
    particle_count: usize,
    show_edges: bool,
    filter: Option<String>,

    quiz: Option<Quiz>,
    quiz_result: Option<bool>,
}

impl Viewer {
    /// Creates a viewer with the built-in concept catalog and default
    /// engine parameters. The initial viewport is a guess; the engines are
    /// resized to the real surface on the first frame.
    pub fn new() -> Self {
        let mut rng = rand::rng();
        let viewport = Vec2::new(1280.0, 800.0);

        let field = FieldEngine::new(FieldConfig::default(), viewport, &mut rng);
        let cfg = UniverseConfig::default();
        let particle_count = cfg.particle_default;
        let universe = Universe::new(content::catalog(), viewport, cfg, &mut rng);

        Self {
            field,
            universe,
            rng,
            viewport,
            speed: 1.0,
            particle_count,
            show_edges: true,
            filter: None,
            quiz: None,
            quiz_result: None,
        }
    }

    /// Builds the top control bar (speed, particles, edges, filters, tour,
    /// quiz).
    fn ui_controls(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .add(egui::Slider::new(&mut self.speed, 0.1..=3.0).text("Speed"))
                    .changed()
                {
                    self.universe.set_speed_multiplier(self.speed, &mut self.rng);
                }

                ui.separator();
                ui.label("Particles:");
                let range = self.universe.cfg.particle_range();
                if ui
                    .add(egui::DragValue::new(&mut self.particle_count).range(range))
                    .changed()
                {
                    self.universe
                        .set_particle_count(self.particle_count, &mut self.rng);
                }

                ui.separator();
                if ui.checkbox(&mut self.show_edges, "Connections").changed() {
                    self.universe.set_show_edges(self.show_edges);
                }

                ui.separator();
                if self.universe.tour_running() {
                    if ui.button("⏹ Stop tour").clicked() {
                        self.universe.stop_tour();
                        log::info!("guided tour stopped");
                    }
                } else if ui.button("🚀 Tour").clicked() {
                    self.universe.start_tour();
                    log::info!("guided tour started");
                }

                if ui.button("🎓 Quiz").clicked() {
                    self.quiz = self.universe.quiz(&mut self.rng);
                    self.quiz_result = None;
                    log::info!("quiz started");
                }
            });

            ui.horizontal(|ui| {
                let mut new_filter: Option<Option<String>> = None;

                if ui.selectable_label(self.filter.is_none(), "All").clicked() {
                    new_filter = Some(None);
                }
                for cat in content::CATEGORIES {
                    let active = self.filter.as_deref() == Some(*cat);
                    if ui.selectable_label(active, *cat).clicked() {
                        new_filter = Some(Some((*cat).to_owned()));
                    }
                }

                if let Some(filter) = new_filter {
                    self.filter = filter;
                    self.universe.set_filter(self.filter.as_deref());
                    log::debug!("category filter: {:?}", self.filter);
                }
            });
        });
    }

    /// Builds the right-hand detail panel for the selected concept.
    fn ui_knowledge_panel(&mut self, ctx: &egui::Context) {
        let Some(selected) = self.universe.selected() else {
            return;
        };

        let mut close = false;
        let mut follow: Option<usize> = None;

        egui::SidePanel::right("knowledge_panel")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                let concept = &self.universe.nodes[selected].concept;

                ui.horizontal(|ui| {
                    ui.heading(format!("{} {}", concept.icon, concept.name));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("✖").clicked() {
                            close = true;
                        }
                    });
                });
                ui.label(catalog::difficulty_stars(concept.difficulty));
                ui.separator();

                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.label(egui::RichText::new(&concept.description).strong());
                    ui.add_space(8.0);
                    ui.label(&concept.details);

                    ui.add_space(8.0);
                    ui.label(egui::RichText::new("Real-world example").strong());
                    ui.label(
                        concept
                            .example
                            .as_deref()
                            .unwrap_or(content::GENERIC_EXAMPLE),
                    );

                    ui.add_space(8.0);
                    ui.label(egui::RichText::new("Related").strong());
                    ui.horizontal_wrapped(|ui| {
                        for related in &concept.related {
                            let target = self
                                .universe
                                .nodes
                                .iter()
                                .position(|n| n.concept.id == *related);
                            match target {
                                Some(i) => {
                                    if ui.link(related).clicked() {
                                        follow = Some(i);
                                    }
                                }
                                // Dangling ids are plain text, not links.
                                None => {
                                    ui.weak(related);
                                }
                            }
                        }
                    });
                });
            });

        if close {
            self.universe.close_details();
        }
        if let Some(i) = follow {
            self.universe.select(i);
        }
    }

    /// Builds the central animated view and handles node clicks.
    fn ui_universe(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::from_rgb(8, 11, 18)))
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::click());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                // Track viewport resizes. Field points are not rescaled; the
                // universe just orbits around the new center.
                let extent = Vec2::new(rect.width(), rect.height());
                if extent != self.viewport {
                    self.viewport = extent;
                    self.field.set_extent(extent);
                    self.universe.set_viewport(extent);
                }

                // Pointer tracking in engine (rect-local) coordinates;
                // leaving the surface clears it.
                let mouse = response
                    .hover_pos()
                    .map(|p| Vec2::new(p.x - rect.min.x, p.y - rect.min.y));
                self.field.set_mouse(mouse);

                // One engine step per repaint.
                self.field.tick();
                self.universe.tick();

                let to_screen = |p: Vec2| egui::pos2(rect.min.x + p.x, rect.min.y + p.y);

                // Ambient field: links below, points on top.
                for link in self.field.links() {
                    let alpha = (link.opacity.clamp(0.0, 1.0) * 255.0) as u8;
                    painter.line_segment(
                        [
                            to_screen(self.field.points[link.a].pos),
                            to_screen(self.field.points[link.b].pos),
                        ],
                        egui::Stroke::new(1.0, egui::Color32::from_white_alpha(alpha)),
                    );
                }
                for p in &self.field.points {
                    painter.circle_filled(
                        to_screen(p.pos),
                        1.7,
                        egui::Color32::from_white_alpha(115),
                    );
                }

                // Starfield.
                for p in &self.universe.starfield.particles {
                    let alpha = (p.opacity.clamp(0.0, 1.0) * 255.0) as u8;
                    painter.circle_filled(
                        to_screen(p.pos),
                        p.size,
                        egui::Color32::from_white_alpha(alpha),
                    );
                }

                // Static relation edges.
                if self.universe.show_edges() {
                    for edge in &self.universe.edges {
                        painter.line_segment(
                            [
                                to_screen(self.universe.nodes[edge.from].pos),
                                to_screen(self.universe.nodes[edge.to].pos),
                            ],
                            egui::Stroke::new(
                                1.0,
                                egui::Color32::from_rgba_unmultiplied(100, 200, 255, 50),
                            ),
                        );
                    }
                }

                // Transient highlights over the plain edges.
                for link in self.universe.active_links() {
                    let edge = self.universe.edges[link.edge];
                    painter.line_segment(
                        [
                            to_screen(self.universe.nodes[edge.from].pos),
                            to_screen(self.universe.nodes[edge.to].pos),
                        ],
                        egui::Stroke::new(2.0, egui::Color32::from_rgb(79, 209, 199)),
                    );
                }

                // Concept nodes, perspective-scaled. Filtered-out nodes are
                // dimmed and not clickable.
                let clicked = response.clicked();
                let pointer = response.interact_pointer_pos();
                let mut picked: Option<usize> = None;

                for (i, node) in self.universe.nodes.iter().enumerate() {
                    let center = to_screen(node.pos);
                    let radius = NODE_RADIUS * node.scale;
                    let mut color = category_color(&node.concept.category);
                    if !node.visible {
                        color = color.gamma_multiply(0.3);
                    }

                    painter.circle_filled(center, radius, color.gamma_multiply(0.25));
                    painter.circle_stroke(center, radius, egui::Stroke::new(1.5, color));
                    painter.text(
                        center,
                        egui::Align2::CENTER_CENTER,
                        &node.concept.icon,
                        egui::FontId::proportional(16.0 * node.scale),
                        egui::Color32::WHITE,
                    );
                    painter.text(
                        center + egui::vec2(0.0, radius + 4.0),
                        egui::Align2::CENTER_TOP,
                        &node.concept.name,
                        egui::FontId::proportional(11.0),
                        color,
                    );

                    if clicked
                        && node.visible
                        && let Some(p) = pointer
                        && p.distance(center) <= radius
                    {
                        picked = Some(i);
                    }
                }

                if let Some(i) = picked {
                    self.universe.select(i);
                    log::debug!("selected concept {}", self.universe.nodes[i].concept.id);
                }

                // Mouse attraction ring.
                if let Some(m) = mouse {
                    painter.circle_stroke(
                        to_screen(m),
                        100.0,
                        egui::Stroke::new(
                            1.0,
                            egui::Color32::from_rgba_unmultiplied(79, 209, 199, 26),
                        ),
                    );
                }

                // Continuous animation.
                ctx.request_repaint();
            });
    }

    /// Builds the modal quiz window, if a quiz is open.
    fn ui_quiz_modal(&mut self, ctx: &egui::Context) {
        let Some(quiz) = &self.quiz else {
            return;
        };

        let mut pick: Option<usize> = None;
        let mut close = false;

        egui::Window::new("Quick Quiz")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(&quiz.prompt);
                ui.add_space(6.0);

                for (i, option) in quiz.options.iter().enumerate() {
                    if ui.button(option).clicked() {
                        pick = Some(i);
                    }
                }

                if let Some(correct) = self.quiz_result {
                    ui.add_space(6.0);
                    ui.label(if correct { "Correct! 🎉" } else { "Try again! 💡" });
                }

                ui.add_space(6.0);
                if ui.button("Close").clicked() {
                    close = true;
                }
            });

        let result = pick.map(|i| quiz.check(i));
        if let Some(correct) = result {
            self.quiz_result = Some(correct);
        }
        if close {
            self.quiz = None;
            self.quiz_result = None;
        }
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.universe.close_details();
            self.quiz = None;
            self.quiz_result = None;
        }

        self.ui_controls(ctx);
        self.ui_knowledge_panel(ctx);
        self.ui_universe(ctx);
        self.ui_quiz_modal(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_get_distinct_colors() {
        let colors: Vec<egui::Color32> =
            content::CATEGORIES.iter().map(|&c| category_color(c)).collect();

        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_category_falls_back_to_gray() {
        assert_eq!(category_color("not-a-category"), egui::Color32::GRAY);
    }

    #[test]
    fn new_viewer_mirrors_engine_defaults() {
        let viewer = Viewer::new();

        assert_eq!(
            viewer.particle_count,
            viewer.universe.starfield.particles.len()
        );
        assert_eq!(viewer.show_edges, viewer.universe.show_edges());
        assert!(viewer.filter.is_none());
        assert!(viewer.quiz.is_none());
        assert_eq!(viewer.universe.nodes.len(), content::catalog().len());
    }
}
