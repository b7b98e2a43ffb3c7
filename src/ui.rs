// ui.rs - egui rendering layer and parameter form
//
// Thin collaborator over the controller: it paints the active board,
// forwards clicks as toggles, and submits period/size changes. Validation
// verdicts come from the controller; the form only displays them.

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::Duration;

use crate::controller::LifeGame;
use crate::patterns;

pub struct LifeGameApp {
    game: LifeGame,
    width_input: String,
    height_input: String,
    period_input: String,
    form_error: Option<String>,
    live_color: Color32,
    dead_color: Color32,
    selected_pattern: usize,
}

impl Default for LifeGameApp {
    fn default() -> Self {
        let game = LifeGame::default();
        Self {
            width_input: game.width().to_string(),
            height_input: game.height().to_string(),
            period_input: game.period().as_millis().to_string(),
            form_error: None,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            game,
        }
    }
}

impl LifeGameApp {
    fn apply_period_input(&mut self) {
        self.form_error = None;
        let millis: u64 = match self.period_input.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                self.form_error = Some("period must be a whole number of milliseconds".into());
                return;
            }
        };
        if let Err(err) = self.game.set_period(Duration::from_millis(millis)) {
            self.form_error = Some(err.to_string());
        }
    }

    fn apply_size_input(&mut self) {
        self.form_error = None;
        let parsed: Result<(usize, usize), _> = self
            .width_input
            .trim()
            .parse()
            .and_then(|w| Ok((w, self.height_input.trim().parse()?)));
        let (width, height) = match parsed {
            Ok(dims) => dims,
            Err(_) => {
                self.form_error = Some("width and height must be whole numbers".into());
                return;
            }
        };
        if let Err(err) = self.game.resize(width, height) {
            self.form_error = Some(err.to_string());
        }
    }
}

impl eframe::App for LifeGameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.game.is_running() { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    if self.game.is_running() {
                        self.game.stop();
                    } else {
                        self.game.start();
                    }
                }

                if ui.button("⏭ Step").clicked() && !self.game.is_running() {
                    self.game.step();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.game.stop();
                    self.game.clear();
                }

                if ui.button("🎲 Random").clicked() {
                    self.game.stop();
                    self.game.randomize();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.game.stop();
                    self.game
                        .apply_pattern(&patterns::PATTERNS[self.selected_pattern]);
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.game.generation()));
            });

            ui.separator();

            // Parameter form
            ui.horizontal(|ui| {
                ui.label("Period (ms):");
                ui.add(egui::TextEdit::singleline(&mut self.period_input).desired_width(60.0));
                if ui.button("Set Period").clicked() {
                    self.apply_period_input();
                }

                ui.separator();

                ui.label("Width:");
                ui.add(egui::TextEdit::singleline(&mut self.width_input).desired_width(50.0));
                ui.label("Height:");
                ui.add(egui::TextEdit::singleline(&mut self.height_input).desired_width(50.0));
                if ui.button("Resize").clicked() {
                    self.apply_size_input();
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            if let Some(error) = &self.form_error {
                ui.colored_label(Color32::from_rgb(220, 60, 60), error);
            }

            ui.separator();

            ui.label("Click cells to toggle them alive/dead. Use Start/Pause to run the simulation.");

            ui.separator();

            // Draw the grid
            let (grid_w, grid_h) = (self.game.width(), self.game.height());
            let box_size = (720.0 / grid_w.max(grid_h) as f32).clamp(1.5, 15.0);
            let spacing = if box_size > 4.0 { 0.5 } else { 0.0 };

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                (box_size + spacing) * grid_w as f32 - spacing,
                (box_size + spacing) * grid_h as f32 - spacing,
            );

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

            let population = {
                let board = self.game.current_board();
                for cell in board.cells() {
                    let x = start_pos.x + cell.x() as f32 * (box_size + spacing);
                    let y = start_pos.y + cell.y() as f32 * (box_size + spacing);
                    let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                    let cell_color = if cell.is_alive() {
                        self.live_color
                    } else {
                        self.dead_color
                    };
                    painter.rect_filled(rect, 1.0, cell_color);
                    if box_size > 4.0 {
                        painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                    }
                }
                board.population()
            };

            // Map a click back to a cell (only when paused, like editing
            // should be). The board view above is dropped by now, so the
            // toggle can take the controller lock.
            if !self.game.is_running() && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let col = ((pos.x - start_pos.x) / (box_size + spacing)) as usize;
                    let row = ((pos.y - start_pos.y) / (box_size + spacing)) as usize;
                    let _ = self.game.toggle(col, row);
                }
            }

            ui.separator();

            // Statistics
            let total = grid_w * grid_h;
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", population));
                ui.label(format!("Dead cells: {}", total - population));
                ui.label(format!(
                    "Population: {:.1}%",
                    (population as f32 / total as f32) * 100.0
                ));
            });
        });

        // The timer thread mutates state between frames; keep repainting
        // at the step cadence while running.
        if self.game.is_running() {
            ctx.request_repaint_after(self.game.period());
        }
    }
}
