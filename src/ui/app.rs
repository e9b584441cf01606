//! Main application for the checkers GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardView, Overlay};
use super::game_state::GameState;
use super::theme::*;
use crate::config::{GameConfig, GameMode};
use crate::notation::format_action;
use crate::Side;

/// Main checkers application
pub struct CheckersApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl CheckersApp {
    /// Create the app for the given configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Black)").clicked() {
                        self.state.restart(GameMode::PvE { human: Side::Black });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - White)").clicked() {
                        self.state.restart(GameMode::PvE { human: Side::White });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.state.restart(GameMode::PvP { show_hints: false });
                        ui.close_menu();
                    }
                });

                ui.menu_button("AI", |ui| {
                    let mut depth = self.state.engine_config().depth;
                    if ui.add(egui::Slider::new(&mut depth, 1..=10).text("Depth")).changed() {
                        self.state.set_depth(depth);
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                    if let GameMode::PvP { show_hints } = &mut self.state.mode {
                        ui.checkbox(show_hints, "Highlight movable pieces");
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human } => format!("PvE - You: {human}"),
                        GameMode::PvP { .. } => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_timer_card(ui);
                ui.add_space(10.0);
                self.render_material_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.state.is_finished() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(egui::Color32::from_rgb(180, 180, 185)));
            ui.add_space(4.0);
            ui.label(RichText::new("CHECKERS").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("English draughts").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.state.current_turn == Side::Black;
            let (accent, glyph_color) = if is_black {
                (egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY)
            } else {
                (egui::Color32::from_rgb(220, 220, 225), egui::Color32::from_rgb(30, 30, 35))
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    if is_black { "B" } else { "W" },
                    egui::FontId::proportional(22.0),
                    glyph_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let name = self.state.current_turn.to_string().to_uppercase();
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_hint_pending() {
                        ("Finding hint...", TIMER_WARNING)
                    } else if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.is_finished() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.pending_chain.is_some() {
                        ("Keep capturing", TIMER_WARNING)
                    } else {
                        ("Your turn", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 1.0 {
                    TIMER_NORMAL
                } else if secs < 3.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{secs:.2}s")).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Pieces, kings and capture points for both sides
    fn render_material_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MATERIAL").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            egui::Grid::new("material_grid").num_columns(4).spacing([14.0, 4.0]).show(ui, |ui| {
                for header in ["", "Pieces", "Kings", "Score"] {
                    ui.label(RichText::new(header).size(10.0).color(TEXT_MUTED));
                }
                ui.end_row();

                for side in [Side::Black, Side::White] {
                    let board = &self.state.board;
                    ui.label(RichText::new(side.to_string()).size(12.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(board.piece_count(side).to_string()).color(TEXT_SECONDARY));
                    ui.label(RichText::new(board.king_count(side).to_string()).color(TEXT_SECONDARY));
                    ui.label(RichText::new(board.score(side).to_string()).color(TEXT_SECONDARY));
                    ui.end_row();
                }
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(egui::Color32::from_rgb(50, 53, 58))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    let new_game = egui::Label::new(RichText::new("New Game").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(new_game.sense(egui::Sense::click())).clicked() {
                        self.state.reset();
                    }
                });

                ui.add_space(4.0);

                if let GameMode::PvP { .. } = self.state.mode {
                    btn_frame.show(ui, |ui| {
                        let hint = egui::Label::new(RichText::new("Hint").size(12.0).color(TEXT_PRIMARY));
                        if ui.add(hint.sense(egui::Sense::click())).clicked() {
                            self.state.request_hint();
                        }
                    });
                }
            });

            ui.add_space(8.0);
            ui.label(RichText::new(format!("Turn #{}", self.state.turn_count)).size(11.0).color(TEXT_SECONDARY));
            if let Some((from, action)) = &self.state.last_action {
                ui.label(RichText::new(format!("Last: {}", format_action(*from, action))).size(11.0).color(TEXT_SECONDARY));
            }
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let config = self.state.engine_config();
            ui.label(
                RichText::new(format!("{:?}, depth {}", config.algorithm, config.depth))
                    .size(11.0)
                    .strong()
                    .color(TIMER_NORMAL),
            );

            if let Some(decision) = &self.state.last_decision {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("Value: {}", decision.value)).size(10.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{}ms", decision.time_ms)).size(10.0).color(TEXT_SECONDARY));
                            ui.label(RichText::new(format!("{} nodes", decision.nodes)).size(10.0).color(TEXT_MUTED));
                        });
                    });
                });
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("→ {}", format_action(decision.from, &decision.action)))
                        .size(12.0)
                        .strong()
                        .color(WIN_HIGHLIGHT),
                );
                if !decision.completed {
                    ui.label(RichText::new("cut short by time limit").size(10.0).color(TIMER_WARNING));
                }
            } else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let (title, detail) = match (self.state.game_over, self.state.stalled) {
            (Some(winner), _) => (format!("{} WINS!", winner.to_string().to_uppercase()), "all enemy pieces taken".to_string()),
            (None, Some(side)) => ("NO MOVES".to_string(), format!("{side} cannot act")),
            (None, None) => return,
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(title).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(4.0);
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let label = egui::Label::new(RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY));
                            if ui.add(label.sense(egui::Sense::click())).clicked() {
                                self.state.reset();
                            }
                        });
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn overlay(&self) -> Overlay {
        let state = &self.state;
        let selected = state.selected;
        let show_movable = match state.mode {
            GameMode::PvE { .. } => true,
            GameMode::PvP { show_hints } => show_hints,
        };

        Overlay {
            selected,
            destinations: selected.map(|pos| state.destinations(pos)).unwrap_or_default(),
            movable: if show_movable && state.is_human_turn() && !state.is_finished() {
                state.movable_pieces()
            } else {
                Vec::new()
            },
            last_path: state.last_action.as_ref().map(|(from, action)| action.path(*from)).unwrap_or_default(),
            hint_path: state.hint.as_ref().map(|(from, action)| action.path(*from)).unwrap_or_default(),
        }
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let overlay = self.overlay();
            let interactive = self.state.is_human_turn() && !self.state.is_finished();
            let clicked = self.board_view.show(ui, &self.state.board, &overlay, interactive);

            if let Some(pos) = clicked {
                if let Err(err) = self.state.click(pos) {
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // H - Get hint (PvP mode)
            if i.key_pressed(egui::Key::H) {
                if let GameMode::PvP { .. } = self.state.mode {
                    self.state.request_hint();
                }
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for CheckersApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && !self.state.is_finished() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
