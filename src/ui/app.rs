//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::{GameConfig, GameController, GameEvent, GameStatus, Outcome, Pos, Stone};
use super::board_view::{BoardOverlay, BoardView};
use super::theme::*;

/// Main Gomoku application
pub struct GomokuApp {
    game: GameController,
    board_view: BoardView,
    /// Keyboard cursor, moved with the arrow keys and played with Space
    cursor: Pos,
    message: Option<String>,
    show_debug: bool,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self::with_config(config)
    }

    fn with_config(config: GameConfig) -> Self {
        let game = GameController::new(config);
        let cursor = game.board().center();
        Self {
            game,
            board_view: BoardView::default(),
            cursor,
            message: None,
            show_debug: true,
        }
    }

    /// Start over with a different engine side, keeping the engine settings
    fn restart_with(&mut self, ai_player: Option<Stone>) {
        let config = GameConfig {
            ai_player,
            ..self.game.config().clone()
        };
        self.game = GameController::new(config);
        self.cursor = self.game.board().center();
        self.message = None;
    }

    fn new_game(&mut self) {
        self.game.new_game();
        self.message = None;
    }

    fn undo(&mut self) {
        if !self.game.undo_turn() {
            self.message = Some("Nothing to undo".to_string());
        } else {
            self.message = None;
        }
    }

    /// Play for the side to move; rejected moves are shown, not applied
    fn try_play(&mut self, pos: Pos) {
        match self.game.play(pos) {
            Ok(events) => {
                self.message = None;
                for event in events {
                    if let GameEvent::AiMoved { pos, result } = event {
                        tracing::debug!(%pos, score = result.score, time_ms = result.time_ms, "engine replied");
                    }
                }
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Play Black vs Engine").clicked() {
                        self.restart_with(Some(Stone::White));
                        ui.close_menu();
                    }
                    if ui.button("Play White vs Engine").clicked() {
                        self.restart_with(Some(Stone::Black));
                        ui.close_menu();
                    }
                    if ui.button("Two Players").clicked() {
                        self.restart_with(None);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Engine Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.game.config().ai_player {
                        Some(ai) => format!("PvE - You: {}", ai.opponent().name()),
                        None => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

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

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_engine_card(ui);
                }

                if self.game.outcome().is_terminal() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five in a row, 15x15").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (stone, status, status_color) = match self.game.status() {
                GameStatus::WaitingFor(stone) if self.game.is_human_turn() => (stone, "Your turn", STATUS_OK),
                GameStatus::WaitingFor(stone) => (stone, "Engine to move", STATUS_WARN),
                GameStatus::Won(stone) => (stone, "Game Over", WIN_HIGHLIGHT),
                GameStatus::Draw => (self.game.to_move(), "Draw", TEXT_SECONDARY),
            };
            let (fill, label) = if stone == Stone::White {
                (WHITE_STONE, "WHITE")
            } else {
                (BLACK_STONE, "BLACK")
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, fill);

                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(label).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(status).size(12.0).color(status_color));
                });
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Undo").clicked() {
                    self.undo();
                }
                if ui.button("New Game").clicked() {
                    self.new_game();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.game.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
            ui.label(
                RichText::new(format!("Cursor {}", self.cursor))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Statistics of the engine's most recent move
    fn render_engine_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ENGINE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = self.game.last_ai_result() else {
                ui.label(RichText::new("No engine move yet").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.label(
                RichText::new(format!("{:?}", result.search_type))
                    .size(11.0)
                    .strong()
                    .color(STATUS_OK),
            );
            ui.label(RichText::new(format!("Score: {:.0}", result.score)).size(10.0).color(TEXT_SECONDARY));
            ui.label(
                RichText::new(format!("Depth {} / {} nodes / {}ms", result.depth, result.nodes, result.time_ms))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
            if let Some(pos) = result.best_move {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("Played {pos}")).size(12.0).strong().color(WIN_HIGHLIGHT));
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let headline = match self.game.outcome() {
            Outcome::Win { winner, .. } => format!("{} WINS!", winner.name().to_uppercase()),
            Outcome::Draw => "DRAW".to_string(),
            Outcome::Ongoing => return,
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);
                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.new_game();
                    }
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

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let overlay = BoardOverlay {
                to_move: self.game.to_move(),
                last_move: self.game.last_move(),
                cursor: Some(self.cursor),
                winning_line: self.game.win_line(),
                interactive: self.game.is_human_turn(),
            };
            let clicked = self.board_view.show(ui, self.game.board(), &overlay);

            if let Some(pos) = clicked {
                self.cursor = pos;
                self.try_play(pos);
            }
        });
    }

    /// Keyboard shortcuts: N new game, U undo, D engine panel,
    /// arrows move the cursor, Space plays at the cursor.
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, undo, toggle_debug, play, dr, dc) = ctx.input(|i| {
            let mut dr = 0;
            let mut dc = 0;
            if i.key_pressed(egui::Key::ArrowUp) {
                dr -= 1;
            }
            if i.key_pressed(egui::Key::ArrowDown) {
                dr += 1;
            }
            if i.key_pressed(egui::Key::ArrowLeft) {
                dc -= 1;
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                dc += 1;
            }
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::Space),
                dr,
                dc,
            )
        });

        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if new_game {
            self.new_game();
        }
        if undo {
            self.undo();
        }
        if dr != 0 || dc != 0 {
            let (row, col) = self.cursor.offset(dr, dc, 1);
            if let Some(pos) = self.game.board().pos_at(row, col) {
                self.cursor = pos;
            }
        }
        if play && self.game.is_human_turn() {
            self.try_play(self.cursor);
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
