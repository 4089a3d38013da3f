use eframe::egui;
use egui::{vec2, Align2, Color32, FontId, Stroke, StrokeKind};

use prest_board::{GameState, StoreCommand};

use super::app::{swatch, BoardApp};

const BUTTON_SIZE: egui::Vec2 = vec2(96.0, 80.0);

pub fn draw_controls_panel(ctx: &egui::Context, app: &mut BoardApp, state: &GameState) {
    egui::TopBottomPanel::bottom("controls")
        .frame(
            egui::Frame::new()
                .fill(Color32::from_rgb(0x1f, 0x29, 0x37))
                .inner_margin(egui::Margin::same(10)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (index, _) in state.enabled_players() {
                    player_button(ui, app, state, index);
                }

                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    if ui
                        .add_enabled(state.can_undo(), egui::Button::new("Undo"))
                        .clicked()
                    {
                        app.send_command(StoreCommand::Undo);
                    }
                    let reset = egui::Button::new(
                        egui::RichText::new("Reset").color(Color32::WHITE),
                    )
                    .fill(Color32::from_rgb(0xef, 0x44, 0x44));
                    if ui.add(reset).clicked() {
                        app.drag.cancel();
                        app.send_command(StoreCommand::ResetGame);
                    }
                });
            });
        });
}

/// Press to take the turn, drag upward to add points, release to commit.
fn player_button(ui: &mut egui::Ui, app: &mut BoardApp, state: &GameState, index: usize) {
    let player = &state.players[index];
    let (rect, response) = ui.allocate_exact_size(BUTTON_SIZE, egui::Sense::click_and_drag());

    if response.drag_started() {
        let start = ui
            .input(|i| i.pointer.press_origin())
            .or(response.interact_pointer_pos());
        if let Some(pos) = start {
            if let Some(command) = app.drag.begin(state, index, pos.y) {
                app.send_command(command);
            }
        }
    } else if response.clicked() {
        app.send_command(StoreCommand::SetCurrentPlayer { index });
    }

    if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            app.drag.update(index, pos.y, app.settings.drag_sensitivity);
        }
    }

    if response.drag_stopped() {
        if let Some(command) = app.drag.finish(state, index) {
            app.send_command(command);
        }
    }

    let painter = ui.painter();
    painter.rect_filled(rect, egui::CornerRadius::same(8), swatch(player.color));
    let outline = if app.drag.is_dragging(index) {
        Some(Stroke::new(3.0, Color32::YELLOW))
    } else if state.current_player_index == index {
        Some(Stroke::new(2.0, Color32::WHITE))
    } else {
        None
    };
    if let Some(stroke) = outline {
        painter.rect_stroke(rect, egui::CornerRadius::same(8), stroke, StrokeKind::Inside);
    }

    painter.text(
        rect.center_top() + vec2(0.0, 8.0),
        Align2::CENTER_TOP,
        &player.name,
        FontId::proportional(13.0),
        Color32::WHITE,
    );
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        player.score.to_string(),
        FontId::proportional(20.0),
        Color32::WHITE,
    );
    painter.text(
        rect.center_bottom() - vec2(0.0, 6.0),
        Align2::CENTER_BOTTOM,
        "↑↑",
        FontId::proportional(11.0),
        Color32::WHITE,
    );

    if let Some((dragging, points)) = app.drag.pending() {
        if dragging == index && points > 0 {
            painter.text(
                rect.center() - vec2(0.0, 20.0),
                Align2::CENTER_CENTER,
                format!("+{points}"),
                FontId::proportional(14.0),
                Color32::WHITE,
            );
        }
    }
}
