use eframe::egui;
use egui::{vec2, Color32, Stroke};

use prest_board::{GameState, Player, PlayerColor, StoreCommand};

use super::app::{swatch, BoardApp};
use super::settings::{DRAG_SENSITIVITY_RANGE, UI_SCALE_RANGE};
use super::settings_io::save_settings;

pub fn draw_player_settings(ctx: &egui::Context, app: &mut BoardApp, state: &GameState) {
    let mut open = true;
    let enabled_count = state.enabled_count();

    egui::Window::new("Player Settings")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                for (index, player) in state.players.iter().enumerate() {
                    ui.group(|ui| {
                        draw_player(ui, app, index, player, enabled_count);
                    });
                    ui.add_space(6.0);
                }

                ui.collapsing("Display", |ui| draw_display(ui, app));

                ui.separator();
                if ui.button("Save Changes").clicked() {
                    app.send_command(StoreCommand::ToggleSettings);
                }
            });
        });

    if !open {
        app.send_command(StoreCommand::ToggleSettings);
    }
}

fn draw_player(
    ui: &mut egui::Ui,
    app: &mut BoardApp,
    index: usize,
    player: &Player,
    enabled_count: usize,
) {
    ui.horizontal(|ui| {
        ui.strong(format!("Player {}", index + 1));

        // The last enabled player stays on.
        let locked = player.enabled && enabled_count <= 1;
        let mut enabled = player.enabled;
        let label = if player.enabled { "Enabled" } else { "Disabled" };
        if ui
            .add_enabled(!locked, egui::Checkbox::new(&mut enabled, label))
            .on_disabled_hover_text("At least one player must stay enabled")
            .changed()
        {
            app.send_command(StoreCommand::TogglePlayerEnabled {
                player_index: index,
            });
        }
    });

    ui.add_enabled_ui(player.enabled, |ui| {
        ui.label("Name");
        let mut name = player.name.clone();
        if ui.text_edit_singleline(&mut name).changed() {
            app.send_command(StoreCommand::SetPlayerName {
                player_index: index,
                name,
            });
        }

        ui.label("Color");
        let mut color = player.color;
        egui::ComboBox::from_id_salt(("player_color", index))
            .selected_text(color.name())
            .show_ui(ui, |ui| {
                for option in PlayerColor::ALL {
                    ui.selectable_value(&mut color, option, option.name());
                }
            });

        ui.horizontal_wrapped(|ui| {
            for option in PlayerColor::ALL {
                if color_dot(ui, option, option == color).clicked() {
                    color = option;
                }
            }
        });

        if color != player.color {
            app.send_command(StoreCommand::SetPlayerColor {
                player_index: index,
                color,
            });
        }
    });
}

fn color_dot(ui: &mut egui::Ui, color: PlayerColor, selected: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(vec2(22.0, 22.0), egui::Sense::click());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), 9.0, swatch(color));
    if selected {
        painter.circle_stroke(rect.center(), 10.0, Stroke::new(2.0, Color32::BLACK));
    }
    response.on_hover_text(color.name())
}

fn draw_display(ui: &mut egui::Ui, app: &mut BoardApp) {
    let mut settled = false;

    ui.label("UI Scale");
    let scale = ui.add(egui::Slider::new(&mut app.settings.ui_scale, UI_SCALE_RANGE));
    settled |= slider_settled(&scale);

    ui.label("Drag sensitivity (pixels per point)");
    let sensitivity = ui.add(egui::Slider::new(
        &mut app.settings.drag_sensitivity,
        DRAG_SENSITIVITY_RANGE,
    ));
    settled |= slider_settled(&sensitivity);

    if settled {
        save_settings(&app.settings);
    }
}

fn slider_settled(response: &egui::Response) -> bool {
    should_save(response.changed(), response.dragged(), response.drag_stopped())
}

/// Slider values are saved once per gesture: when a drag is released, or on
/// a change that did not come from dragging (click, keyboard, typed value).
fn should_save(changed: bool, dragging: bool, drag_stopped: bool) -> bool {
    drag_stopped || (changed && !dragging)
}

#[cfg(test)]
mod tests {
    use super::should_save;

    #[test]
    fn dragging_slider_saves_only_on_release() {
        // Each frame of a drag changes the value.
        assert!(!should_save(true, true, false));
        assert!(!should_save(true, true, false));
        assert!(should_save(false, false, true));
    }

    #[test]
    fn non_drag_edits_save_immediately() {
        assert!(should_save(true, false, false));
        assert!(!should_save(false, false, false));
    }
}
