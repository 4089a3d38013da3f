use eframe::egui;
use tracing::warn;

use prest_board::engine::gesture::DragTracker;
use prest_board::storage::PersistWorker;
use prest_board::{PlayerColor, Store, StoreCommand};

use super::board_panel::draw_board_panel;
use super::controls_panel::draw_controls_panel;
use super::player_settings::draw_player_settings;
use super::settings::UiSettings;

/* =========================
   App
   ========================= */

pub struct BoardApp {
    store: Store,
    pub(super) settings: UiSettings,
    pub(super) drag: DragTracker,

    /// Commands gathered while drawing, applied in order once the frame is laid out.
    pending: Vec<StoreCommand>,

    // Kept alive for the app's lifetime; dropping it flushes queued saves.
    _persist: PersistWorker,
}

impl BoardApp {
    pub fn new(store: Store, settings: UiSettings, persist: PersistWorker) -> Self {
        Self {
            store,
            settings,
            drag: DragTracker::default(),
            pending: Vec::new(),
            _persist: persist,
        }
    }

    pub(super) fn send_command(&mut self, command: StoreCommand) {
        self.pending.push(command);
    }

    fn apply_pending(&mut self, ctx: &egui::Context) {
        if self.pending.is_empty() {
            return;
        }
        for command in self.pending.drain(..) {
            let name = command.short_name();
            if let Err(e) = self.store.dispatch(command) {
                warn!(command = name, error = %e, "command rejected");
            }
        }
        ctx.request_repaint();
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.settings.ui_scale);

        // Drawing reads this snapshot; mutations go through `send_command`.
        let state = self.store.snapshot();

        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Prest-board");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙").on_hover_text("Settings").clicked() {
                        self.send_command(StoreCommand::ToggleSettings);
                    }
                    let current = state.current_player();
                    ui.label(
                        egui::RichText::new(format!("Turn: {}", current.name))
                            .color(swatch(current.color)),
                    );
                });
            });
        });

        draw_controls_panel(ctx, self, &state);

        if state.is_settings_open {
            draw_player_settings(ctx, self, &state);
        }

        draw_board_panel(ctx, &state);

        self.apply_pending(ctx);
    }
}

/* =========================
   UI Helpers
   ========================= */

pub fn swatch(color: PlayerColor) -> egui::Color32 {
    let [r, g, b] = color.rgb();
    egui::Color32::from_rgb(r, g, b)
}
