use eframe::egui;
use egui::emath::RectTransform;
use egui::{pos2, vec2, Color32, Pos2, Rect, Stroke, Vec2};

use prest_board::{GameState, MAX_SCORE};

use super::app::swatch;

/// Board drawing space; scaled to fit the panel.
const VIEW: Vec2 = vec2(300.0, 600.0);
const CURVE_SEGMENTS: usize = 16;
const LANE_SPREAD: f32 = 10.0;

const WOOD_DARK: Color32 = Color32::from_rgb(0x8b, 0x45, 0x13);
const WOOD_LIGHT: Color32 = Color32::from_rgb(0xa0, 0x52, 0x2d);
const GROOVE: Color32 = Color32::from_rgb(0xd2, 0xb4, 0x8c);
const FINISH: Color32 = Color32::from_rgb(0xda, 0xa5, 0x20);

pub fn draw_board_panel(ctx: &egui::Context, state: &GameState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (rect, _) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
        let scale = (rect.width() / VIEW.x).min(rect.height() / VIEW.y);
        let board = Rect::from_center_size(rect.center(), VIEW * scale);
        let to_screen = RectTransform::from_to(Rect::from_min_size(Pos2::ZERO, VIEW), board);
        let painter = ui.painter_at(rect);

        let area = |min: Pos2, max: Pos2| {
            Rect::from_min_max(to_screen.transform_pos(min), to_screen.transform_pos(max))
        };
        painter.rect_filled(area(pos2(25.0, 50.0), pos2(275.0, 550.0)), radius(30.0 * scale), WOOD_DARK);
        painter.rect_filled(area(pos2(35.0, 60.0), pos2(265.0, 540.0)), radius(20.0 * scale), WOOD_LIGHT);

        let on_screen = |points: Vec<Pos2>| -> Vec<Pos2> {
            points.into_iter().map(|p| to_screen.transform_pos(p)).collect()
        };
        painter.add(egui::Shape::line(
            on_screen(track(0.0)),
            Stroke::new(40.0 * scale, GROOVE),
        ));

        let lanes: Vec<_> = state.enabled_players().collect();
        for (lane, (_, player)) in lanes.iter().enumerate() {
            let offset = lane_offset(lane, lanes.len());
            let color = swatch(player.color);
            let progress = (player.score as f32 / MAX_SCORE as f32).min(1.0);

            let path = track(offset);
            painter.circle_filled(to_screen.transform_pos(path[0]), 5.0 * scale, color);
            painter.add(egui::Shape::line(
                on_screen(truncate(&path, progress)),
                Stroke::new(10.0 * scale, color),
            ));
        }

        let finish = to_screen.transform_pos(pos2(150.0, 130.0));
        painter.circle(finish, 10.0 * scale, FINISH, Stroke::new(2.0 * scale, WOOD_DARK));
    });

    if let Some(winner) = state.winner() {
        egui::Area::new(egui::Id::new("winner_overlay"))
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(Color32::from_rgb(0xfd, 0xe0, 0x47))
                    .corner_radius(egui::CornerRadius::same(8))
                    .inner_margin(egui::Margin::same(12))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(format!("{} wins!", winner.name))
                                .size(26.0)
                                .strong()
                                .color(Color32::from_rgb(0x85, 0x4d, 0x0e)),
                        );
                    });
            });
    }
}

fn radius(r: f32) -> egui::CornerRadius {
    egui::CornerRadius::same(r.round().clamp(0.0, 255.0) as u8)
}

/// Sideways shift of lane `lane` out of `lanes`, spreading them across the groove.
fn lane_offset(lane: usize, lanes: usize) -> f32 {
    if lanes <= 1 {
        return 0.0;
    }
    LANE_SPREAD * ((lane as f32 / (lanes - 1) as f32) * 2.0 - 1.0)
}

/// Up the left side, over the top, down the right, then back up the middle
/// to the finish peg.
fn track(offset: f32) -> Vec<Pos2> {
    let left = 75.0 + offset;
    let right = 225.0 - offset;
    let center = 150.0 + offset;
    let top = 100.0 + offset;
    let bottom = 480.0 - offset;

    let mut points = vec![pos2(left, 480.0), pos2(left, top)];
    cubic(
        &mut points,
        [
            pos2(left, top),
            pos2(left - 5.0, 80.0 + offset),
            pos2(right + 5.0, 80.0 + offset),
            pos2(right, top),
        ],
    );
    points.push(pos2(right, bottom));
    cubic(
        &mut points,
        [
            pos2(right, bottom),
            pos2(right - 5.0, 500.0 - offset),
            pos2(center + 5.0, 500.0 - offset),
            pos2(center, bottom),
        ],
    );
    points.push(pos2(center, 130.0));
    points
}

fn cubic(out: &mut Vec<Pos2>, [p0, p1, p2, p3]: [Pos2; 4]) {
    for i in 1..=CURVE_SEGMENTS {
        let t = i as f32 / CURVE_SEGMENTS as f32;
        let u = 1.0 - t;
        let p = p0.to_vec2() * (u * u * u)
            + p1.to_vec2() * (3.0 * u * u * t)
            + p2.to_vec2() * (3.0 * u * t * t)
            + p3.to_vec2() * (t * t * t);
        out.push(p.to_pos2());
    }
}

/// Leading part of the polyline covering `fraction` of its length.
fn truncate(points: &[Pos2], fraction: f32) -> Vec<Pos2> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };
    let total: f32 = points.windows(2).map(|w| w[0].distance(w[1])).sum();
    let mut remaining = total * fraction.clamp(0.0, 1.0);

    let mut out = vec![first];
    for w in points.windows(2) {
        let len = w[0].distance(w[1]);
        if len >= remaining {
            if len > 0.0 {
                out.push(w[0] + (w[1] - w[0]) * (remaining / len));
            }
            break;
        }
        remaining -= len;
        out.push(w[1]);
    }
    out
}
