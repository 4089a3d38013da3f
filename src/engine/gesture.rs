//! Turning a drag on a player's button into a score change.
//!
//! Dragging upward adds points. The store trusts whatever score it is given,
//! so the clamp to [`MAX_SCORE`] happens here, before a command is produced.

use crate::engine::protocol::StoreCommand;
use crate::model::game_state::{GameState, MAX_SCORE};

/// Pixels of upward drag per point.
pub const DRAG_SENSITIVITY: f32 = 15.0;

/// `max(0, floor(pixels_up / sensitivity))`.
pub fn points_for_drag(pixels_up: f32, sensitivity: f32) -> u32 {
    if !pixels_up.is_finite() || !sensitivity.is_finite() || sensitivity <= 0.0 {
        return 0;
    }
    let points = (pixels_up / sensitivity).floor();
    if points <= 0.0 {
        0
    } else {
        // Saturating float-to-int cast.
        points as u32
    }
}

pub fn clamped_score(score: u32, points: u32) -> u32 {
    score.saturating_add(points).min(MAX_SCORE)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveDrag {
    player_index: usize,
    start_y: f32,
    points: u32,
}

/// Press, drag, release on a single player's button.
#[derive(Debug, Default)]
pub struct DragTracker {
    active: Option<ActiveDrag>,
}

impl DragTracker {
    /// Starts a drag. Pressing a player also makes them current. Disabled or
    /// unknown players are ignored.
    pub fn begin(&mut self, state: &GameState, player_index: usize, y: f32) -> Option<StoreCommand> {
        if !state.player(player_index).is_some_and(|p| p.enabled) {
            return None;
        }

        self.active = Some(ActiveDrag {
            player_index,
            start_y: y,
            points: 0,
        });
        Some(StoreCommand::SetCurrentPlayer { index: player_index })
    }

    /// Recomputes the pending points for the drag. Returns them, or `None` if
    /// `player_index` is not the one being dragged.
    pub fn update(&mut self, player_index: usize, y: f32, sensitivity: f32) -> Option<u32> {
        let drag = self.active.as_mut().filter(|d| d.player_index == player_index)?;
        // Screen y grows downward; dragging up means a positive distance.
        drag.points = points_for_drag(drag.start_y - y, sensitivity);
        Some(drag.points)
    }

    /// Ends the drag and, if any points were gathered, yields the clamped score.
    pub fn finish(&mut self, state: &GameState, player_index: usize) -> Option<StoreCommand> {
        let drag = self.active.filter(|d| d.player_index == player_index)?;
        self.active = None;

        let player = state.player(player_index).filter(|p| p.enabled)?;
        if drag.points == 0 {
            return None;
        }

        Some(StoreCommand::SetScore {
            player_index,
            score: clamped_score(player.score, drag.points),
        })
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// The player being dragged and the points gathered so far.
    pub fn pending(&self) -> Option<(usize, u32)> {
        self.active.map(|d| (d.player_index, d.points))
    }

    pub fn is_dragging(&self, player_index: usize) -> bool {
        self.active.is_some_and(|d| d.player_index == player_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::store::Store;

    #[test]
    fn drag_distance_maps_to_whole_points() {
        assert_eq!(points_for_drag(0.0, DRAG_SENSITIVITY), 0);
        assert_eq!(points_for_drag(14.9, DRAG_SENSITIVITY), 0);
        assert_eq!(points_for_drag(15.0, DRAG_SENSITIVITY), 1);
        assert_eq!(points_for_drag(44.0, DRAG_SENSITIVITY), 2);
        assert_eq!(points_for_drag(-90.0, DRAG_SENSITIVITY), 0);
        assert_eq!(points_for_drag(100.0, 0.0), 0);
        assert_eq!(points_for_drag(f32::NAN, DRAG_SENSITIVITY), 0);
    }

    #[test]
    fn clamp_stops_at_max_score() {
        assert_eq!(clamped_score(100, 5), 105);
        assert_eq!(clamped_score(118, 10), MAX_SCORE);
        assert_eq!(clamped_score(150, 1), MAX_SCORE);
        assert_eq!(clamped_score(u32::MAX, 1), MAX_SCORE);
    }

    #[test]
    fn upward_drag_submits_clamped_score() {
        let mut store = Store::default();
        store.set_score(1, 115).unwrap();
        let mut drag = DragTracker::default();

        let start = drag.begin(store.state(), 1, 400.0);
        assert_eq!(start, Some(StoreCommand::SetCurrentPlayer { index: 1 }));
        store.dispatch(start.unwrap()).unwrap();

        assert_eq!(drag.update(1, 250.0, DRAG_SENSITIVITY), Some(10));
        assert_eq!(drag.pending(), Some((1, 10)));

        let done = drag.finish(store.state(), 1).unwrap();
        assert_eq!(done, StoreCommand::SetScore { player_index: 1, score: MAX_SCORE });
        store.dispatch(done).unwrap();

        assert_eq!(store.state().players[1].score, MAX_SCORE);
        assert_eq!(store.state().current_player_index, 1);
        assert_eq!(drag.pending(), None);
    }

    #[test]
    fn downward_drag_adds_nothing() {
        let state = GameState::default();
        let mut drag = DragTracker::default();
        drag.begin(&state, 0, 100.0);
        assert_eq!(drag.update(0, 300.0, DRAG_SENSITIVITY), Some(0));
        assert_eq!(drag.finish(&state, 0), None);
    }

    #[test]
    fn disabled_players_cannot_be_dragged() {
        let mut state = GameState::default();
        state.players[2].enabled = false;
        let mut drag = DragTracker::default();

        assert_eq!(drag.begin(&state, 2, 100.0), None);
        assert_eq!(drag.begin(&state, 9, 100.0), None);
        assert!(!drag.is_dragging(2));
    }

    #[test]
    fn events_for_other_players_are_ignored() {
        let state = GameState::default();
        let mut drag = DragTracker::default();
        drag.begin(&state, 0, 200.0);

        assert_eq!(drag.update(1, 0.0, DRAG_SENSITIVITY), None);
        assert_eq!(drag.finish(&state, 1), None);
        assert!(drag.is_dragging(0));

        drag.cancel();
        assert_eq!(drag.pending(), None);
    }
}
