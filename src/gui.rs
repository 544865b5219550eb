use std::sync::Arc;
use std::time::Duration;

use eframe::egui::{self, Color32, Pos2, Rect, Rounding, Sense};

use crate::state::{ClickerState, MAX_CPS, MIN_CPS};

const TRACK_HEIGHT: f32 = 6.0;
const KNOB_RADIUS: f32 = 6.0;
/// Vertical band that accepts presses around the track.
const SLIDER_BAND: f32 = 24.0;

pub struct ClickerApp {
    state: Arc<ClickerState>,
    toggle_key: String,
}

impl ClickerApp {
    pub fn new(state: Arc<ClickerState>, toggle_key: String) -> Self {
        Self { state, toggle_key }
    }
}

impl eframe::App for ClickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ~60 fps cap; the rate label re-reads shared state every frame.
        ctx.request_repaint_after(Duration::from_millis(16));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("CPS Clicker");
            ui.add_space(8.0);

            let cps = self.state.cps();
            ui.label(format!("CPS: {cps}"));
            ui.add_space(12.0);

            if let Some(new_cps) = rate_slider(ui, cps) {
                self.state.set_cps(new_cps);
            }

            ui.add_space(12.0);
            let mut jitter = self.state.jitter();
            if ui.checkbox(&mut jitter, "Randomize interval").changed() {
                self.state.set_jitter(jitter);
            }

            ui.add_space(8.0);
            ui.label(format!("Press '{}' to toggle clicking", self.toggle_key));
        });
    }
}

/// Custom slider: a track rectangle with a circular knob whose horizontal
/// position encodes the rate. Returns the new rate when a press or drag
/// moved it.
fn rate_slider(ui: &mut egui::Ui, current: u32) -> Option<u32> {
    let width = ui.available_width();
    let (response, painter) =
        ui.allocate_painter(egui::vec2(width, SLIDER_BAND), Sense::click_and_drag());
    let rect = response.rect;

    let mut changed = None;
    if response.clicked() || response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            let cps = rate_from_x(pos.x, rect.left(), rect.width());
            if cps != current {
                changed = Some(cps);
            }
        }
    }

    let track = Rect::from_center_size(rect.center(), egui::vec2(rect.width(), TRACK_HEIGHT));
    painter.rect_filled(track, Rounding::same(3.0), Color32::from_rgb(100, 100, 100));

    let shown = changed.unwrap_or(current);
    let knob = Pos2::new(knob_x(shown, rect.left(), rect.width()), rect.center().y);
    painter.circle_filled(knob, KNOB_RADIUS, Color32::from_rgb(0, 200, 0));

    changed
}

/// Maps a pointer x position to a rate: clamped to the track extent, then
/// linearly interpolated over [`MIN_CPS`, `MAX_CPS`]. This is the only
/// place a rate value is produced from user input.
fn rate_from_x(x: f32, left: f32, width: f32) -> u32 {
    let t = ((x - left) / width).clamp(0.0, 1.0);
    MIN_CPS + (t * (MAX_CPS - MIN_CPS) as f32).round() as u32
}

/// Inverse of `rate_from_x`: knob center x for a given rate.
fn knob_x(cps: u32, left: f32, width: f32) -> f32 {
    left + (cps - MIN_CPS) as f32 / (MAX_CPS - MIN_CPS) as f32 * width
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEFT: f32 = 20.0;
    const WIDTH: f32 = 160.0;

    #[test]
    fn test_track_edges_map_to_range_ends() {
        assert_eq!(rate_from_x(LEFT, LEFT, WIDTH), MIN_CPS);
        assert_eq!(rate_from_x(LEFT + WIDTH, LEFT, WIDTH), MAX_CPS);
    }

    #[test]
    fn test_out_of_bounds_positions_are_clamped() {
        assert_eq!(rate_from_x(LEFT - 100.0, LEFT, WIDTH), MIN_CPS);
        assert_eq!(rate_from_x(LEFT + WIDTH + 100.0, LEFT, WIDTH), MAX_CPS);
        assert_eq!(rate_from_x(f32::NEG_INFINITY, LEFT, WIDTH), MIN_CPS);
    }

    #[test]
    fn test_mapping_is_monotonic_and_in_range() {
        let mut last = 0;
        let mut x = LEFT - 20.0;
        while x <= LEFT + WIDTH + 20.0 {
            let cps = rate_from_x(x, LEFT, WIDTH);
            assert!((MIN_CPS..=MAX_CPS).contains(&cps), "out of range at x={x}");
            assert!(cps >= last, "not monotonic at x={x}");
            last = cps;
            x += 0.5;
        }
        // A full sweep reaches both ends.
        assert_eq!(last, MAX_CPS);
    }

    #[test]
    fn test_rate_round_trips_through_knob_position() {
        for cps in MIN_CPS..=MAX_CPS {
            let x = knob_x(cps, LEFT, WIDTH);
            let back = rate_from_x(x, LEFT, WIDTH);
            assert!(
                back.abs_diff(cps) <= 1,
                "round trip of {cps} gave {back}"
            );
        }
    }
}
