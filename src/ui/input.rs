//! Karten-Input: Klicks, Drag, Scroll → AppIntent.

use std::time::Instant;

use glam::DVec2;

use super::keyboard;
use crate::app::{AppIntent, AppState};
use crate::shared::options::SCROLL_PIXELS_PER_ZOOM_STEP;

/// Bildschirmposition relativ zur Kartenfläche.
fn relative(pos: egui::Pos2, rect: egui::Rect) -> [f32; 2] {
    [pos.x - rect.min.x, pos.y - rect.min.y]
}

/// Verwaltet den Input-Zustand der Kartenfläche.
#[derive(Debug, Default)]
pub struct InputState {
    /// Noch nicht in Zoomstufen umgesetzte Scroll-Pixel
    scroll_accum: f32,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Karten-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Maus, Scroll und Tastatur auf der Karte.
    pub fn collect_map_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        rect: egui::Rect,
        state: &AppState,
    ) -> Vec<AppIntent> {
        let mut events = vec![AppIntent::ViewportResized {
            size: [rect.width(), rect.height()],
        }];

        events.extend(keyboard::collect_keyboard_intents(ui, state));

        if state.interaction.is_modal() {
            self.scroll_accum = 0.0;
            return events;
        }

        let now = Instant::now();
        let size = DVec2::new(f64::from(rect.width()), f64::from(rect.height()));
        let to_geo = |screen: [f32; 2]| {
            state
                .view
                .viewport
                .screen_to_geo(DVec2::new(f64::from(screen[0]), f64::from(screen[1])), size)
        };

        // ── Drag ───────────────────────────────────────────────
        if response.drag_started_by(egui::PointerButton::Primary) {
            events.push(AppIntent::MapDragStarted);
        }
        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                events.push(AppIntent::MapPanned {
                    delta: [delta.x, delta.y],
                });
            }
        }
        if response.drag_stopped_by(egui::PointerButton::Primary) {
            events.push(AppIntent::MapDragEnded { now });
        }

        // ── Klicks ─────────────────────────────────────────────
        if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                let screen = relative(pos, rect);
                events.push(AppIntent::MapClicked {
                    position: to_geo(screen),
                    screen,
                });
            }
        }
        if response.secondary_clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let screen = relative(pos, rect);
                events.push(AppIntent::MapSecondaryClicked {
                    position: to_geo(screen),
                    screen,
                });
            }
        }

        // ── Scroll-Zoom ────────────────────────────────────────
        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            self.scroll_accum += scroll;
            let steps = (self.scroll_accum / SCROLL_PIXELS_PER_ZOOM_STEP).trunc();
            if steps != 0.0 {
                self.scroll_accum -= steps * SCROLL_PIXELS_PER_ZOOM_STEP;
                let anchor = response
                    .hover_pos()
                    .map(|p| relative(p, rect))
                    .unwrap_or([rect.width() * 0.5, rect.height() * 0.5]);
                events.push(AppIntent::MapZoomed {
                    steps: steps as i32,
                    anchor,
                    now,
                });
            }
        } else {
            self.scroll_accum = 0.0;
        }

        // ── Cursor ─────────────────────────────────────────────
        if state.interaction.picking_target().is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
        } else if state.view.dragging {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        }

        events
    }
}
