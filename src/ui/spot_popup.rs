//! Popup eines angeklickten Spot-Markers.

use glam::DVec2;

use crate::app::{AppIntent, AppState};

/// Zeigt das Popup über dem Marker des offenen Spots.
pub fn show_spot_popup(
    ctx: &egui::Context,
    state: &mut AppState,
    map_rect: egui::Rect,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(popup) = state.view.spot_popup.as_ref() else {
        return events;
    };
    let Some(spot) = state.spots.get(&popup.spot_id) else {
        return events;
    };
    let Some(position) = spot.position() else {
        return events;
    };

    let size = DVec2::new(f64::from(map_rect.width()), f64::from(map_rect.height()));
    let anchor = state.view.viewport.geo_to_screen(position, size);
    let pos = map_rect.min + egui::vec2(anchor.x as f32 + 14.0, anchor.y as f32 - 10.0);
    let spot = spot.clone();
    let mut confirm_delete = popup.confirm_delete;

    egui::Area::new(egui::Id::new("spot_popup"))
        .order(egui::Order::Foreground)
        .fixed_pos(pos)
        .constrain_to(map_rect)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_max_width(280.0);
                ui.horizontal(|ui| {
                    ui.heading(&spot.name);
                    if ui.small_button("✕").clicked() {
                        events.push(AppIntent::SpotPopupClosed);
                    }
                });
                if !spot.time.is_empty() {
                    ui.label(format!("Zeit: {}", spot.time));
                }
                if let Some(play_time) = spot.play_time.as_deref().filter(|s| !s.is_empty()) {
                    ui.label(format!("Dauer: {play_time}"));
                }
                if spot.reservation_required == Some(true) {
                    let info = spot.reservation_info.as_deref().unwrap_or_default();
                    ui.label(format!("Reservierung nötig {info}"));
                }
                if let Some(rating) = spot.rating {
                    ui.label(format!("Bewertung: {rating:.1}"));
                }
                if !spot.interior.is_empty() {
                    ui.label(egui::RichText::new(&spot.interior).small());
                }
                if let Some(website) = spot.website.as_deref().filter(|s| !s.is_empty()) {
                    ui.hyperlink_to("Webseite", website);
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Bearbeiten").clicked() {
                        events.push(AppIntent::EditSpotRequested {
                            id: spot.id.clone(),
                        });
                    }
                    if ui.button("Neu platzieren").clicked() {
                        events.push(AppIntent::PickLocationRequested {
                            id: spot.id.clone(),
                        });
                    }
                    if confirm_delete {
                        if ui
                            .button(egui::RichText::new("Wirklich löschen").color(egui::Color32::RED))
                            .clicked()
                        {
                            events.push(AppIntent::DeleteSpotRequested {
                                id: spot.id.clone(),
                            });
                        }
                        if ui.button("Nein").clicked() {
                            confirm_delete = false;
                        }
                    } else if ui.button("Löschen").clicked() {
                        confirm_delete = true;
                    }
                });
            });
        });

    if let Some(popup) = state.view.spot_popup.as_mut() {
        popup.confirm_delete = confirm_delete;
    }
    events
}
