use crate::app::{AppIntent, InteractionMode};

/// Zeigt den Zielort-Dialog. Punkt und Ausschnitt stehen beim Öffnen fest.
pub fn show_destination_dialog(
    ctx: &egui::Context,
    interaction: &mut InteractionMode,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let InteractionMode::SettingDestination(draft) = interaction else {
        return events;
    };

    let title = if draft.is_update {
        "Zielort aktualisieren"
    } else {
        "Zielort festlegen"
    };

    let mut confirmed = false;
    let mut cancelled = false;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(300.0);

            ui.label(format!(
                "Zielort: {:.5}, {:.5}",
                draft.destination.lat, draft.destination.lng
            ));
            ui.label(
                egui::RichText::new(format!(
                    "Kartenausschnitt: {:.4}, {:.4} (Zoom {})",
                    draft.map_state.lat, draft.map_state.lng, draft.map_state.zoom
                ))
                .weak(),
            );
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label("Name:");
                ui.text_edit_singleline(&mut draft.name);
            });

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.add_enabled_ui(!draft.name.trim().is_empty(), |ui| {
                    if ui.button("Speichern").clicked() {
                        confirmed = true;
                    }
                });

                if ui.button("Abbrechen").clicked() {
                    cancelled = true;
                }
            });
        });

    if confirmed {
        events.push(AppIntent::DestinationConfirmed {
            name: draft.name.trim().to_string(),
        });
    } else if cancelled {
        events.push(AppIntent::DestinationCancelled);
    }

    events
}
