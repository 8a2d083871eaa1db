//! Top-Menü (Datei, Karte).

use crate::app::{AppIntent, AppState};
use crate::core::MapProvider;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Neu laden (F5)").clicked() {
                    events.push(AppIntent::ReloadRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Karte", |ui| {
                let current = state.config.provider();
                for provider in MapProvider::ALL {
                    if ui.radio(current == provider, provider.label()).clicked() {
                        events.push(AppIntent::MapProviderChanged { provider });
                        ui.close();
                    }
                }

                ui.separator();

                if ui
                    .add_enabled(state.has_destination(), egui::Button::new("Zielort anzeigen"))
                    .clicked()
                {
                    events.push(AppIntent::LocateDestinationRequested);
                    ui.close();
                }
            });

            // Titel rechts: Plan und Ziel
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let title = match (&state.session.plan_name, &state.session.destination_name) {
                    (Some(plan), Some(dest)) => format!("{plan} › {dest}"),
                    (Some(plan), None) => plan.clone(),
                    (None, Some(dest)) => dest.clone(),
                    (None, None) => String::new(),
                };
                ui.label(egui::RichText::new(title).strong());
            });
        });
    });

    events
}
