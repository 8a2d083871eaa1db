//! Seitenleiste: Ortssuche, Spot-Liste und Reiseführer-Bilder.

use std::time::Instant;

use crate::app::AppIntent;
use crate::app::AppState;

/// UI-lokaler Zustand der Seitenleiste.
#[derive(Debug, Default)]
pub struct SidebarState {
    /// Inhalt des Suchfelds
    pub search_input: String,
    /// Bildauswahl beim nächsten Frame öffnen
    pub show_image_dialog: bool,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Rendert die Seitenleiste
pub fn render_sidebar(
    ctx: &egui::Context,
    sidebar: &mut SidebarState,
    state: &AppState,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("sidebar")
        .resizable(true)
        .default_width(260.0)
        .show(ctx, |ui| {
            render_search(ui, sidebar, state, &mut events);
            ui.separator();
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    render_spot_list(ui, state, &mut events);
                    ui.separator();
                    render_guide_images(ui, sidebar, state);
                });
        });

    events
}

fn render_search(
    ui: &mut egui::Ui,
    sidebar: &mut SidebarState,
    state: &AppState,
    events: &mut Vec<AppIntent>,
) {
    ui.heading("Suche");

    let response = ui.add(
        egui::TextEdit::singleline(&mut sidebar.search_input)
            .hint_text("Ort suchen…")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        events.push(AppIntent::SearchQueryChanged {
            query: sidebar.search_input.clone(),
            immediate: false,
            now: Instant::now(),
        });
    }
    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        events.push(AppIntent::SearchQueryChanged {
            query: sidebar.search_input.clone(),
            immediate: true,
            now: Instant::now(),
        });
    }

    if state.search.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Suche läuft…");
        });
    }
    if let Some(error) = &state.search.error {
        ui.colored_label(egui::Color32::from_rgb(220, 80, 80), error.to_string());
    }

    for (index, result) in state.search.results.iter().enumerate() {
        ui.group(|ui| {
            ui.label(format!("{}. {}", index + 1, result.short_name()))
                .on_hover_text(&result.display_name);
            ui.horizontal(|ui| {
                if ui.small_button("Zeigen").clicked() {
                    events.push(AppIntent::SearchResultLocateRequested { index });
                }
                if ui.small_button("Als Spot").clicked() {
                    events.push(AppIntent::SearchResultAsSpotRequested { index });
                }
                if ui.small_button("Als Zielort").clicked() {
                    events.push(AppIntent::SearchResultAsDestinationRequested { index });
                }
            });
        });
    }
}

fn render_spot_list(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.heading("Spots");

    if state.session.scope.is_valid() && !state.session.spots_loaded {
        ui.spinner();
        return;
    }

    let listed: Vec<_> = state.spots.listed().collect();
    if listed.is_empty() {
        ui.label(egui::RichText::new("Noch keine Spots").weak());
        return;
    }

    let selected = state.view.spot_popup.as_ref().map(|p| &p.spot_id);
    for (pos, (index, spot)) in listed.iter().enumerate() {
        ui.horizontal(|ui| {
            // Verschieben tauscht mit dem benachbarten sichtbaren Eintrag
            let prev = pos.checked_sub(1).map(|p| listed[p].0);
            let next = listed.get(pos + 1).map(|(i, _)| *i);

            if ui
                .add_enabled(prev.is_some(), egui::Button::new("↑").small())
                .clicked()
            {
                if let Some(to) = prev {
                    events.push(AppIntent::ReorderSpotsRequested { from: *index, to });
                }
            }
            if ui
                .add_enabled(next.is_some(), egui::Button::new("↓").small())
                .clicked()
            {
                if let Some(to) = next {
                    events.push(AppIntent::ReorderSpotsRequested { from: *index, to });
                }
            }

            let is_selected = selected == Some(&spot.id);
            if spot.position().is_some() {
                if ui.selectable_label(is_selected, &spot.name).clicked() {
                    events.push(AppIntent::SpotFocusRequested {
                        id: spot.id.clone(),
                    });
                }
            } else {
                ui.label(egui::RichText::new(&spot.name).italics());
                if ui.small_button("Platzieren").clicked() {
                    events.push(AppIntent::PickLocationRequested {
                        id: spot.id.clone(),
                    });
                }
            }
        });
    }
}

fn render_guide_images(ui: &mut egui::Ui, sidebar: &mut SidebarState, state: &AppState) {
    ui.heading("Reiseführer");
    ui.label(format!("{} Bilder", state.guide_images.images().len()));
    for image in state.guide_images.images() {
        ui.hyperlink_to(&image.id, &image.url);
    }

    if ui
        .add_enabled(
            state.session.scope.is_valid(),
            egui::Button::new("Bild hochladen…"),
        )
        .clicked()
    {
        sidebar.show_image_dialog = true;
    }
}
