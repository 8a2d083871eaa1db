use crate::app::state::{IconChoice, MAX_ICON_NUMBER};
use crate::app::{AppIntent, InteractionMode};

/// Optionales Textfeld: leerer Inhalt wird als `None` gespeichert.
fn optional_text(ui: &mut egui::Ui, label: &str, value: &mut Option<String>) {
    let mut text = value.clone().unwrap_or_default();
    ui.label(label);
    if ui.text_edit_singleline(&mut text).changed() {
        *value = if text.trim().is_empty() { None } else { Some(text) };
    }
    ui.end_row();
}

/// Zeigt den "Spot bearbeiten"-Dialog als modales Fenster.
pub fn show_edit_spot_dialog(
    ctx: &egui::Context,
    interaction: &mut InteractionMode,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let InteractionMode::EditingSpot(draft) = interaction else {
        return events;
    };

    let mut confirmed = false;
    let mut cancelled = false;
    let mut delete = false;

    egui::Window::new("Spot bearbeiten")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(340.0);

            egui::Grid::new("edit_spot_grid")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Name:");
                    ui.text_edit_singleline(&mut draft.spot.name);
                    ui.end_row();

                    ui.label("Zeit:");
                    ui.text_edit_singleline(&mut draft.spot.time);
                    ui.end_row();

                    optional_text(ui, "Dauer:", &mut draft.spot.play_time);

                    ui.label("Reservierung:");
                    let mut reservation = draft.spot.reservation_required.unwrap_or(false);
                    if ui.checkbox(&mut reservation, "erforderlich").changed() {
                        draft.spot.reservation_required = Some(reservation);
                    }
                    ui.end_row();

                    if reservation {
                        optional_text(ui, "Hinweis:", &mut draft.spot.reservation_info);
                    }

                    optional_text(ui, "Webseite:", &mut draft.spot.website);

                    ui.label("Bewertung:");
                    ui.horizontal(|ui| {
                        let mut rated = draft.spot.rating.is_some();
                        if ui.checkbox(&mut rated, "").changed() {
                            draft.spot.rating = rated.then_some(3.0);
                        }
                        if let Some(rating) = draft.spot.rating.as_mut() {
                            ui.add(
                                egui::DragValue::new(rating)
                                    .range(0.0..=5.0)
                                    .speed(0.1)
                                    .fixed_decimals(1),
                            );
                        }
                    });
                    ui.end_row();

                    ui.label("Icon:");
                    ui.horizontal(|ui| {
                        egui::ComboBox::from_id_salt("edit_spot_icon")
                            .selected_text(match draft.icon_choice {
                                IconChoice::Default => "Standard",
                                IconChoice::Flag => "Flagge",
                                IconChoice::Number => "Nummer",
                            })
                            .show_ui(ui, |ui| {
                                ui.selectable_value(
                                    &mut draft.icon_choice,
                                    IconChoice::Default,
                                    "Standard",
                                );
                                ui.selectable_value(&mut draft.icon_choice, IconChoice::Flag, "Flagge");
                                ui.selectable_value(
                                    &mut draft.icon_choice,
                                    IconChoice::Number,
                                    "Nummer",
                                );
                            });
                        if draft.icon_choice == IconChoice::Number {
                            // Bereits gespeicherte Nummern über 50 bleiben wählbar
                            let max = MAX_ICON_NUMBER.max(draft.icon_number);
                            ui.add(egui::DragValue::new(&mut draft.icon_number).range(1..=max));
                        }
                    });
                    ui.end_row();

                    ui.label("Liste:");
                    ui.checkbox(&mut draft.show_in_list, "in der Spot-Liste anzeigen");
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.label("Innenbereich:");
            ui.add(
                egui::TextEdit::multiline(&mut draft.spot.interior)
                    .desired_rows(2)
                    .desired_width(f32::INFINITY),
            );
            ui.label("Geschichte:");
            ui.add(
                egui::TextEdit::multiline(&mut draft.spot.story)
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.add_enabled_ui(draft.name_valid(), |ui| {
                    if ui.button("Speichern").clicked() {
                        confirmed = true;
                    }
                });

                if ui.button("Abbrechen").clicked() {
                    cancelled = true;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if draft.confirm_delete {
                        if ui.button("Nein").clicked() {
                            draft.confirm_delete = false;
                        }
                        if ui
                            .button(egui::RichText::new("Wirklich löschen").color(egui::Color32::RED))
                            .clicked()
                        {
                            delete = true;
                        }
                    } else if ui.button("Löschen").clicked() {
                        draft.confirm_delete = true;
                    }
                });
            });
        });

    if delete {
        events.push(AppIntent::DeleteSpotRequested {
            id: draft.id().clone(),
        });
    } else if confirmed {
        events.push(AppIntent::EditSpotConfirmed {
            spot: draft.to_spot(),
        });
    } else if cancelled {
        events.push(AppIntent::EditSpotCancelled);
    }

    events
}
