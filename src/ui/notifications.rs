//! Benachrichtigungen unten rechts.

use crate::app::{AppIntent, AppState};
use crate::shared::NotificationLevel;

fn level_color(level: NotificationLevel) -> egui::Color32 {
    match level {
        NotificationLevel::Info => egui::Color32::from_rgb(90, 150, 220),
        NotificationLevel::Success => egui::Color32::from_rgb(80, 180, 100),
        NotificationLevel::Error => egui::Color32::from_rgb(220, 80, 80),
    }
}

/// Zeigt alle sichtbaren Benachrichtigungen gestapelt an.
pub fn render_notifications(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if state.notifications.is_empty() {
        return events;
    }

    egui::Area::new(egui::Id::new("notifications"))
        .order(egui::Order::Tooltip)
        .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -36.0])
        .show(ctx, |ui| {
            ui.set_max_width(320.0);
            for notification in state.notifications.visible() {
                egui::Frame::popup(ui.style())
                    .stroke(egui::Stroke::new(1.5, level_color(notification.level)))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(&notification.message);
                            if ui.small_button("✕").clicked() {
                                events.push(AppIntent::NotificationDismissed {
                                    id: notification.id,
                                });
                            }
                        });
                    });
                ui.add_space(4.0);
            }
        });

    events
}
