use crate::app::AppIntent;

use crate::ui::SidebarState;

/// Verarbeitet den ausstehenden Bildauswahl-Dialog und gibt AppIntents zurück.
pub fn handle_file_dialogs(sidebar: &mut SidebarState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if sidebar.show_image_dialog {
        sidebar.show_image_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Bild", &["png", "jpg", "jpeg", "webp", "gif"])
            .pick_file()
        {
            events.push(AppIntent::GuideImageFileChosen { path });
        }
    }

    events
}
