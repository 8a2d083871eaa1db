//! UI-Komponenten: Menü, Seitenleiste, Kartenoverlays, Input-Handling, Dialoge.

mod context_menu;
pub mod dialogs;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Jede Komponente liest den `AppState` und gibt `AppIntent`s zurück;
/// Mutationen laufen ausschließlich über den Controller. Ausnahme sind
/// Dialog-Entwürfe, die direkt im Interaktionsmodus bearbeitet werden.
pub mod menu;
mod notifications;
mod overlay;
pub mod sidebar;
mod spot_popup;
pub mod status;

pub use context_menu::show_context_menu;
pub use dialogs::{
    handle_file_dialogs, show_add_spot_dialog, show_destination_dialog, show_edit_spot_dialog,
};
pub use input::InputState;
pub use menu::render_menu;
pub use notifications::render_notifications;
pub use overlay::render_map_overlay;
pub use sidebar::{render_sidebar, SidebarState};
pub use spot_popup::show_spot_popup;
pub use status::render_status_bar;
