//! Datei-Dialoge und modale Fenster.

mod add_spot;
mod destination;
mod edit_spot;
mod file_dialogs;

pub use add_spot::show_add_spot_dialog;
pub use destination::show_destination_dialog;
pub use edit_spot::show_edit_spot_dialog;
pub use file_dialogs::handle_file_dialogs;
