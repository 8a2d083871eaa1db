//! Application-Layer: Controller, State, Events, Stores und Use-Cases.

pub mod command_log;
pub mod context_menu;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Sitzung, Ansicht, Interaktionsmodus, Suche).
pub mod state;
pub mod stores;
pub mod use_cases;

pub use command_log::{CommandLog, CommandRecord};
pub use context_menu::{ContextMenuAction, ContextMenuEntry};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_map_scene;
pub use state::{AppState, InteractionMode, SessionState, ViewState};
pub use stores::{ConfigStore, GuideImageStore, SpotStore};
