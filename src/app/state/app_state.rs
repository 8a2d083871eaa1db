use std::time::Instant;

use crate::app::stores::{ConfigStore, GuideImageStore, SpotStore};
use crate::app::CommandLog;
use crate::core::MapViewport;
use crate::remote::ResourceScope;
use crate::shared::{ClientOptions, NotificationCenter};

use super::{InteractionMode, SearchState, ViewState};

/// Sitzungsbezogene Angaben: welcher Plan, welches Ziel, was ist geladen.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub scope: ResourceScope,
    pub plan_name: Option<String>,
    pub destination_name: Option<String>,
    pub spots_loaded: bool,
    pub config_loaded: bool,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        !(self.spots_loaded && self.config_loaded)
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Plan/Ziel und Ladezustand
    pub session: SessionState,
    /// Spots des aktiven Ziels
    pub spots: SpotStore,
    /// Config des aktiven Ziels
    pub config: ConfigStore,
    /// Reiseführer-Bilder
    pub guide_images: GuideImageStore,
    /// View-State
    pub view: ViewState,
    /// Aktiver Interaktionsmodus
    pub interaction: InteractionMode,
    /// Ortssuche
    pub search: SearchState,
    /// Sichtbare Benachrichtigungen
    pub notifications: NotificationCenter,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: ClientOptions,
    /// Zeitpunkt des letzten Frame-Ticks
    pub now: Instant,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standardoptionen
    pub fn new() -> Self {
        Self::with_options(ClientOptions::default())
    }

    pub fn with_options(options: ClientOptions) -> Self {
        let viewport = MapViewport::new(options.default_center(), options.default_zoom);
        Self {
            session: SessionState::default(),
            spots: SpotStore::new(),
            config: ConfigStore::default(),
            guide_images: GuideImageStore::default(),
            view: ViewState::new(viewport, options.viewport_save_debounce()),
            interaction: InteractionMode::Idle,
            search: SearchState::new(options.search_debounce()),
            notifications: NotificationCenter::new(
                options.max_visible_notifications,
                options.notification_ttl(),
            ),
            command_log: CommandLog::new(),
            options,
            now: Instant::now(),
            should_exit: false,
        }
    }

    /// Setzt Plan und Ziel der Sitzung.
    pub fn with_scope(mut self, scope: ResourceScope) -> Self {
        self.session.scope = scope;
        self
    }

    pub fn spot_count(&self) -> usize {
        self.spots.len()
    }

    pub fn has_destination(&self) -> bool {
        self.config.destination().is_some()
    }

    /// Ein Viewport-Speichern wartet noch.
    pub fn has_pending_viewport_save(&self) -> bool {
        self.view.viewport_save.is_pending()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
