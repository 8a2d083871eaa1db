use std::path::PathBuf;
use std::time::Instant;

use crate::app::context_menu::ContextMenuAction;
use crate::core::{GeoPoint, MapProvider, Spot, SpotId};
use crate::remote::RemoteEvent;
use crate::shared::NotificationLevel;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Frame-Takt: Debouncer und Benachrichtigungen prüfen
    FrameTick { now: Instant },
    /// Größe der Kartenfläche hat sich geändert
    ViewportResized { size: [f32; 2] },

    // === Karten-Gesten ===
    /// Primärklick auf die Karte (screen relativ zur Kartenfläche)
    MapClicked { position: GeoPoint, screen: [f32; 2] },
    /// Rechtsklick auf die Karte
    MapSecondaryClicked { position: GeoPoint, screen: [f32; 2] },
    /// Drag auf der Karte beginnt
    MapDragStarted,
    /// Karte um Pixel verschoben
    MapPanned { delta: [f32; 2] },
    /// Drag beendet (Ausschnitt festschreiben)
    MapDragEnded { now: Instant },
    /// Mausrad: `steps` Zoomstufen um `anchor`
    MapZoomed {
        steps: i32,
        anchor: [f32; 2],
        now: Instant,
    },
    /// Escape gedrückt
    EscapePressed,

    // === Kontextmenü ===
    ContextMenuActionSelected { action: ContextMenuAction },
    ContextMenuDismissed,

    // === Spot-Dialoge ===
    AddSpotConfirmed { name: String },
    AddSpotCancelled,
    EditSpotRequested { id: SpotId },
    EditSpotConfirmed { spot: Spot },
    EditSpotCancelled,
    DeleteSpotRequested { id: SpotId },
    SpotPopupClosed,

    // === Platzieren ===
    PickLocationRequested { id: SpotId },
    PickLocationCancelled,

    // === Zielort ===
    DestinationConfirmed { name: String },
    DestinationCancelled,
    LocateDestinationRequested,

    // === Spot-Liste ===
    SpotFocusRequested { id: SpotId },
    ReorderSpotsRequested { from: usize, to: usize },

    // === Karte & Suche ===
    MapProviderChanged { provider: MapProvider },
    SearchQueryChanged {
        query: String,
        immediate: bool,
        now: Instant,
    },
    SearchResultLocateRequested { index: usize },
    SearchResultAsSpotRequested { index: usize },
    SearchResultAsDestinationRequested { index: usize },

    // === Reiseführer-Bilder ===
    GuideImageFileChosen { path: PathBuf },

    // === System ===
    /// Ergebnis aus dem Remote-Backend
    RemoteEventReceived { event: RemoteEvent },
    /// Meldung aus einer externen Quelle (z.B. Panic-Hook)
    NotificationReported {
        level: NotificationLevel,
        message: String,
    },
    NotificationDismissed { id: u64 },
    /// Spots und Config neu laden (F5)
    ReloadRequested,
    /// Fenster wird geschlossen: ausstehende Schreibvorgänge abschließen
    ShutdownRequested,
    /// Anwendung beenden
    ExitRequested,
}
