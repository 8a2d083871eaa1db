use std::path::PathBuf;
use std::time::Instant;

use crate::core::{GeoPoint, MapProvider, Spot, SpotId};
use crate::remote::RemoteEvent;
use crate::shared::NotificationLevel;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Takt & Ansicht ===
    /// Debouncer abfragen, abgelaufene Meldungen entfernen
    AdvanceTimers { now: Instant },
    SetViewportSize { size: [f32; 2] },
    PanViewport { delta: [f32; 2] },
    ZoomViewport { steps: i32, anchor: [f32; 2] },
    /// Ausschnitt lokal übernehmen und verzögertes Speichern planen
    CommitViewport { now: Instant },
    /// Zu einem Punkt springen (optional mit Zoom) und festschreiben
    FlyTo {
        position: GeoPoint,
        zoom: Option<u8>,
        now: Instant,
    },
    SetDragging { active: bool },

    // === Kontextmenü & Popup ===
    OpenContextMenu { position: GeoPoint, screen: [f32; 2] },
    DismissContextMenu,
    OpenSpotPopup { id: SpotId },
    CloseSpotPopup,

    // === Spots ===
    MarkLocation { position: GeoPoint },
    BeginAddSpot { position: GeoPoint, name: String },
    ConfirmAddSpot { name: String },
    CancelAddSpot,
    BeginEditSpot { id: SpotId },
    ConfirmEditSpot { spot: Spot },
    CancelEditSpot,
    DeleteSpot { id: SpotId },
    ReorderSpots { from: usize, to: usize },

    // === Platzieren ===
    BeginPickLocation { id: SpotId },
    CommitPickedLocation { position: GeoPoint },
    CancelPickLocation,

    // === Zielort ===
    BeginSetDestination { position: GeoPoint, name: String },
    ConfirmDestination { name: String },
    CancelDestination,

    // === Karte & Suche ===
    SetMapProvider { provider: MapProvider },
    UpdateSearchQuery {
        query: String,
        immediate: bool,
        now: Instant,
    },

    // === Remote ===
    ApplyRemoteEvent { event: RemoteEvent },
    UploadGuideImage { path: PathBuf },
    Reload,
    FlushPendingWrites,

    // === Benachrichtigungen & Anwendung ===
    PushNotification {
        level: NotificationLevel,
        message: String,
    },
    DismissNotification { id: u64 },
    RequestExit,
}

impl AppCommand {
    /// Kurzname für Log und Command-Verlauf.
    pub fn kind(&self) -> &'static str {
        match self {
            AppCommand::AdvanceTimers { .. } => "AdvanceTimers",
            AppCommand::SetViewportSize { .. } => "SetViewportSize",
            AppCommand::PanViewport { .. } => "PanViewport",
            AppCommand::ZoomViewport { .. } => "ZoomViewport",
            AppCommand::CommitViewport { .. } => "CommitViewport",
            AppCommand::FlyTo { .. } => "FlyTo",
            AppCommand::SetDragging { .. } => "SetDragging",
            AppCommand::OpenContextMenu { .. } => "OpenContextMenu",
            AppCommand::DismissContextMenu => "DismissContextMenu",
            AppCommand::OpenSpotPopup { .. } => "OpenSpotPopup",
            AppCommand::CloseSpotPopup => "CloseSpotPopup",
            AppCommand::MarkLocation { .. } => "MarkLocation",
            AppCommand::BeginAddSpot { .. } => "BeginAddSpot",
            AppCommand::ConfirmAddSpot { .. } => "ConfirmAddSpot",
            AppCommand::CancelAddSpot => "CancelAddSpot",
            AppCommand::BeginEditSpot { .. } => "BeginEditSpot",
            AppCommand::ConfirmEditSpot { .. } => "ConfirmEditSpot",
            AppCommand::CancelEditSpot => "CancelEditSpot",
            AppCommand::DeleteSpot { .. } => "DeleteSpot",
            AppCommand::ReorderSpots { .. } => "ReorderSpots",
            AppCommand::BeginPickLocation { .. } => "BeginPickLocation",
            AppCommand::CommitPickedLocation { .. } => "CommitPickedLocation",
            AppCommand::CancelPickLocation => "CancelPickLocation",
            AppCommand::BeginSetDestination { .. } => "BeginSetDestination",
            AppCommand::ConfirmDestination { .. } => "ConfirmDestination",
            AppCommand::CancelDestination => "CancelDestination",
            AppCommand::SetMapProvider { .. } => "SetMapProvider",
            AppCommand::UpdateSearchQuery { .. } => "UpdateSearchQuery",
            AppCommand::ApplyRemoteEvent { .. } => "ApplyRemoteEvent",
            AppCommand::UploadGuideImage { .. } => "UploadGuideImage",
            AppCommand::Reload => "Reload",
            AppCommand::FlushPendingWrites => "FlushPendingWrites",
            AppCommand::PushNotification { .. } => "PushNotification",
            AppCommand::DismissNotification { .. } => "DismissNotification",
            AppCommand::RequestExit => "RequestExit",
        }
    }

    /// Frame-Takt und Pixel-Bewegungen fluten den Verlauf und werden nicht aufgezeichnet.
    pub fn is_high_frequency(&self) -> bool {
        matches!(
            self,
            AppCommand::AdvanceTimers { .. }
                | AppCommand::PanViewport { .. }
                | AppCommand::SetViewportSize { .. }
        )
    }
}
