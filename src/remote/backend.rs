//! Schnittstelle zwischen Controller und Netzwerk.
//!
//! Der Controller reicht Lese-/Schreibaufträge und Suchanfragen ein und holt
//! die Ergebnisse einmal pro Frame als `RemoteEvent`s ab. Er blockiert nie auf I/O.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::{ApiError, GeocodeError};
use crate::core::{
    Config, Destination, GeoBounds, GeocodeProvider, GuideImage, Plan, SearchResult, Spot,
};

/// Plan/Ziel, auf das sich alle Bulk-Ressourcen beziehen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResourceScope {
    pub plan_id: String,
    /// Ohne Ziel gelten die Ressourcen für den Plan selbst
    pub dest_id: Option<String>,
}

impl ResourceScope {
    pub fn new(plan_id: impl Into<String>, dest_id: Option<String>) -> Self {
        Self {
            plan_id: plan_id.into(),
            dest_id: dest_id.filter(|d| !d.is_empty()),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.plan_id.trim().is_empty()
    }
}

/// Bulk-Ressourcen der API (GET liest, POST ersetzt die gesamte Sammlung).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Spots,
    Config,
    GuideImages,
    Schedules,
    Itineraries,
    Foods,
    Routes,
    Questions,
    References,
}

impl Resource {
    pub fn path(self) -> &'static str {
        match self {
            Resource::Spots => "spots",
            Resource::Config => "config",
            Resource::GuideImages => "guide-images",
            Resource::Schedules => "schedules",
            Resource::Itineraries => "itineraries",
            Resource::Foods => "foods",
            Resource::Routes => "routes",
            Resource::Questions => "questions",
            Resource::References => "references",
        }
    }

    /// Anzeigename für Fehlermeldungen.
    pub fn label(self) -> &'static str {
        match self {
            Resource::Spots => "Spots",
            Resource::Config => "Konfiguration",
            Resource::GuideImages => "Reiseführer-Bilder",
            Resource::Schedules => "Zeitplan",
            Resource::Itineraries => "Reiseverlauf",
            Resource::Foods => "Essen",
            Resource::Routes => "Routen",
            Resource::Questions => "Fragen",
            Resource::References => "Referenzen",
        }
    }
}

/// Auftrag an das Backend.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteRequest {
    LoadSpots { scope: ResourceScope },
    LoadConfig { scope: ResourceScope },
    LoadGuideImages { scope: ResourceScope },
    LoadPlans,
    LoadDestinations { plan_id: String },
    SaveSpots { scope: ResourceScope, spots: Vec<Spot> },
    SaveConfig { scope: ResourceScope, config: Config },
    SaveGuideImages { scope: ResourceScope, images: Vec<GuideImage> },
    UploadGuideImage {
        scope: ResourceScope,
        file_name: String,
        bytes: Vec<u8>,
    },
}

impl RemoteRequest {
    /// Schreibende Aufträge laufen strikt in Einreichungsreihenfolge.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            RemoteRequest::SaveSpots { .. }
                | RemoteRequest::SaveConfig { .. }
                | RemoteRequest::SaveGuideImages { .. }
                | RemoteRequest::UploadGuideImage { .. }
        )
    }
}

/// Suchanfrage mit Generationsnummer.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub generation: u64,
    pub query: String,
    pub provider: GeocodeProvider,
    /// Nur für Nominatim: auf sichtbaren Ausschnitt begrenzen
    pub bounds: Option<GeoBounds>,
}

/// Ergebnis, das beim nächsten Frame in den Controller zurückfließt.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteEvent {
    SpotsLoaded(Result<Vec<Spot>, ApiError>),
    ConfigLoaded(Result<Config, ApiError>),
    GuideImagesLoaded(Result<Vec<GuideImage>, ApiError>),
    PlansLoaded(Result<Vec<Plan>, ApiError>),
    DestinationsLoaded(Result<Vec<Destination>, ApiError>),
    WriteFinished {
        resource: Resource,
        result: Result<(), ApiError>,
    },
    GuideImageUploaded(Result<String, ApiError>),
    SearchFinished {
        generation: u64,
        result: Result<Vec<SearchResult>, GeocodeError>,
    },
}

/// Netzwerk-Seam des Controllers. Tests ersetzen sie durch eine Aufzeichnung.
pub trait RemoteBackend {
    /// Reicht einen Lese- oder Schreibauftrag ein (nicht blockierend).
    ///
    /// Ein Leseauftrag startet erst, wenn alle vorher eingereichten
    /// Schreibaufträge abgeschlossen sind.
    fn submit(&self, request: RemoteRequest);

    /// Startet eine Suche; `cancel` bricht sie ab, bevor ein Ergebnis gemeldet wird.
    fn search(&self, request: SearchRequest, cancel: CancellationToken);

    /// Holt alle seit dem letzten Aufruf eingetroffenen Ergebnisse.
    fn drain_events(&mut self) -> Vec<RemoteEvent>;

    /// Wartet höchstens `timeout`, bis alle eingereichten Schreibaufträge durch sind.
    /// Gibt `false` zurück, wenn die Zeit nicht gereicht hat.
    fn flush(&mut self, timeout: Duration) -> bool;
}

/// Backend ohne Netzwerk: verwirft Aufträge (Start ohne Plan, Benchmarks).
#[derive(Debug, Default)]
pub struct OfflineBackend;

impl RemoteBackend for OfflineBackend {
    fn submit(&self, request: RemoteRequest) {
        log::debug!("Offline: Auftrag verworfen: {:?}", std::mem::discriminant(&request));
    }

    fn search(&self, request: SearchRequest, _cancel: CancellationToken) {
        log::debug!("Offline: Suche '{}' verworfen", request.query);
    }

    fn drain_events(&mut self) -> Vec<RemoteEvent> {
        Vec::new()
    }

    fn flush(&mut self, _timeout: Duration) -> bool {
        true
    }
}
