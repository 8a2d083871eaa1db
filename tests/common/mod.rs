//! Gemeinsame Test-Hilfen: aufzeichnendes Backend und vorbereiteter State.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use travel_map_editor::remote::{RemoteBackend, RemoteEvent, RemoteRequest, SearchRequest};
use travel_map_editor::{AppController, AppIntent, AppState, ResourceScope};

/// Alles, was der Controller beim Backend eingereicht hat.
#[derive(Debug, Default)]
pub struct Recorded {
    pub requests: Vec<RemoteRequest>,
    pub searches: Vec<(SearchRequest, CancellationToken)>,
    pub pending_events: Vec<RemoteEvent>,
    pub flushes: usize,
}

/// Backend, das Aufträge aufzeichnet statt sie auszuführen.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    pub recorded: Arc<Mutex<Recorded>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<RemoteRequest> {
        self.recorded.lock().expect("Lock vergiftet").requests.clone()
    }

    pub fn searches(&self) -> Vec<SearchRequest> {
        self.recorded
            .lock()
            .expect("Lock vergiftet")
            .searches
            .iter()
            .map(|(request, _)| request.clone())
            .collect()
    }

    pub fn search_tokens(&self) -> Vec<CancellationToken> {
        self.recorded
            .lock()
            .expect("Lock vergiftet")
            .searches
            .iter()
            .map(|(_, token)| token.clone())
            .collect()
    }

    pub fn flushes(&self) -> usize {
        self.recorded.lock().expect("Lock vergiftet").flushes
    }

    /// Legt ein Ergebnis bereit, das beim nächsten `poll_remote` ankommt.
    pub fn inject(&self, event: RemoteEvent) {
        self.recorded
            .lock()
            .expect("Lock vergiftet")
            .pending_events
            .push(event);
    }

    pub fn clear(&self) {
        let mut recorded = self.recorded.lock().expect("Lock vergiftet");
        recorded.requests.clear();
        recorded.searches.clear();
    }
}

impl RemoteBackend for RecordingBackend {
    fn submit(&self, request: RemoteRequest) {
        self.recorded
            .lock()
            .expect("Lock vergiftet")
            .requests
            .push(request);
    }

    fn search(&self, request: SearchRequest, cancel: CancellationToken) {
        self.recorded
            .lock()
            .expect("Lock vergiftet")
            .searches
            .push((request, cancel));
    }

    fn drain_events(&mut self) -> Vec<RemoteEvent> {
        std::mem::take(&mut self.recorded.lock().expect("Lock vergiftet").pending_events)
    }

    fn flush(&mut self, _timeout: Duration) -> bool {
        self.recorded.lock().expect("Lock vergiftet").flushes += 1;
        true
    }
}

/// Controller mit aufzeichnendem Backend plus Handle für Assertions.
pub fn recording_controller() -> (AppController, RecordingBackend) {
    let backend = RecordingBackend::new();
    let controller = AppController::with_backend(Box::new(backend.clone()));
    (controller, backend)
}

/// State mit gültigem Plan/Ziel, fertig geladen, Kartenfläche 800×600.
pub fn loaded_state() -> AppState {
    let mut state = AppState::new().with_scope(ResourceScope::new("plan-1", Some("dest-1".into())));
    state.session.spots_loaded = true;
    state.session.config_loaded = true;
    state.view.initial_viewport_applied = true;
    state.view.viewport_size = [800.0, 600.0];
    state
}

/// Führt mehrere Intents nacheinander aus.
pub fn run(controller: &mut AppController, state: &mut AppState, intents: Vec<AppIntent>) {
    for intent in intents {
        controller
            .handle_intent(state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }
}
