//! Zustand der Ortssuche.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::core::SearchResult;
use crate::remote::GeocodeError;
use crate::shared::Debouncer;

/// Laufende Suche; nur ihre Generation darf Ergebnisse setzen.
#[derive(Debug, Clone)]
pub struct InFlightSearch {
    pub generation: u64,
    pub query: String,
    pub cancel: CancellationToken,
}

#[derive(Debug, Clone)]
pub struct SearchState {
    /// Zuletzt eingegebener Suchbegriff
    pub query: String,
    pub results: Vec<SearchResult>,
    pub error: Option<GeocodeError>,
    /// Wartet auf die Ruhezeit nach der letzten Eingabe
    pub debounce: Debouncer<String>,
    pub in_flight: Option<InFlightSearch>,
    last_generation: u64,
}

impl SearchState {
    pub fn new(delay: Duration) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            error: None,
            debounce: Debouncer::new(delay),
            in_flight: None,
            last_generation: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Bricht die laufende Suche ab und vergibt die nächste Generation.
    pub fn begin(&mut self, query: String) -> InFlightSearch {
        self.cancel_in_flight();
        self.last_generation += 1;
        let search = InFlightSearch {
            generation: self.last_generation,
            query,
            cancel: CancellationToken::new(),
        };
        self.in_flight = Some(search.clone());
        search
    }

    pub fn cancel_in_flight(&mut self) {
        if let Some(previous) = self.in_flight.take() {
            previous.cancel.cancel();
        }
    }

    /// Ob ein Ergebnis dieser Generation noch gilt.
    pub fn is_current(&self, generation: u64) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|s| s.generation == generation)
    }

    pub fn last_generation(&self) -> u64 {
        self.last_generation
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::shared::options::SEARCH_DEBOUNCE_MS))
    }
}
