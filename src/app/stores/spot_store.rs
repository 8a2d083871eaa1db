//! Geordnete Spot-Sammlung des aktiven Ziels.
//!
//! Jede Mutation arbeitet auf dem aktuellen Stand im Speicher; gespeichert wird
//! immer das komplette Array (Bulk-Save) über `persist`.

use indexmap::IndexMap;

use crate::core::{GeoPoint, Spot, SpotId};
use crate::remote::{RemoteBackend, RemoteRequest, ResourceScope};

/// Spots in Anzeigereihenfolge, eindeutig nach ID.
#[derive(Debug, Clone, Default)]
pub struct SpotStore {
    spots: IndexMap<SpotId, Spot>,
}

impl SpotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernimmt die Serverliste. Doppelte IDs: der erste Eintrag gewinnt.
    pub fn from_spots(spots: Vec<Spot>) -> Self {
        let mut map = IndexMap::with_capacity(spots.len());
        for spot in spots {
            if map.contains_key(&spot.id) {
                log::warn!("Doppelte Spot-ID '{}' vom Server ignoriert", spot.id);
                continue;
            }
            map.insert(spot.id.clone(), spot);
        }
        Self { spots: map }
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    pub fn get(&self, id: &SpotId) -> Option<&Spot> {
        self.spots.get(id)
    }

    pub fn contains(&self, id: &SpotId) -> bool {
        self.spots.contains_key(id)
    }

    pub fn index_of(&self, id: &SpotId) -> Option<usize> {
        self.spots.get_index_of(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Spot> {
        self.spots.values()
    }

    /// Spots mit Koordinaten (werden auf der Karte gezeichnet).
    pub fn placed(&self) -> impl Iterator<Item = (&Spot, GeoPoint)> {
        self.spots
            .values()
            .filter_map(|spot| spot.position().map(|p| (spot, p)))
    }

    /// Spots für Listenansichten (ohne `hide_in_list`), mit Store-Index.
    pub fn listed(&self) -> impl Iterator<Item = (usize, &Spot)> {
        self.spots
            .values()
            .enumerate()
            .filter(|(_, spot)| spot.is_listed())
    }

    /// Zeitbasierte ID, die im Store noch frei ist.
    pub fn next_id(&self, now_millis: u128) -> SpotId {
        SpotId::generate(now_millis, |id| self.spots.contains_key(id))
    }

    /// Hängt einen Spot an. Gibt `false` zurück, wenn die ID schon existiert.
    pub fn append(&mut self, spot: Spot) -> bool {
        if self.spots.contains_key(&spot.id) {
            log::warn!("Spot-ID '{}' existiert bereits, nicht angehängt", spot.id);
            return false;
        }
        self.spots.insert(spot.id.clone(), spot);
        true
    }

    /// Ersetzt den Spot mit derselben ID an seiner Position.
    pub fn replace(&mut self, spot: Spot) -> bool {
        match self.spots.get_mut(&spot.id) {
            Some(slot) => {
                *slot = spot;
                true
            }
            None => false,
        }
    }

    /// Entfernt einen Spot; die Reihenfolge der übrigen bleibt erhalten.
    pub fn remove(&mut self, id: &SpotId) -> Option<Spot> {
        self.spots.shift_remove(id)
    }

    pub fn set_position(&mut self, id: &SpotId, position: GeoPoint) -> bool {
        match self.spots.get_mut(id) {
            Some(spot) => {
                spot.set_position(position);
                true
            }
            None => false,
        }
    }

    /// Verschiebt den Spot an Index `from` nach `to`. Ungültige Indizes: keine Änderung.
    pub fn move_spot(&mut self, from: usize, to: usize) -> bool {
        let len = self.spots.len();
        if from >= len || to >= len {
            return false;
        }
        if from != to {
            self.spots.move_index(from, to);
        }
        true
    }

    pub fn to_vec(&self) -> Vec<Spot> {
        self.spots.values().cloned().collect()
    }

    /// Schreibt den aktuellen Stand vollständig zurück.
    pub fn persist(&self, backend: &dyn RemoteBackend, scope: &ResourceScope) -> bool {
        if !scope.is_valid() {
            log::warn!("Spots nicht gespeichert: kein Plan ausgewählt");
            return false;
        }
        log::info!("Speichere {} Spots", self.spots.len());
        backend.submit(RemoteRequest::SaveSpots {
            scope: scope.clone(),
            spots: self.to_vec(),
        });
        true
    }
}
