//! Remote-Schicht: REST-API, Ortssuche, Kacheln.
//!
//! Alles Netzwerk läuft hinter dem `RemoteBackend`-Trait; der Controller
//! kennt nur Aufträge und Ergebnisse.

pub mod api;
mod backend;
mod error;
pub mod geocode;
pub mod http;
pub mod tiles;

pub use backend::{
    OfflineBackend, RemoteBackend, RemoteEvent, RemoteRequest, Resource, ResourceScope,
    SearchRequest,
};
pub use error::{ApiError, GeocodeError};
pub use http::{HttpBackend, Waker};
pub use tiles::{DecodedTile, TileKey, TileLoader};
