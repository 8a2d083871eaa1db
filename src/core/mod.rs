//! Core-Domänentypen: Geo-Punkte, Projektion, Kartenausschnitt, Spots, Config.

pub mod config;
pub mod geo;
pub mod map_provider;
pub mod marker_icon;
pub mod plan;
pub mod projection;
pub mod search_result;
pub mod spot;
pub mod viewport;

pub use config::{Config, DestinationConfig, MapState};
pub use geo::{GeoBounds, GeoPoint};
pub use map_provider::{GeocodeProvider, MapProvider};
pub use marker_icon::MarkerIcon;
pub use plan::{Destination, GuideImage, Plan};
pub use search_result::SearchResult;
pub use spot::{Spot, SpotId};
pub use viewport::MapViewport;

/// Fallback-Mittelpunkt ohne gespeicherten Ausschnitt (Peking).
pub const DEFAULT_CENTER: GeoPoint = GeoPoint::new(39.9042, 116.4074);
