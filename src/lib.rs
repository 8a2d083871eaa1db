//! Travel Map Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod remote;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, InteractionMode, ViewState};
pub use core::{
    Config, Destination, DestinationConfig, GeoPoint, GuideImage, MapProvider, MapState,
    MapViewport, MarkerIcon, SearchResult, Spot, SpotId,
};
pub use remote::{OfflineBackend, RemoteBackend, RemoteEvent, RemoteRequest, ResourceScope};
pub use shared::{ClientOptions, MapScene, Notification, NotificationLevel};
