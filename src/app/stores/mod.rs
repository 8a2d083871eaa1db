//! Persistierte Entitäten. Nur die Stores reichen Schreibaufträge ein.

mod config_store;
mod guide_image_store;
mod spot_store;

pub use config_store::ConfigStore;
pub use guide_image_store::GuideImageStore;
pub use spot_store::SpotStore;
