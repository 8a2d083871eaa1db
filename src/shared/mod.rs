//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `remote` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod debounce;
mod map_scene;
pub mod notifications;
pub mod options;

pub use debounce::Debouncer;
pub use map_scene::{MapScene, SearchMarker, SpotMarker};
pub use notifications::{Notification, NotificationCenter, NotificationLevel};
pub use options::ClientOptions;
