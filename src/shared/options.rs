//! Zentrale Konfiguration für den Travel Map Editor.
//!
//! `ClientOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::GeoPoint;

// ── Remote ──────────────────────────────────────────────────────────

/// Basis-URL der Reiseplan-API.
pub const API_BASE: &str = "http://localhost:8080/api";
/// Öffentliche Nominatim-Suche.
pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
/// Timeout für einzelne HTTP-Requests in Sekunden.
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
/// Maximale Wartezeit beim Beenden, bis ausstehende Schreibvorgänge durch sind.
pub const SHUTDOWN_FLUSH_TIMEOUT_SECS: u64 = 5;

// ── Debounce ────────────────────────────────────────────────────────

/// Ruhezeit nach der letzten Kartenbewegung, bevor der Ausschnitt gespeichert wird.
pub const VIEWPORT_SAVE_DEBOUNCE_MS: u64 = 1000;
/// Ruhezeit nach der letzten Eingabe, bevor gesucht wird.
pub const SEARCH_DEBOUNCE_MS: u64 = 800;

// ── Karte ───────────────────────────────────────────────────────────

/// Zoom ohne gespeicherten Ausschnitt.
pub const DEFAULT_ZOOM: u8 = 13;
/// Zoom beim Springen zu einem Suchtreffer.
pub const SEARCH_RESULT_ZOOM: u8 = 13;
/// Zoom beim Springen zu einem Spot aus der Liste.
pub const SPOT_FOCUS_ZOOM: u8 = 15;
/// Klickradius um Marker in Screen-Pixeln.
pub const MARKER_PICK_RADIUS_PX: f32 = 14.0;
/// Anzahl gehaltener Kachel-Texturen.
pub const TILE_CACHE_CAPACITY: usize = 512;
/// Pixel Mausrad-Scroll pro Zoomstufe.
pub const SCROLL_PIXELS_PER_ZOOM_STEP: f32 = 60.0;

// ── Marker-Rendering ────────────────────────────────────────────────

/// Füllfarbe des Standard-Pins (RGBA).
pub const MARKER_COLOR_DEFAULT: [f32; 4] = [0.86, 0.2, 0.2, 1.0];
/// Farbe der Fahnen-Glyphe.
pub const MARKER_COLOR_FLAG: [f32; 4] = [0.95, 0.55, 0.1, 1.0];
/// Füllfarbe der Zielort-Markierung (blau, weißer Rand).
pub const MARKER_COLOR_DESTINATION: [f32; 4] = [0.15, 0.45, 0.95, 1.0];
/// Füllfarbe der Suchtreffer-Plaketten.
pub const MARKER_COLOR_SEARCH: [f32; 4] = [0.55, 0.3, 0.85, 1.0];
/// Radius der Marker in Screen-Pixeln.
pub const MARKER_RADIUS_PX: f32 = 11.0;

// ── Benachrichtigungen ──────────────────────────────────────────────

/// Anzeigedauer einer Benachrichtigung in Sekunden.
pub const NOTIFICATION_TTL_SECS: u64 = 6;
/// Maximal gleichzeitig sichtbare Benachrichtigungen.
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

/// Alle zur Laufzeit änderbaren Client-Optionen.
/// Wird als `travel_map_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientOptions {
    // ── Remote ──────────────────────────────────────────────────
    /// Basis-URL der REST-API (ohne abschließenden Slash)
    pub api_base: String,
    /// Endpunkt der Nominatim-Suche
    pub nominatim_url: String,
    /// User-Agent für alle Requests (Nominatim verlangt einen)
    pub user_agent: String,
    /// Request-Timeout in Sekunden
    pub request_timeout_secs: u64,

    // ── Debounce ────────────────────────────────────────────────
    pub viewport_save_debounce_ms: u64,
    pub search_debounce_ms: u64,

    // ── Karte ───────────────────────────────────────────────────
    /// Fallback-Mittelpunkt [lat, lng]
    pub default_center: [f64; 2],
    pub default_zoom: u8,
    pub search_result_zoom: u8,
    pub spot_focus_zoom: u8,
    pub zoom_min: u8,
    pub zoom_max: u8,
    /// Klickradius um Marker in Screen-Pixeln
    pub marker_pick_radius_px: f32,
    pub marker_radius_px: f32,
    pub tile_cache_capacity: usize,

    // ── Farben ──────────────────────────────────────────────────
    pub marker_color_default: [f32; 4],
    pub marker_color_flag: [f32; 4],
    pub marker_color_destination: [f32; 4],
    pub marker_color_search: [f32; 4],

    // ── Benachrichtigungen ──────────────────────────────────────
    pub notification_ttl_secs: u64,
    pub max_visible_notifications: usize,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_base: API_BASE.to_string(),
            nominatim_url: NOMINATIM_URL.to_string(),
            user_agent: format!("travel-map-editor/{}", env!("CARGO_PKG_VERSION")),
            request_timeout_secs: REQUEST_TIMEOUT_SECS,

            viewport_save_debounce_ms: VIEWPORT_SAVE_DEBOUNCE_MS,
            search_debounce_ms: SEARCH_DEBOUNCE_MS,

            default_center: [crate::core::DEFAULT_CENTER.lat, crate::core::DEFAULT_CENTER.lng],
            default_zoom: DEFAULT_ZOOM,
            search_result_zoom: SEARCH_RESULT_ZOOM,
            spot_focus_zoom: SPOT_FOCUS_ZOOM,
            zoom_min: crate::core::MapViewport::ZOOM_MIN,
            zoom_max: crate::core::MapViewport::ZOOM_MAX,
            marker_pick_radius_px: MARKER_PICK_RADIUS_PX,
            marker_radius_px: MARKER_RADIUS_PX,
            tile_cache_capacity: TILE_CACHE_CAPACITY,

            marker_color_default: MARKER_COLOR_DEFAULT,
            marker_color_flag: MARKER_COLOR_FLAG,
            marker_color_destination: MARKER_COLOR_DESTINATION,
            marker_color_search: MARKER_COLOR_SEARCH,

            notification_ttl_secs: NOTIFICATION_TTL_SECS,
            max_visible_notifications: MAX_VISIBLE_NOTIFICATIONS,
        }
    }
}

impl ClientOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("travel-map-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("travel_map_editor.toml")
    }

    pub fn default_center(&self) -> GeoPoint {
        GeoPoint::new(self.default_center[0], self.default_center[1])
    }

    /// Zoomgrenzen als (min, max), auch bei vertauschten Werten in der Datei.
    pub fn zoom_limits(&self) -> (u8, u8) {
        let min = self.zoom_min.min(self.zoom_max);
        let max = self.zoom_min.max(self.zoom_max);
        (min, max)
    }

    pub fn viewport_save_debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.viewport_save_debounce_ms)
    }

    pub fn search_debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.search_debounce_ms)
    }

    pub fn notification_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.notification_ttl_secs)
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_falls_back_per_field() {
        let opts: ClientOptions =
            toml::from_str("api_base = \"http://example.org/api\"\nsearch_debounce_ms = 300\n")
                .expect("TOML sollte parsen");
        assert_eq!(opts.api_base, "http://example.org/api");
        assert_eq!(opts.search_debounce_ms, 300);
        assert_eq!(opts.viewport_save_debounce_ms, VIEWPORT_SAVE_DEBOUNCE_MS);
        assert_eq!(opts.max_visible_notifications, 3);
    }

    #[test]
    fn test_zoom_limits_are_ordered() {
        let opts = ClientOptions {
            zoom_min: 16,
            zoom_max: 4,
            ..Default::default()
        };
        assert_eq!(opts.zoom_limits(), (4, 16));
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = std::env::temp_dir().join(format!("tme-opts-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis");
        let path = dir.join("opts.toml");
        let opts = ClientOptions {
            spot_focus_zoom: 16,
            ..Default::default()
        };
        opts.save_to_file(&path).expect("Speichern sollte klappen");
        let loaded = ClientOptions::load_from_file(&path);
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let loaded = ClientOptions::load_from_file(std::path::Path::new("/nonexistent/x.toml"));
        assert_eq!(loaded, ClientOptions::default());
    }
}
