//! Kartenanbieter: Kachelquelle und zugehöriger Geocoder.

/// Kachelquelle der Karte. Wird in `Config::map_provider` persistiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MapProvider {
    /// Gaode (AutoNavi), GCJ-02-Kacheln für China
    #[default]
    Gaode,
    /// OpenStreetMap Standardkacheln
    Osm,
}

/// Backend der Ortssuche.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeocodeProvider {
    /// Gaode-POI-Suche über den Server-Proxy (benötigt API-Key am Server)
    Gaode,
    /// Öffentliche Nominatim-Instanz
    Nominatim,
}

impl MapProvider {
    pub const ALL: [MapProvider; 2] = [MapProvider::Gaode, MapProvider::Osm];

    /// Persistierter Schlüssel.
    pub fn key(self) -> &'static str {
        match self {
            MapProvider::Gaode => "gaode",
            MapProvider::Osm => "osm",
        }
    }

    /// Liest einen Schlüssel; Unbekanntes fällt auf den Standard zurück.
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "osm" => MapProvider::Osm,
            _ => MapProvider::Gaode,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MapProvider::Gaode => "Gaode",
            MapProvider::Osm => "OpenStreetMap",
        }
    }

    /// Geocoder, der zu dieser Kachelquelle passt.
    pub fn geocoder(self) -> GeocodeProvider {
        match self {
            MapProvider::Gaode => GeocodeProvider::Gaode,
            MapProvider::Osm => GeocodeProvider::Nominatim,
        }
    }

    /// URL einer Kachel (x, y, z im XYZ-Schema).
    pub fn tile_url(self, x: u32, y: u32, z: u8) -> String {
        match self {
            MapProvider::Gaode => {
                let subdomain = 1 + (x + y) % 4;
                format!(
                    "https://webrd0{subdomain}.is.autonavi.com/appmaptile?lang=zh_cn&size=1&scale=1&style=8&x={x}&y={y}&z={z}"
                )
            }
            MapProvider::Osm => format!("https://tile.openstreetmap.org/{z}/{x}/{y}.png"),
        }
    }

    /// Quellenangabe für die Statuszeile.
    pub fn attribution(self) -> &'static str {
        match self {
            MapProvider::Gaode => "© AutoNavi",
            MapProvider::Osm => "© OpenStreetMap contributors",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_falls_back_to_gaode() {
        assert_eq!(MapProvider::from_key("osm"), MapProvider::Osm);
        assert_eq!(MapProvider::from_key("gaode"), MapProvider::Gaode);
        assert_eq!(MapProvider::from_key("bing"), MapProvider::Gaode);
    }

    #[test]
    fn test_tile_urls() {
        assert_eq!(
            MapProvider::Osm.tile_url(3, 5, 4),
            "https://tile.openstreetmap.org/4/3/5.png"
        );
        let gaode = MapProvider::Gaode.tile_url(2, 1, 7);
        assert!(gaode.starts_with("https://webrd04.is.autonavi.com/"));
        assert!(gaode.ends_with("x=2&y=1&z=7"));
    }

    #[test]
    fn test_provider_selects_geocoder() {
        assert_eq!(MapProvider::Gaode.geocoder(), GeocodeProvider::Gaode);
        assert_eq!(MapProvider::Osm.geocoder(), GeocodeProvider::Nominatim);
    }
}
