//! Geografische Grundtypen: Punkt (WGS84) und Bounding-Box.

use serde::{Deserialize, Serialize};

/// Geografischer Punkt in Grad (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad
    pub lat: f64,
    /// Längengrad
    pub lng: f64,
}

impl GeoPoint {
    /// Erstellt einen neuen Punkt.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Prüft, ob beide Koordinaten endliche Zahlen im gültigen Bereich sind.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Längengrad normalisiert auf [-180, 180).
    pub fn wrapped(self) -> Self {
        let lng = (self.lng + 180.0).rem_euclid(360.0) - 180.0;
        Self { lat: self.lat, lng }
    }
}

/// Rechteckiger Kartenausschnitt in Grad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub west: f64,
    pub north: f64,
    pub east: f64,
    pub south: f64,
}

impl GeoBounds {
    /// Prüft, ob ein Punkt innerhalb der Box liegt (Ränder inklusive).
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.lat <= self.north
            && point.lat >= self.south
            && point.lng >= self.west
            && point.lng <= self.east
    }

    /// Formatiert die Box als Nominatim-`viewbox` (west,north,east,south).
    pub fn to_viewbox(&self) -> String {
        format!("{},{},{},{}", self.west, self.north, self.east, self.south)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wrapped_normalizes_longitude() {
        let p = GeoPoint::new(10.0, 190.0).wrapped();
        assert_relative_eq!(p.lng, -170.0);
        let q = GeoPoint::new(10.0, -180.0).wrapped();
        assert_relative_eq!(q.lng, -180.0);
    }

    #[test]
    fn test_is_valid_rejects_nan_and_out_of_range() {
        assert!(GeoPoint::new(39.9, 116.4).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
    }

    #[test]
    fn test_viewbox_order() {
        let b = GeoBounds {
            west: 116.0,
            north: 40.0,
            east: 117.0,
            south: 39.0,
        };
        assert_eq!(b.to_viewbox(), "116,40,117,39");
        assert!(b.contains(GeoPoint::new(39.5, 116.5)));
        assert!(!b.contains(GeoPoint::new(41.0, 116.5)));
    }
}
