//! Kartenausschnitt: Mittelpunkt + ganzzahlige Zoomstufe.

use glam::DVec2;

use super::projection::{project, unproject, MAX_LATITUDE};
use super::{GeoBounds, GeoPoint};

/// Sichtbarer Kartenausschnitt.
///
/// Bildschirmkoordinaten sind relativ zur linken oberen Ecke der Kartenfläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    /// Geografischer Mittelpunkt
    pub center: GeoPoint,
    /// Zoomstufe (Kachel-Zoom)
    pub zoom: u8,
}

impl MapViewport {
    /// Kleinste erlaubte Zoomstufe.
    pub const ZOOM_MIN: u8 = 3;
    /// Größte erlaubte Zoomstufe.
    pub const ZOOM_MAX: u8 = 18;

    /// Erstellt einen Ausschnitt, Zoom wird auf [ZOOM_MIN, ZOOM_MAX] begrenzt.
    pub fn new(center: GeoPoint, zoom: u8) -> Self {
        Self {
            center,
            zoom: zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
        }
    }

    /// Projiziert einen Punkt in Bildschirmkoordinaten.
    pub fn geo_to_screen(&self, point: GeoPoint, screen_size: DVec2) -> DVec2 {
        let offset = project(point, self.zoom) - project(self.center, self.zoom);
        offset + screen_size * 0.5
    }

    /// Rechnet eine Bildschirmposition in einen geografischen Punkt um.
    pub fn screen_to_geo(&self, screen: DVec2, screen_size: DVec2) -> GeoPoint {
        let world = project(self.center, self.zoom) + (screen - screen_size * 0.5);
        unproject(world, self.zoom).wrapped()
    }

    /// Verschiebt die Karte um `delta` Bildschirmpixel (Drag-Richtung).
    pub fn pan_by_pixels(&mut self, delta: DVec2) {
        let world = project(self.center, self.zoom) - delta;
        let moved = unproject(world, self.zoom).wrapped();
        self.center = GeoPoint::new(moved.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE), moved.lng);
    }

    /// Ändert den Zoom so, dass der Punkt unter `anchor` an derselben Stelle bleibt.
    pub fn zoom_around(&mut self, anchor: DVec2, screen_size: DVec2, new_zoom: u8, limits: (u8, u8)) {
        let new_zoom = new_zoom.clamp(limits.0, limits.1);
        if new_zoom == self.zoom {
            return;
        }
        let fixed = self.screen_to_geo(anchor, screen_size);
        self.zoom = new_zoom;
        let fixed_world = project(fixed, new_zoom);
        let center_world = fixed_world - (anchor - screen_size * 0.5);
        self.center = unproject(center_world, new_zoom).wrapped();
    }

    /// Zoomt stufenweise um `steps` (positiv = hinein).
    pub fn zoom_by_steps(&mut self, steps: i32, anchor: DVec2, screen_size: DVec2, limits: (u8, u8)) {
        let target = (i32::from(self.zoom) + steps).clamp(0, i32::from(u8::MAX)) as u8;
        self.zoom_around(anchor, screen_size, target, limits);
    }

    /// Sichtbarer Bereich für eine Kartenfläche der Größe `screen_size`.
    pub fn visible_bounds(&self, screen_size: DVec2) -> GeoBounds {
        let top_left = self.screen_to_geo(DVec2::ZERO, screen_size);
        let bottom_right = self.screen_to_geo(screen_size, screen_size);
        GeoBounds {
            west: top_left.lng,
            north: top_left.lat,
            east: bottom_right.lng,
            south: bottom_right.lat,
        }
    }
}

impl Default for MapViewport {
    fn default() -> Self {
        Self::new(super::DEFAULT_CENTER, 13)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SIZE: DVec2 = DVec2::new(800.0, 600.0);

    #[test]
    fn test_center_maps_to_screen_center() {
        let vp = MapViewport::new(GeoPoint::new(31.2, 121.4), 12);
        let screen = vp.geo_to_screen(vp.center, SIZE);
        assert_relative_eq!(screen.x, 400.0, epsilon = 1e-6);
        assert_relative_eq!(screen.y, 300.0, epsilon = 1e-6);
    }

    #[test]
    fn test_screen_to_geo_inverts_geo_to_screen() {
        let vp = MapViewport::new(GeoPoint::new(39.9042, 116.4074), 13);
        let p = GeoPoint::new(39.91, 116.42);
        let back = vp.screen_to_geo(vp.geo_to_screen(p, SIZE), SIZE);
        assert_relative_eq!(back.lat, p.lat, epsilon = 1e-9);
        assert_relative_eq!(back.lng, p.lng, epsilon = 1e-9);
    }

    #[test]
    fn test_pan_moves_center_against_drag() {
        let mut vp = MapViewport::new(GeoPoint::new(0.0, 0.0), 5);
        vp.pan_by_pixels(DVec2::new(100.0, 0.0));
        assert!(vp.center.lng < 0.0, "Drag nach rechts verschiebt Mittelpunkt nach Westen");
        assert_relative_eq!(vp.center.lat, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zoom_around_keeps_anchor_fixed() {
        let mut vp = MapViewport::new(GeoPoint::new(31.0, 121.0), 10);
        let anchor = DVec2::new(650.0, 120.0);
        let before = vp.screen_to_geo(anchor, SIZE);
        vp.zoom_by_steps(2, anchor, SIZE, (3, 18));
        assert_eq!(vp.zoom, 12);
        let after = vp.screen_to_geo(anchor, SIZE);
        assert_relative_eq!(after.lat, before.lat, epsilon = 1e-9);
        assert_relative_eq!(after.lng, before.lng, epsilon = 1e-9);
    }

    #[test]
    fn test_zoom_is_clamped_to_limits() {
        let mut vp = MapViewport::new(GeoPoint::new(0.0, 0.0), 17);
        vp.zoom_by_steps(5, SIZE * 0.5, SIZE, (3, 18));
        assert_eq!(vp.zoom, 18);
        vp.zoom_by_steps(-40, SIZE * 0.5, SIZE, (3, 18));
        assert_eq!(vp.zoom, 3);
    }

    #[test]
    fn test_visible_bounds_contains_center() {
        let vp = MapViewport::new(GeoPoint::new(39.9, 116.4), 13);
        let bounds = vp.visible_bounds(SIZE);
        assert!(bounds.contains(vp.center));
        assert!(bounds.west < bounds.east);
        assert!(bounds.north > bounds.south);
    }
}
