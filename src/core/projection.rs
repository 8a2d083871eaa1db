//! Web-Mercator-Projektion (EPSG:3857) in Weltpixeln.
//!
//! Weltpixel: bei Zoom `z` ist die Welt `TILE_SIZE * 2^z` Pixel breit,
//! Ursprung oben links (lng -180, lat +85.05).

use glam::DVec2;

use super::GeoPoint;

/// Kantenlänge einer Kachel in Pixeln.
pub const TILE_SIZE: f64 = 256.0;
/// Maximal darstellbarer Breitengrad in Web-Mercator.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Weltbreite in Pixeln für eine Zoomstufe.
#[inline]
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1u32 << zoom.min(30))
}

/// Projiziert einen geografischen Punkt auf Weltpixel.
pub fn project(point: GeoPoint, zoom: u8) -> DVec2 {
    let size = world_size(zoom);
    let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (point.lng + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0 * size;
    DVec2::new(x, y)
}

/// Rechnet Weltpixel zurück in einen geografischen Punkt.
pub fn unproject(world: DVec2, zoom: u8) -> GeoPoint {
    let size = world_size(zoom);
    let lng = world.x / size * 360.0 - 180.0;
    let n = std::f64::consts::PI * (1.0 - 2.0 * world.y / size);
    let lat = n.sinh().atan().to_degrees();
    GeoPoint::new(lat, lng)
}
