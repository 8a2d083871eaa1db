//! Kachel-Hintergrund: sichtbare Kacheln bestimmen, laden, als Texturen cachen.

use std::collections::HashMap;

use egui::{Color32, Painter, Pos2, Rect, Vec2};
use glam::DVec2;

use crate::core::projection::{project, TILE_SIZE};
use crate::core::{MapProvider, MapViewport};
use crate::remote::{TileKey, TileLoader};
use crate::shared::MapScene;

/// Eine sichtbare Kachel mit Position relativ zur Kartenfläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleTile {
    /// Kachelindex x (bereits in [0, 2^z) gefaltet)
    pub x: u32,
    pub y: u32,
    /// Linke obere Ecke in Bildschirmpixeln
    pub offset: DVec2,
}

/// Bestimmt alle Kacheln, die einen Ausschnitt der Größe `size` überdecken.
///
/// Horizontal wird über den Antimeridian gefaltet, vertikal abgeschnitten.
pub fn visible_tiles(viewport: &MapViewport, size: DVec2) -> Vec<VisibleTile> {
    let z = viewport.zoom;
    let count = 1i64 << z;
    let top_left = project(viewport.center, z) - size * 0.5;
    let bottom_right = top_left + size;

    let x0 = (top_left.x / TILE_SIZE).floor() as i64;
    let x1 = (bottom_right.x / TILE_SIZE).ceil() as i64 - 1;
    let y0 = ((top_left.y / TILE_SIZE).floor() as i64).max(0);
    let y1 = ((bottom_right.y / TILE_SIZE).ceil() as i64 - 1).min(count - 1);

    let mut tiles = Vec::new();
    for ty in y0..=y1 {
        for tx in x0..=x1 {
            let offset = DVec2::new(tx as f64 * TILE_SIZE, ty as f64 * TILE_SIZE) - top_left;
            tiles.push(VisibleTile {
                x: tx.rem_euclid(count) as u32,
                y: ty as u32,
                offset,
            });
        }
    }
    tiles
}

enum TileEntry {
    Pending,
    Ready(egui::TextureHandle),
    Failed,
}

struct CachedTile {
    entry: TileEntry,
    last_used: u64,
}

/// Textur-Cache der Kacheln eines Anbieters.
pub struct TileCache {
    loader: Option<TileLoader>,
    provider: MapProvider,
    tiles: HashMap<TileKey, CachedTile>,
    capacity: usize,
    frame: u64,
}

impl TileCache {
    /// `loader = None` zeichnet nur Platzhalter (Tests, Offline-Betrieb).
    pub fn new(loader: Option<TileLoader>, capacity: usize) -> Self {
        Self {
            loader,
            provider: MapProvider::default(),
            tiles: HashMap::new(),
            capacity: capacity.max(16),
            frame: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Übernimmt fertig geladene Kacheln als Texturen.
    fn receive(&mut self, ctx: &egui::Context) {
        let Some(loader) = self.loader.as_mut() else {
            return;
        };
        for (key, result) in loader.drain() {
            let Some(cached) = self.tiles.get_mut(&key) else {
                continue;
            };
            cached.entry = match result {
                Ok(tile) => {
                    let image = egui::ColorImage::from_rgba_unmultiplied(tile.size, &tile.rgba);
                    let name = format!("tile-{}-{}-{}-{}", key.provider.key(), key.z, key.x, key.y);
                    TileEntry::Ready(ctx.load_texture(name, image, egui::TextureOptions::LINEAR))
                }
                Err(_) => TileEntry::Failed,
            };
        }
    }

    /// Zeichnet den Kachel-Hintergrund und fordert fehlende Kacheln an.
    pub fn paint(&mut self, ctx: &egui::Context, painter: &Painter, rect: Rect, scene: &MapScene) {
        if scene.provider != self.provider {
            log::info!("Kachelquelle gewechselt: {}", scene.provider.label());
            self.tiles.clear();
            self.provider = scene.provider;
        }
        self.frame += 1;
        self.receive(ctx);

        let size = DVec2::new(f64::from(rect.width()), f64::from(rect.height()));
        let tile_px = TILE_SIZE as f32;
        painter.rect_filled(rect, 0.0, Color32::from_gray(230));

        for tile in visible_tiles(&scene.viewport, size) {
            let key = TileKey {
                provider: self.provider,
                z: scene.viewport.zoom,
                x: tile.x,
                y: tile.y,
            };
            let min = rect.min + Vec2::new(tile.offset.x as f32, tile.offset.y as f32);
            let tile_rect = Rect::from_min_size(min, Vec2::splat(tile_px));

            let frame = self.frame;
            let cached = self.tiles.entry(key).or_insert_with(|| {
                if let Some(loader) = &self.loader {
                    loader.request(key);
                }
                CachedTile {
                    entry: TileEntry::Pending,
                    last_used: frame,
                }
            });
            cached.last_used = frame;

            match &cached.entry {
                TileEntry::Ready(texture) => {
                    painter.image(
                        texture.id(),
                        tile_rect,
                        Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                        Color32::WHITE,
                    );
                }
                TileEntry::Pending | TileEntry::Failed => {
                    painter.rect_stroke(
                        tile_rect.shrink(0.5),
                        0.0,
                        egui::Stroke::new(1.0, Color32::from_gray(215)),
                        egui::StrokeKind::Inside,
                    );
                }
            }
        }

        self.evict();
        paint_attribution(painter, rect, self.provider);
    }

    /// Entfernt die am längsten nicht genutzten Kacheln oberhalb der Kapazität.
    fn evict(&mut self) {
        if self.tiles.len() <= self.capacity {
            return;
        }
        let mut by_age: Vec<(u64, TileKey)> = self
            .tiles
            .iter()
            .filter(|(_, t)| t.last_used < self.frame)
            .map(|(k, t)| (t.last_used, *k))
            .collect();
        by_age.sort_unstable_by_key(|(last_used, _)| *last_used);
        let excess = self.tiles.len() - self.capacity;
        for (_, key) in by_age.into_iter().take(excess) {
            self.tiles.remove(&key);
        }
    }
}

fn paint_attribution(painter: &Painter, rect: Rect, provider: MapProvider) {
    let pos = rect.right_bottom() - Vec2::new(4.0, 2.0);
    let galley = painter.layout_no_wrap(
        provider.attribution().to_string(),
        egui::FontId::proportional(10.0),
        Color32::from_gray(60),
    );
    let bg = Rect::from_min_size(pos - galley.size(), galley.size()).expand(2.0);
    painter.rect_filled(bg, 2.0, Color32::from_white_alpha(190));
    painter.galley(pos - galley.size(), galley, Color32::from_gray(60));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoPoint;

    #[test]
    fn test_visible_tiles_cover_viewport() {
        let vp = MapViewport::new(GeoPoint::new(0.0, 0.0), 3);
        let tiles = visible_tiles(&vp, DVec2::new(512.0, 512.0));
        // Mittelpunkt liegt auf einer Kachelgrenze: 2x2 Kacheln
        assert_eq!(tiles.len(), 4);
        assert!(tiles.iter().any(|t| t.x == 3 && t.y == 3));
        assert!(tiles.iter().all(|t| t.offset.x >= 0.0 && t.offset.y >= 0.0));
    }

    #[test]
    fn test_tiles_wrap_at_antimeridian() {
        let vp = MapViewport::new(GeoPoint::new(0.0, 179.9), 3);
        let tiles = visible_tiles(&vp, DVec2::new(600.0, 200.0));
        assert!(tiles.iter().all(|t| t.x < 8));
        assert!(tiles.iter().any(|t| t.x == 0));
        assert!(tiles.iter().any(|t| t.x == 7));
    }

    #[test]
    fn test_rows_outside_world_are_skipped() {
        let vp = MapViewport::new(GeoPoint::new(84.0, 0.0), 3);
        let tiles = visible_tiles(&vp, DVec2::new(256.0, 1024.0));
        assert!(tiles.iter().all(|t| t.y < 8));
    }
}
