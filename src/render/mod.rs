//! Kartendarstellung mit dem egui-Painter: Kacheln, Marker, Plaketten.

pub mod badges;
mod markers;
mod tiles;

pub use crate::shared::MapScene;
pub use badges::{badge, BadgeStyle};
pub use markers::{color32, paint_markers};
pub use tiles::{visible_tiles, TileCache, VisibleTile};

use crate::remote::TileLoader;

/// Haupt-Renderer der Karte.
///
/// Hält den Kachel-Cache über Frames hinweg; Marker werden pro Frame aus der
/// Szene gezeichnet.
pub struct MapRenderer {
    tiles: TileCache,
}

impl MapRenderer {
    /// Erstellt einen Renderer; ohne Loader werden nur Platzhalter gezeichnet.
    pub fn new(loader: Option<TileLoader>, tile_cache_capacity: usize) -> Self {
        Self {
            tiles: TileCache::new(loader, tile_cache_capacity),
        }
    }

    /// Rendert die komplette Szene in `rect`.
    pub fn render_scene(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        rect: egui::Rect,
        scene: &MapScene,
    ) {
        log::trace!(
            "render_scene: {} Spots, {} Treffer",
            scene.spots.len(),
            scene.search_results.len()
        );
        self.tiles.paint(ctx, painter, rect, scene);
        paint_markers(painter, rect, scene);
    }

    pub fn cached_tiles(&self) -> usize {
        self.tiles.len()
    }
}
