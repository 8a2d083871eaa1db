//! Zeichnen von Spot-, Such- und Zielort-Markern mit dem egui-Painter.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};
use glam::DVec2;

use super::badges::{self, BadgeStyle};
use crate::core::{GeoPoint, MarkerIcon};
use crate::shared::MapScene;

/// Wandelt eine RGBA-Optionsfarbe (0..1) in `Color32`.
pub fn color32(rgba: [f32; 4]) -> Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn rgb(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

/// Zeichnet alle Marker einer Szene in `rect`.
///
/// Reihenfolge: Spots, Suchtreffer, Vormerkpunkt, Zielort (oben).
pub fn paint_markers(painter: &Painter, rect: Rect, scene: &MapScene) {
    let size = DVec2::new(f64::from(rect.width()), f64::from(rect.height()));
    let radius = scene.options.marker_radius_px;
    let visible = rect.expand(radius * 3.0);
    let to_screen = |position: GeoPoint| -> Pos2 {
        let p = scene.viewport.geo_to_screen(position, size);
        rect.min + Vec2::new(p.x as f32, p.y as f32)
    };

    for marker in &scene.spots {
        let pos = to_screen(marker.position);
        if !visible.contains(pos) {
            continue;
        }
        let highlighted = scene.highlighted_spot.as_ref() == Some(&marker.id);
        match marker.icon {
            MarkerIcon::Default => paint_pin(
                painter,
                pos,
                radius,
                color32(scene.options.marker_color_default),
                highlighted,
            ),
            MarkerIcon::Flag => paint_flag(
                painter,
                pos,
                radius,
                color32(scene.options.marker_color_flag),
                highlighted,
            ),
            MarkerIcon::Numbered(n) => paint_badge(painter, pos, radius, &badges::badge(n), highlighted),
        }
    }

    let search_color = color32(scene.options.marker_color_search);
    for hit in &scene.search_results {
        let pos = to_screen(hit.position);
        if !visible.contains(pos) {
            continue;
        }
        paint_rank_badge(painter, pos, radius, hit.rank, search_color);
    }

    if let Some(point) = scene.pending_point {
        let pos = to_screen(point);
        painter.circle_stroke(pos, radius * 0.6, Stroke::new(2.0, Color32::BLACK));
        painter.circle_stroke(pos, radius * 0.6 + 2.0, Stroke::new(1.5, Color32::WHITE));
    }

    if let Some((name, position)) = &scene.destination {
        let pos = to_screen(*position);
        if visible.contains(pos) {
            paint_destination(
                painter,
                pos,
                radius,
                color32(scene.options.marker_color_destination),
                name,
            );
        }
    }
}

/// Standard-Pin: Kreis mit Spitze nach unten, Spitze liegt auf dem Punkt.
fn paint_pin(painter: &Painter, tip: Pos2, radius: f32, color: Color32, highlighted: bool) {
    let head = tip - Vec2::new(0.0, radius * 1.6);
    let outline = highlight_stroke(highlighted);
    painter.add(egui::Shape::convex_polygon(
        vec![
            tip,
            head + Vec2::new(-radius * 0.7, radius * 0.6),
            head + Vec2::new(radius * 0.7, radius * 0.6),
        ],
        color,
        Stroke::NONE,
    ));
    painter.circle(head, radius, color, outline);
    painter.circle_filled(head, radius * 0.35, Color32::WHITE);
}

fn paint_flag(painter: &Painter, foot: Pos2, radius: f32, color: Color32, highlighted: bool) {
    let pole_top = foot - Vec2::new(0.0, radius * 2.4);
    painter.line_segment([foot, pole_top], Stroke::new(2.0, Color32::from_gray(40)));
    painter.add(egui::Shape::convex_polygon(
        vec![
            pole_top,
            pole_top + Vec2::new(radius * 1.6, radius * 0.55),
            pole_top + Vec2::new(0.0, radius * 1.1),
        ],
        color,
        highlight_stroke(highlighted),
    ));
    painter.circle_filled(foot, 2.5, Color32::from_gray(40));
}

fn paint_badge(painter: &Painter, center: Pos2, radius: f32, style: &BadgeStyle, highlighted: bool) {
    let outline = if highlighted {
        highlight_stroke(true)
    } else {
        Stroke::new(1.5, Color32::WHITE)
    };
    painter.circle(center, radius, rgb(style.fill), outline);
    painter.text(
        center,
        Align2::CENTER_CENTER,
        &style.label,
        FontId::proportional(label_size(radius, style.label.len())),
        rgb(style.text),
    );
}

/// Suchtreffer: eckige Plakette mit Rang, damit sie nicht mit Spot-Nummern verwechselt wird.
fn paint_rank_badge(painter: &Painter, center: Pos2, radius: f32, rank: u32, color: Color32) {
    let rect = Rect::from_center_size(center, Vec2::splat(radius * 1.9));
    painter.rect(
        rect,
        3.0,
        color,
        Stroke::new(1.5, Color32::WHITE),
        egui::StrokeKind::Outside,
    );
    let label = rank.to_string();
    painter.text(
        center,
        Align2::CENTER_CENTER,
        &label,
        FontId::proportional(label_size(radius, label.len())),
        Color32::WHITE,
    );
}

fn paint_destination(painter: &Painter, center: Pos2, radius: f32, color: Color32, name: &str) {
    painter.circle_filled(center, radius * 1.8, color.gamma_multiply(0.25));
    painter.circle(center, radius * 0.8, color, Stroke::new(3.0, Color32::WHITE));
    let label_pos = center + Vec2::new(0.0, radius * 1.9);
    painter.text(
        label_pos + Vec2::splat(1.0),
        Align2::CENTER_TOP,
        name,
        FontId::proportional(13.0),
        Color32::WHITE,
    );
    painter.text(
        label_pos,
        Align2::CENTER_TOP,
        name,
        FontId::proportional(13.0),
        color,
    );
}

fn highlight_stroke(highlighted: bool) -> Stroke {
    if highlighted {
        Stroke::new(3.0, Color32::from_rgb(255, 215, 0))
    } else {
        Stroke::new(1.5, Color32::WHITE)
    }
}

fn label_size(radius: f32, digits: usize) -> f32 {
    match digits {
        0 | 1 => radius * 1.2,
        2 => radius * 1.0,
        _ => radius * 0.8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color32_conversion() {
        assert_eq!(color32([1.0, 0.0, 0.0, 1.0]), Color32::from_rgb(255, 0, 0));
        assert_eq!(color32([2.0, -1.0, 0.0, 1.0]), Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn test_label_shrinks_with_digits() {
        assert!(label_size(10.0, 3) < label_size(10.0, 1));
    }
}
