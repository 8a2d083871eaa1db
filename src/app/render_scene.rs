//! Builder für Karten-Szenen aus dem AppState.

use crate::app::state::InteractionMode;
use crate::app::AppState;
use crate::core::MarkerIcon;
use crate::shared::{MapScene, SearchMarker, SpotMarker};

/// Baut eine MapScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> MapScene {
    let spots = state
        .spots
        .placed()
        .map(|(spot, position)| SpotMarker {
            id: spot.id.clone(),
            name: spot.name.clone(),
            position,
            icon: MarkerIcon::resolve(spot.icon.as_deref()),
        })
        .collect();

    let search_results = state
        .search
        .results
        .iter()
        .enumerate()
        .filter(|(_, hit)| hit.position().is_valid())
        .map(|(index, hit)| SearchMarker {
            rank: index as u32 + 1,
            label: hit.short_name().to_string(),
            position: hit.position(),
        })
        .collect();

    let destination = state
        .config
        .destination()
        .map(|d| (d.name.clone(), d.position()))
        .filter(|(_, position)| position.is_valid());

    let pending_point = match &state.interaction {
        InteractionMode::ContextMenuOpen(menu) => Some(menu.position),
        InteractionMode::AddingSpot(draft) => Some(draft.position),
        InteractionMode::SettingDestination(draft) => Some(draft.destination),
        _ => None,
    };

    MapScene {
        viewport: state.view.viewport,
        viewport_size: state.view.viewport_size,
        provider: state.config.provider(),
        spots,
        search_results,
        destination,
        highlighted_spot: state.view.spot_popup.as_ref().map(|p| p.spot_id.clone()),
        pending_point,
        picking: state.interaction.picking_target().is_some(),
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::stores::{ConfigStore, SpotStore};
    use crate::app::AppState;
    use crate::core::{Config, DestinationConfig, GeoPoint, MarkerIcon, Spot, SpotId};

    #[test]
    fn build_skips_unplaced_spots_and_resolves_icons() {
        let mut state = AppState::new();
        state.spots = SpotStore::from_spots(vec![
            Spot {
                id: SpotId::from("a"),
                name: "Ohne Ort".into(),
                ..Default::default()
            },
            Spot {
                icon: Some("number-7".into()),
                ..Spot::new(SpotId::from("b"), "Sieben", GeoPoint::new(31.0, 121.0))
            },
        ]);

        let scene = build(&state);

        assert_eq!(scene.spots.len(), 1);
        assert_eq!(scene.spots[0].icon, MarkerIcon::Numbered(7));
    }

    #[test]
    fn build_includes_destination() {
        let mut state = AppState::new();
        state.config = ConfigStore::new(Config {
            destination: Some(DestinationConfig::new("Shanghai", GeoPoint::new(31.2, 121.4))),
            ..Default::default()
        });

        let scene = build(&state);

        let (name, position) = scene.destination.clone().expect("Zielort fehlt in Szene");
        assert_eq!(name, "Shanghai");
        assert_eq!(position, GeoPoint::new(31.2, 121.4));
        assert!(scene.has_content());
    }
}
