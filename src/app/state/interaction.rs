//! Interaktionsmodi der Karte (genau einer ist aktiv).

use crate::core::{GeoPoint, MapState, MarkerIcon, Spot, SpotId};

/// Kontextmenü an einem Kartenpunkt.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenuState {
    /// Geklickter Kartenpunkt
    pub position: GeoPoint,
    /// Bildschirmposition relativ zur Kartenfläche
    pub screen: [f32; 2],
}

/// Entwurf im "Spot hinzufügen"-Dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct AddSpotDraft {
    pub position: GeoPoint,
    pub name: String,
}

/// Auswahl im Icon-Feld des Bearbeiten-Dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconChoice {
    Default,
    Flag,
    Number,
}

/// Höchste im Dialog wählbare Nummer.
pub const MAX_ICON_NUMBER: u32 = 50;

/// Arbeitskopie eines Spots im Bearbeiten-Dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSpotDraft {
    pub spot: Spot,
    pub icon_choice: IconChoice,
    pub icon_number: u32,
    pub show_in_list: bool,
    pub confirm_delete: bool,
}

impl EditSpotDraft {
    pub fn from_spot(spot: &Spot) -> Self {
        let (icon_choice, icon_number) = match MarkerIcon::resolve(spot.icon.as_deref()) {
            MarkerIcon::Default => (IconChoice::Default, 1),
            MarkerIcon::Flag => (IconChoice::Flag, 1),
            MarkerIcon::Numbered(n) => (IconChoice::Number, n),
        };
        Self {
            spot: spot.clone(),
            icon_choice,
            icon_number,
            show_in_list: spot.is_listed(),
            confirm_delete: false,
        }
    }

    pub fn id(&self) -> &SpotId {
        &self.spot.id
    }

    /// Fertiger Spot aus den Dialogfeldern.
    ///
    /// Ein unverändertes Icon behält seinen ursprünglichen Selektor (z.B. "number-120").
    pub fn to_spot(&self) -> Spot {
        let mut spot = self.spot.clone();
        spot.name = spot.name.trim().to_string();
        let chosen = match self.icon_choice {
            IconChoice::Default => MarkerIcon::Default,
            IconChoice::Flag => MarkerIcon::Flag,
            IconChoice::Number => MarkerIcon::Numbered(self.icon_number.max(1)),
        };
        if MarkerIcon::resolve(self.spot.icon.as_deref()) != chosen {
            spot.icon = chosen.selector();
        }
        let hidden = !self.show_in_list;
        if spot.hide_in_list.unwrap_or(false) != hidden {
            spot.hide_in_list = Some(hidden);
        }
        spot
    }

    pub fn name_valid(&self) -> bool {
        !self.spot.name.trim().is_empty()
    }
}

/// Entwurf im Zielort-Dialog: Punkt und Ausschnitt sind beim Öffnen festgehalten.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationDraft {
    pub destination: GeoPoint,
    pub map_state: MapState,
    pub name: String,
    /// Es gibt bereits einen Zielort (Dialogtitel "aktualisieren")
    pub is_update: bool,
}

/// Interaktionsmodus der Karte.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    ContextMenuOpen(ContextMenuState),
    AddingSpot(AddSpotDraft),
    EditingSpot(EditSpotDraft),
    PickingLocation { spot_id: SpotId },
    SettingDestination(DestinationDraft),
}

impl InteractionMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionMode::Idle)
    }

    /// Ein Dialog ist offen; die Karte nimmt keine Gesten an.
    pub fn is_modal(&self) -> bool {
        matches!(
            self,
            InteractionMode::AddingSpot(_)
                | InteractionMode::EditingSpot(_)
                | InteractionMode::SettingDestination(_)
        )
    }

    pub fn picking_target(&self) -> Option<&SpotId> {
        match self {
            InteractionMode::PickingLocation { spot_id } => Some(spot_id),
            _ => None,
        }
    }

    /// Neue Dialoge/Modi dürfen nur aus Idle oder offenem Kontextmenü starten.
    pub fn accepts_new_mode(&self) -> bool {
        matches!(
            self,
            InteractionMode::Idle | InteractionMode::ContextMenuOpen(_)
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            InteractionMode::Idle => "Idle",
            InteractionMode::ContextMenuOpen(_) => "ContextMenuOpen",
            InteractionMode::AddingSpot(_) => "AddingSpot",
            InteractionMode::EditingSpot(_) => "EditingSpot",
            InteractionMode::PickingLocation { .. } => "PickingLocation",
            InteractionMode::SettingDestination(_) => "SettingDestination",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_draft_keeps_unchanged_icon_selector() {
        let spot = Spot {
            id: SpotId::from("1"),
            name: "Turm".into(),
            icon: Some("number-120".into()),
            ..Default::default()
        };
        let draft = EditSpotDraft::from_spot(&spot);
        assert_eq!(draft.icon_choice, IconChoice::Number);
        assert_eq!(draft.icon_number, 120);
        assert_eq!(draft.to_spot().icon.as_deref(), Some("number-120"));
        assert_eq!(draft.to_spot().hide_in_list, None);
    }

    #[test]
    fn test_edit_draft_applies_icon_and_visibility() {
        let spot = Spot {
            id: SpotId::from("1"),
            name: "  Turm ".into(),
            ..Default::default()
        };
        let mut draft = EditSpotDraft::from_spot(&spot);
        draft.icon_choice = IconChoice::Number;
        draft.icon_number = 7;
        draft.show_in_list = false;
        let edited = draft.to_spot();
        assert_eq!(edited.name, "Turm");
        assert_eq!(edited.icon.as_deref(), Some("number-7"));
        assert_eq!(edited.hide_in_list, Some(true));
    }

    #[test]
    fn test_modal_modes() {
        assert!(!InteractionMode::Idle.is_modal());
        assert!(InteractionMode::AddingSpot(AddSpotDraft {
            position: GeoPoint::new(1.0, 2.0),
            name: String::new(),
        })
        .is_modal());
        let picking = InteractionMode::PickingLocation {
            spot_id: SpotId::from("9"),
        };
        assert!(!picking.is_modal());
        assert!(!picking.accepts_new_mode());
    }
}
