//! Einträge des Karten-Kontextmenüs (feste Reihenfolge).

/// Aktion eines Kontextmenü-Eintrags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuAction {
    /// Sofort einen versteckten Fahnen-Spot setzen
    MarkLocation,
    /// "Spot hinzufügen"-Dialog öffnen
    AddSpot,
    /// Zielort setzen bzw. aktualisieren
    SetDestination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextMenuEntry {
    pub action: ContextMenuAction,
    pub label: &'static str,
}

/// Menüeinträge; der Zielort-Eintrag steht immer zuletzt.
pub fn entries(has_destination: bool) -> [ContextMenuEntry; 3] {
    [
        ContextMenuEntry {
            action: ContextMenuAction::MarkLocation,
            label: "Ort markieren",
        },
        ContextMenuEntry {
            action: ContextMenuAction::AddSpot,
            label: "Spot hinzufügen",
        },
        ContextMenuEntry {
            action: ContextMenuAction::SetDestination,
            label: if has_destination {
                "Zielort aktualisieren"
            } else {
                "Als Zielort festlegen"
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_fixed() {
        let actions: Vec<_> = entries(false).iter().map(|e| e.action).collect();
        assert_eq!(
            actions,
            vec![
                ContextMenuAction::MarkLocation,
                ContextMenuAction::AddSpot,
                ContextMenuAction::SetDestination
            ]
        );
    }

    #[test]
    fn test_destination_label_depends_on_existing_destination() {
        assert_eq!(entries(false)[2].label, "Als Zielort festlegen");
        assert_eq!(entries(true)[2].label, "Zielort aktualisieren");
        assert_eq!(entries(true)[0].label, entries(false)[0].label);
    }
}
