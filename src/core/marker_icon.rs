//! Auflösung des `icon`-Selektors eines Spots auf einen Marker-Stil.

use regex::Regex;
use std::sync::OnceLock;

/// Aufgelöster Marker-Stil eines Spots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerIcon {
    /// Standard-Pin
    Default,
    /// Fahnen-Glyphe
    Flag,
    /// Runde Nummernplakette (n ≥ 1)
    Numbered(u32),
}

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^number-(\d+)$").expect("statisches Regex ist gültig"))
}

impl MarkerIcon {
    /// Löst einen Selektor deterministisch auf.
    ///
    /// `"flag"` → Fahne, `"number-<n>"` mit n ≥ 1 → Plakette, alles andere → Pin.
    pub fn resolve(icon: Option<&str>) -> Self {
        let Some(icon) = icon else {
            return MarkerIcon::Default;
        };
        if icon == "flag" {
            return MarkerIcon::Flag;
        }
        number_pattern()
            .captures(icon)
            .and_then(|caps| caps.get(1))
            .and_then(|n| n.as_str().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .map(MarkerIcon::Numbered)
            .unwrap_or(MarkerIcon::Default)
    }

    /// Selektor für die Persistenz (`None` = Standard).
    pub fn selector(self) -> Option<String> {
        match self {
            MarkerIcon::Default => None,
            MarkerIcon::Flag => Some("flag".to_string()),
            MarkerIcon::Numbered(n) => Some(format!("number-{n}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_flag_and_default() {
        assert_eq!(MarkerIcon::resolve(Some("flag")), MarkerIcon::Flag);
        assert_eq!(MarkerIcon::resolve(None), MarkerIcon::Default);
        assert_eq!(MarkerIcon::resolve(Some("default")), MarkerIcon::Default);
        assert_eq!(MarkerIcon::resolve(Some("star")), MarkerIcon::Default);
    }

    #[test]
    fn test_resolve_numbered() {
        assert_eq!(MarkerIcon::resolve(Some("number-7")), MarkerIcon::Numbered(7));
        assert_eq!(MarkerIcon::resolve(Some("number-120")), MarkerIcon::Numbered(120));
    }

    #[test]
    fn test_resolve_rejects_invalid_numbers() {
        assert_eq!(MarkerIcon::resolve(Some("number-0")), MarkerIcon::Default);
        assert_eq!(MarkerIcon::resolve(Some("number--3")), MarkerIcon::Default);
        assert_eq!(MarkerIcon::resolve(Some("number-x")), MarkerIcon::Default);
        assert_eq!(MarkerIcon::resolve(Some("number-7 ")), MarkerIcon::Default);
        assert_eq!(
            MarkerIcon::resolve(Some("number-99999999999")),
            MarkerIcon::Default
        );
    }

    #[test]
    fn test_selector_roundtrip() {
        for icon in [MarkerIcon::Default, MarkerIcon::Flag, MarkerIcon::Numbered(12)] {
            assert_eq!(MarkerIcon::resolve(icon.selector().as_deref()), icon);
        }
    }
}
