//! Vordefinierte Nummernplaketten für `number-<n>`-Spots.
//!
//! Die Plaketten 1..=50 werden einmal erzeugt und danach nur noch referenziert.
//! Höhere Nummern werden nach derselben Regel berechnet, sind also ebenfalls stabil.

use std::borrow::Cow;
use std::sync::OnceLock;

/// Anzahl vorberechneter Plaketten.
pub const PREDEFINED_BADGES: u32 = 50;

/// Farben der Plaketten; Nummer n nutzt Eintrag (n - 1) % len.
const PALETTE: [[u8; 3]; 10] = [
    [220, 53, 69],
    [253, 126, 20],
    [255, 193, 7],
    [40, 167, 69],
    [32, 201, 151],
    [23, 162, 184],
    [0, 123, 255],
    [102, 16, 242],
    [111, 66, 193],
    [232, 62, 140],
];

/// Aussehen einer Nummernplakette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeStyle {
    pub number: u32,
    pub label: String,
    pub fill: [u8; 3],
    pub text: [u8; 3],
}

impl BadgeStyle {
    fn build(number: u32) -> Self {
        let fill = PALETTE[((number.max(1) - 1) as usize) % PALETTE.len()];
        Self {
            number,
            label: number.to_string(),
            fill,
            text: contrast_text(fill),
        }
    }
}

/// Schwarz oder Weiß, je nach Helligkeit der Füllfarbe.
fn contrast_text(fill: [u8; 3]) -> [u8; 3] {
    let [r, g, b] = fill.map(f32::from);
    let luminance = 0.299 * r + 0.587 * g + 0.114 * b;
    if luminance > 160.0 {
        [20, 20, 20]
    } else {
        [255, 255, 255]
    }
}

fn catalog() -> &'static [BadgeStyle] {
    static CATALOG: OnceLock<Vec<BadgeStyle>> = OnceLock::new();
    CATALOG.get_or_init(|| (1..=PREDEFINED_BADGES).map(BadgeStyle::build).collect())
}

/// Plakette für Nummer `n`. Für 1..=50 immer dieselbe Instanz.
pub fn badge(number: u32) -> Cow<'static, BadgeStyle> {
    match number {
        1..=PREDEFINED_BADGES => Cow::Borrowed(&catalog()[(number - 1) as usize]),
        _ => Cow::Owned(BadgeStyle::build(number)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_number_yields_same_badge_instance() {
        let a = badge(7);
        let b = badge(7);
        match (a, b) {
            (Cow::Borrowed(a), Cow::Borrowed(b)) => assert!(std::ptr::eq(a, b)),
            _ => panic!("Plakette 7 sollte vordefiniert sein"),
        }
    }

    #[test]
    fn test_large_numbers_are_deterministic() {
        assert_eq!(badge(120), badge(120));
        assert_eq!(badge(120).label, "120");
        assert_eq!(badge(120).fill, badge(10).fill);
    }

    #[test]
    fn test_text_contrasts_with_fill() {
        // Gelb → dunkle Schrift
        assert_eq!(badge(3).text, [20, 20, 20]);
        assert_eq!(badge(1).text, [255, 255, 255]);
    }
}
