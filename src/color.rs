// =============================================================================
// color.rs - Color value type and light/dark classification
// color.rs - Type valeur couleur et classification clair/sombre
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::error::ParseColorError;

/// Couleur RGBA avec des canaux flottants dans [0, 1]
/// RGBA color with floating point channels in [0, 1]
///
/// L'alpha est transporté mais ignoré par la classification.
/// Alpha is carried along but ignored by the classification.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Construit une couleur à partir de canaux dans [0, 1]
    /// Builds a color from channels in [0, 1]
    ///
    /// Les canaux hors plage ne sont pas validés ni clampés ; le résultat
    /// des calculs reste déterministe mais hors plage lui aussi.
    /// Out-of-range channels are neither validated nor clamped; computed
    /// results stay deterministic but out of range as well.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Construit une couleur opaque à partir de composantes 8 bits
    /// Builds an opaque color from 8-bit components
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            1.0,
        )
    }

    /// Convertit vers des composantes 8 bits (clampées)
    /// Converts to 8-bit components (clamped)
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (quantize(self.r), quantize(self.g), quantize(self.b))
    }

    /// Calcule la luminance relative de la couleur
    /// Computes the relative luminance of the color
    ///
    /// Utilise les coefficients standards ITU-R BT.709 :
    /// Uses the standard ITU-R BT.709 coefficients:
    /// L = 0.2126 * R + 0.7152 * G + 0.0722 * B
    ///
    /// # Returns
    /// Luminance entre 0.0 (noir) et 1.0 (blanc) pour une entrée dans [0, 1]
    /// Luminance between 0.0 (black) and 1.0 (white) for input in [0, 1]
    #[inline]
    pub fn relative_luminance(self) -> f64 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// Détermine si la couleur est perçue comme sombre
    /// Determines whether the color is perceived as dark
    ///
    /// Une luminance strictement sous 0.5 est sombre ; exactement 0.5 est
    /// claire. Sert à choisir un texte lisible (blanc sur sombre, noir sur
    /// clair).
    /// A luminance strictly below 0.5 is dark; exactly 0.5 is light. Used
    /// to pick legible text (white on dark, black on light).
    #[inline]
    pub fn is_dark(self) -> bool {
        self.relative_luminance() < 0.5
    }

    /// Formate la couleur en chaîne hexadécimale "#RRGGBB"
    /// Formats the color as a "#RRGGBB" hex string
    #[inline]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Analyse une chaîne "#RRGGBB" (le '#' est optionnel)
    /// Parses a "#RRGGBB" string (the '#' is optional)
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ParseColorError(s.to_string()));
        }
        let channel = |range| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ParseColorError(s.to_string()))
        };
        Ok(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance() {
        // Noir / Black
        assert!((Color::BLACK.relative_luminance() - 0.0).abs() < 1e-12);
        // Blanc / White
        assert!((Color::WHITE.relative_luminance() - 1.0).abs() < 1e-12);
        // Rouge pur / Pure red
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        assert!((red.relative_luminance() - 0.2126).abs() < 1e-12);
        // Jaune / Yellow
        let yellow = Color::new(1.0, 1.0, 0.0, 1.0);
        assert!((yellow.relative_luminance() - 0.9278).abs() < 1e-12);
    }

    #[test]
    fn test_is_dark() {
        assert!(Color::BLACK.is_dark());
        assert!(!Color::WHITE.is_dark());
        // Rouge pur : L = 0.2126 / Pure red: L = 0.2126
        assert!(Color::new(1.0, 0.0, 0.0, 1.0).is_dark());
        // Jaune : L = 0.9278 / Yellow: L = 0.9278
        assert!(!Color::new(1.0, 1.0, 0.0, 1.0).is_dark());
    }

    #[test]
    fn test_is_dark_threshold() {
        // Les coefficients somment exactement à 1.0 en f64, le gris moyen
        // touche donc la borne : L = 0.5 exactement, classé clair.
        // The coefficients sum to exactly 1.0 in f64, so mid gray hits the
        // boundary: L = 0.5 exactly, classified light.
        let mid_gray = Color::new(0.5, 0.5, 0.5, 1.0);
        assert_eq!(mid_gray.relative_luminance(), 0.5);
        assert!(!mid_gray.is_dark());

        // De part et d'autre du seuil sur le canal vert
        // Either side of the threshold on the green channel
        assert!(Color::new(0.0, 0.69, 0.0, 1.0).is_dark()); // L = 0.493488
        assert!(!Color::new(0.0, 0.70, 0.0, 1.0).is_dark()); // L = 0.50064
    }

    #[test]
    fn test_is_dark_ignores_alpha() {
        let opaque = Color::new(0.2, 0.2, 0.2, 1.0);
        let transparent = Color::new(0.2, 0.2, 0.2, 0.0);
        assert_eq!(opaque.is_dark(), transparent.is_dark());
    }

    #[test]
    fn test_luminance_monotone_per_channel() {
        // Augmenter un canal ne peut pas diminuer la luminance
        // Increasing one channel can never decrease luminance
        let steps: Vec<f64> = (0..=10).map(|i| f64::from(i) / 10.0).collect();
        for &base in &steps {
            let mut previous = [f64::NEG_INFINITY; 3];
            for &v in &steps {
                let candidates = [
                    Color::new(v, base, base, 1.0),
                    Color::new(base, v, base, 1.0),
                    Color::new(base, base, v, 1.0),
                ];
                for (i, c) in candidates.iter().enumerate() {
                    let l = c.relative_luminance();
                    assert!(l >= previous[i]);
                    previous[i] = l;
                }
            }
        }
    }

    #[test]
    fn test_rgb8_round_trip() {
        let (r, g, b) = Color::from_rgb8(255, 0, 128).to_rgb8();
        assert_eq!((r, g, b), (255, 0, 128));
        // Hors plage : clampé à la quantification seulement
        // Out of range: clamped at quantization time only
        assert_eq!(Color::new(1.5, -0.25, 0.0, 1.0).to_rgb8(), (255, 0, 0));
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(Color::from_rgb8(255, 0, 128).to_hex(), "#FF0080");
        assert_eq!(Color::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(
            Color::from_hex("#FF0080").unwrap().to_rgb8(),
            (255, 0, 128)
        );
        assert_eq!(Color::from_hex("00ff00").unwrap().to_rgb8(), (0, 255, 0));
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn test_is_dark_from_rgb8() {
        // Gris 8 bits autour du seuil / 8-bit grays around the threshold
        assert!(Color::from_rgb8(127, 127, 127).is_dark());
        assert!(!Color::from_rgb8(128, 128, 128).is_dark());
        assert!(Color::from_rgb8(0x3F, 0x51, 0xB5).is_dark()); // indigo
        assert!(!Color::from_rgb8(0xFF, 0x98, 0x00).is_dark()); // orange
    }
}
