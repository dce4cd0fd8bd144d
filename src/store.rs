// =============================================================================
// store.rs - Store management module
// =============================================================================

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::Color;
use crate::config;
use crate::picker::PickedImage;

// =============================================================================
// STORE - État partagé de l'application
// STORE - Shared application state
// =============================================================================

/// Structure du store - contient toutes les données réactives
/// Store structure - contains all reactive data
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ColorStore {
    /// Couleur d'arrière-plan sélectionnée / Selected background color
    pub background: Color,

    /// Couleur d'arrière-plan au format hexadécimal
    /// Background color in hexadecimal format
    pub background_hex: String,

    /// Si la couleur est sombre / If the colour is dark
    pub background_is_dark: bool,

    /// Image choisie, gardée décodée - ignorée par la sérialisation
    /// Picked image, kept decoded - ignored by serialization
    #[serde(skip)]
    pub image: Option<PickedImage>,
}

impl Default for ColorStore {
    fn default() -> Self {
        let (r, g, b) = config::DEFAULT_BACKGROUND_RGB;
        Self::with_background(Color::from_rgb8(r, g, b))
    }
}

impl ColorStore {
    /// Construit un store autour d'une couleur de départ
    /// Builds a store around a starting color
    pub fn with_background(background: Color) -> Self {
        Self {
            background,
            background_hex: background.to_hex(),
            background_is_dark: background.is_dark(),
            image: None,
        }
    }

    /// Met à jour la couleur d'arrière-plan et ses valeurs dérivées
    /// Updates the background color and its derived values
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
        self.background_hex = color.to_hex();
        self.background_is_dark = color.is_dark();
    }

    /// Installe l'image choisie / Installs the picked image
    pub fn set_image(&mut self, image: PickedImage) {
        self.image = Some(image);
    }
}

// =============================================================================
// SETTINGS - Persistance de la dernière couleur
// SETTINGS - Persistence of the last color
// =============================================================================

/// Réglages conservés entre deux lancements
/// Settings kept across launches
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Settings {
    /// Dernière couleur d'arrière-plan (format "#RRGGBB")
    /// Last background color (format "#RRGGBB")
    pub background_hex: String,
}

fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(config::SETTINGS_DIR).join(config::SETTINGS_FILE))
}

/// Restaure la dernière couleur sauvegardée, s'il y en a une
/// Restores the last saved color, if any
///
/// Toute erreur (fichier absent, JSON invalide, hex invalide) est non fatale
/// et ramène aux valeurs par défaut.
/// Any error (missing file, invalid JSON, invalid hex) is non fatal and
/// falls back to the defaults.
pub fn load_settings() -> Option<Color> {
    let path = settings_path()?;
    let raw = std::fs::read_to_string(&path).ok()?;
    let settings: Settings = match serde_json::from_str(&raw) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Ignoring malformed settings {}: {}", path.display(), e);
            return None;
        }
    };
    match Color::from_hex(&settings.background_hex) {
        Ok(color) => {
            debug!("Restored background {}", settings.background_hex);
            Some(color)
        }
        Err(e) => {
            warn!("Ignoring saved background: {}", e);
            None
        }
    }
}

/// Sauvegarde la couleur courante du store
/// Saves the store's current color
pub fn save_settings(store: &ColorStore) {
    let Some(path) = settings_path() else {
        return;
    };
    let settings = Settings {
        background_hex: store.background_hex.clone(),
    };
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&path, json)
    };
    if let Err(e) = write() {
        warn!("Could not save settings to {}: {}", path.display(), e);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store() {
        let store = ColorStore::default();
        assert_eq!(store.background_hex, "#FFFFFF");
        assert!(!store.background_is_dark);
        assert!(store.image.is_none());
    }

    #[test]
    fn test_set_background_rederives() {
        let mut store = ColorStore::default();
        store.set_background(Color::from_rgb8(0x3F, 0x51, 0xB5));
        assert_eq!(store.background_hex, "#3F51B5");
        assert!(store.background_is_dark);

        store.set_background(Color::from_rgb8(0xFF, 0x98, 0x00));
        assert_eq!(store.background_hex, "#FF9800");
        assert!(!store.background_is_dark);
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = Settings {
            background_hex: "#FF0080".to_string(),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.background_hex, "#FF0080");
        assert_eq!(
            Color::from_hex(&back.background_hex).unwrap().to_rgb8(),
            (255, 0, 128)
        );
    }

    #[test]
    fn test_store_serializes_without_image() {
        let mut store = ColorStore::default();
        store.set_image(PickedImage {
            path: "photo.png".into(),
            width: 1,
            height: 1,
            pixels: vec![0, 0, 0],
        });
        let json = serde_json::to_string(&store).unwrap();
        let back: ColorStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back.background_hex, store.background_hex);
        assert!(back.image.is_none());
    }
}
