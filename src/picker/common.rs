//! =============================================================================
//! COMMON.RS - Types shared by the pickers
//! COMMON.RS - Types partagés par les sélecteurs
//! =============================================================================
//!
//! Both pickers deliver their outcome through one event channel instead of a
//! delegate object: on completion the channel carries either a value or a
//! cancellation signal.
//! Les deux sélecteurs livrent leur résultat par un seul canal d'événements
//! plutôt que par un délégué : à la fin, le canal transporte une valeur ou
//! un signal d'annulation.

use std::path::PathBuf;

use crate::color::Color;
use crate::error::ImageError;

// =============================================================================
// RESULT STRUCTURES
// STRUCTURES DE RÉSULTAT
// =============================================================================

/// Image décodée retournée par le sélecteur de photos
/// Decoded image returned by the photo picker
#[derive(Clone, Debug)]
pub struct PickedImage {
    /// Chemin d'origine du fichier / Original file path
    pub path: PathBuf,
    /// Dimensions en pixels / Dimensions in pixels
    pub width: u32,
    pub height: u32,
    /// Pixels RGB8 bruts, ligne par ligne / Raw RGB8 pixels, row by row
    pub pixels: Vec<u8>,
}

/// Événement émis par un sélecteur vers la boucle d'interface
/// Event emitted by a picker toward the UI loop
#[derive(Debug)]
pub enum PickerEvent {
    /// Une couleur a été choisie / A color was picked
    ColorPicked(Color),
    /// Une image a été choisie et décodée / An image was picked and decoded
    ImagePicked(PickedImage),
    /// Le chargement de l'image a échoué / The image load failed
    ImageLoadFailed(ImageError),
    /// Le sélecteur a été fermé sans sélection / Picker dismissed unselected
    Cancelled,
}
