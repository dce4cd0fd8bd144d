// =============================================================================
// picker/mod.rs - Picker module
// =============================================================================

/// Types partagés par les sélecteurs (événements, résultats)
/// Types shared by the pickers (events, results)
pub mod common;

/// Sélecteur de photos (parcours du dossier, décodage en arrière-plan)
/// Photo picker (folder browsing, background decode)
pub mod image;

pub use common::{PickedImage, PickerEvent};

use tokio::sync::mpsc;

use crate::config;

// =============================================================================
// PUBLIC FUNCTIONS
// FONCTIONS PUBLIQUES
// =============================================================================

/// Crée le canal d'événements reliant les sélecteurs à l'interface
/// Creates the event channel linking the pickers to the UI
pub fn channel() -> (mpsc::Sender<PickerEvent>, mpsc::Receiver<PickerEvent>) {
    mpsc::channel(config::EVENT_CHANNEL_CAPACITY)
}
