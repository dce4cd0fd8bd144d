// =============================================================================
// picker/image.rs - Photo picker: folder browsing and background decode
// picker/image.rs - Sélecteur de photos : parcours du dossier et décodage
// =============================================================================

use std::path::{Path, PathBuf};

use tokio::sync::mpsc::Sender;
use tracing::{debug, error, warn};

use crate::config;
use crate::error::ImageError;
use crate::picker::common::{PickedImage, PickerEvent};

/// Dossier proposé par défaut pour choisir une photo
/// Default folder offered for choosing a photo
///
/// Le dossier Images de la plateforme, sinon le répertoire courant.
/// The platform pictures directory, else the current directory.
pub fn default_picture_dir() -> PathBuf {
    dirs::picture_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Indique si un chemin porte une extension d'image connue
/// Tells whether a path carries a known image extension
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            config::IMAGE_EXTENSIONS.iter().any(|known| *known == ext)
        })
        .unwrap_or(false)
}

/// Liste les fichiers image d'un dossier, triés par nom
/// Lists the image files of a folder, sorted by name
///
/// Un dossier illisible donne une liste vide (et un avertissement), pas une
/// erreur : le sélecteur affiche alors simplement "aucune image".
/// An unreadable folder yields an empty list (and a warning), not an error:
/// the chooser then simply shows "no images".
pub fn list_images(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Could not read picture folder {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_image_file(path))
        .collect();
    files.sort();
    files
}

/// Lit et décode un fichier image en pixels RGB8
/// Reads and decodes an image file into RGB8 pixels
fn load_image(path: &Path) -> Result<PickedImage, ImageError> {
    // Lecture des octets puis décodage, comme une completion "image bytes"
    // Read the bytes then decode, like an "image bytes" completion
    let bytes =
        std::fs::read(path).map_err(|e| ImageError::Read(path.to_path_buf(), e))?;
    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| ImageError::Decode(path.to_path_buf(), e))?;

    let rgb = decoded.to_rgb8();
    Ok(PickedImage {
        path: path.to_path_buf(),
        width: rgb.width(),
        height: rgb.height(),
        pixels: rgb.into_raw(),
    })
}

/// Lance le chargement d'une image en arrière-plan
/// Starts loading an image in the background
///
/// L'unique rappel asynchrone de l'application : le décodage part sur le
/// pool bloquant et le résultat revient par le canal d'événements.
/// The application's single asynchronous callback: decoding runs on the
/// blocking pool and the outcome comes back through the event channel.
pub fn spawn_load(path: PathBuf, tx: Sender<PickerEvent>, ctx: egui::Context) {
    tokio::spawn(async move {
        debug!("Loading image {}", path.display());
        let result = match tokio::task::spawn_blocking(move || load_image(&path)).await {
            Ok(result) => result,
            Err(e) => {
                error!("Image load task aborted: {}", e);
                Err(ImageError::TaskAborted)
            }
        };

        let event = match result {
            Ok(image) => PickerEvent::ImagePicked(image),
            Err(e) => PickerEvent::ImageLoadFailed(e),
        };
        if tx.send(event).await.is_err() {
            warn!("Picker event channel closed before image delivery");
        }
        // Réveille l'interface pour consommer l'événement
        // Wakes the UI up to consume the event
        ctx.request_repaint();
    });
}

// =============================================================================
// TESTS
// =============================================================================
