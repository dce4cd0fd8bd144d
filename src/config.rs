//! Configuration constants shared across the application
//!
//! These values control the appearance and behavior of the picker demo.

/// Default background color RGB value (white)
/// Valeur RGB par défaut pour la couleur d'arrière-plan (blanc)
pub const DEFAULT_BACKGROUND_RGB: (u8, u8, u8) = (255, 255, 255);

/// Initial window size (in points), roughly a phone-shaped portrait window
pub const WINDOW_WIDTH: f32 = 420.0;
pub const WINDOW_HEIGHT: f32 = 680.0;

/// Height of the selected-color swatch strip at the bottom of the picker
/// sheet (in points)
pub const SWATCH_HEIGHT: f32 = 90.0;

/// Horizontal inset of the color picker button inside the swatch strip
/// (in points)
pub const PICKER_BUTTON_INSET: f32 = 15.0;

/// Minimum height reserved for the image area of the picker sheet
pub const IMAGE_AREA_MIN_HEIGHT: f32 = 260.0;

/// File extensions the photo chooser recognizes (lowercase)
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff", "tif"];

/// Capacity of the picker event channel
/// At most a handful of events are produced per frame and the UI drains the
/// channel every frame
pub const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Directory (under the platform config dir) and file name for saved settings
pub const SETTINGS_DIR: &str = "simple-color-picker";
pub const SETTINGS_FILE: &str = "settings.json";
