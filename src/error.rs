use std::path::PathBuf;

use thiserror::Error;

// Main application error type
// Image errors travel through the picker event channel and hex parse
// errors are handled where the settings are read, so only the GUI shell
// failure surfaces from main

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to run the GUI shell: {0}")]
    Gui(String),
}

// Image picker error type
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Failed to read {0}: {1}")]
    Read(PathBuf, std::io::Error),
    #[error("Failed to decode {0}: {1}")]
    Decode(PathBuf, image::ImageError),
    #[error("The image load task was aborted")]
    TaskAborted,
}

#[derive(Error, Debug)]
#[error("Invalid hex color '{0}', expected \"#RRGGBB\"")]
pub struct ParseColorError(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_error_messages() {
        let read = ImageError::Read(
            Path::new("a.png").to_path_buf(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(read.to_string().contains("a.png"));

        assert_eq!(
            ParseColorError("xyz".to_string()).to_string(),
            "Invalid hex color 'xyz', expected \"#RRGGBB\""
        );

        assert_eq!(
            AppError::Gui("boom".to_string()).to_string(),
            "Failed to run the GUI shell: boom"
        );
    }
}
