pub mod home;
pub mod sheet;

pub use sheet::PickerSheet;

use egui::TextureOptions;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError as MpscTryRecvError;
use tracing::{debug, error, info};

use crate::color::Color;
use crate::config;
use crate::error::AppError;
use crate::picker::{self, PickerEvent};
use crate::store::{self, ColorStore};

/// Converts a [`Color`] to the renderer's 8-bit color type.
pub fn to_color32(color: Color) -> egui::Color32 {
    let (r, g, b) = color.to_rgb8();
    egui::Color32::from_rgb(r, g, b)
}

/// White text on dark backgrounds, black on light ones.
pub fn foreground_for(background_is_dark: bool) -> egui::Color32 {
    if background_is_dark {
        egui::Color32::WHITE
    } else {
        egui::Color32::BLACK
    }
}

pub struct PickerApp {
    store: ColorStore,
    show_picker: bool,
    sheet: PickerSheet,
    texture: Option<egui::TextureHandle>,
    event_tx: mpsc::Sender<PickerEvent>,
    event_rx: mpsc::Receiver<PickerEvent>,
}

impl PickerApp {
    pub fn new() -> Self {
        let (event_tx, event_rx) = picker::channel();
        let store = store::load_settings()
            .map(ColorStore::with_background)
            .unwrap_or_default();
        Self {
            store,
            show_picker: false,
            sheet: PickerSheet::new(),
            texture: None,
            event_tx,
            event_rx,
        }
    }

    pub fn start_gui() -> Result<(), AppError> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(egui::vec2(config::WINDOW_WIDTH, config::WINDOW_HEIGHT))
                .with_title("Simple Color Picker"),
            ..Default::default()
        };

        eframe::run_native(
            "Simple Color Picker",
            options,
            Box::new(|_cc| Ok(Box::new(PickerApp::new()))),
        )
        .map_err(|e| AppError::Gui(e.to_string()))
    }

    fn apply_event(&mut self, event: PickerEvent, ctx: &egui::Context) {
        match event {
            PickerEvent::ColorPicked(color) => {
                // Continuous drags deliver one of these per frame, the
                // color only persists once, at shutdown
                self.store.set_background(color);
            }
            PickerEvent::ImagePicked(image) => {
                let color_image = egui::ColorImage::from_rgb(
                    [image.width as usize, image.height as usize],
                    &image.pixels,
                );
                self.texture =
                    Some(ctx.load_texture("picked-image", color_image, TextureOptions::default()));
                info!(
                    "Loaded image {} ({}x{})",
                    image.path.display(),
                    image.width,
                    image.height
                );
                self.store.set_image(image);
                self.sheet.loading = false;
            }
            PickerEvent::ImageLoadFailed(e) => {
                // Prior state stays untouched
                error!("Image selection failed: {}", e);
                self.sheet.loading = false;
            }
            PickerEvent::Cancelled => {
                debug!("Picker dismissed without a selection");
                self.sheet.loading = false;
            }
        }
    }
}

impl Default for PickerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for PickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        loop {
            match self.event_rx.try_recv() {
                Ok(event) => self.apply_event(event, ctx),
                Err(MpscTryRecvError::Empty) => break,
                Err(MpscTryRecvError::Disconnected) => {
                    error!("Picker event channel disconnected");
                    break;
                }
            }
        }

        home::show(ctx, &self.store, &mut self.show_picker);

        if self.show_picker {
            self.sheet.show(
                ctx,
                &self.store,
                self.texture.as_ref(),
                &self.event_tx,
                &mut self.show_picker,
            );
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        store::save_settings(&self.store);
    }
}
