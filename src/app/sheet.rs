use std::path::PathBuf;

use tokio::sync::mpsc::Sender;
use tracing::warn;

use crate::app::{foreground_for, to_color32};
use crate::color::Color;
use crate::config;
use crate::picker::{self, PickerEvent};
use crate::store::ColorStore;

/// The "Image Color Picker" sheet: an image area on top, the selected-color
/// swatch with the compact color picker button below, plus the photo chooser
/// window it opens.
pub struct PickerSheet {
    chooser_open: bool,
    chooser_dir: PathBuf,
    entries: Vec<PathBuf>,
    pub loading: bool,
}

impl PickerSheet {
    pub fn new() -> Self {
        Self {
            chooser_open: false,
            chooser_dir: picker::image::default_picture_dir(),
            entries: Vec::new(),
            loading: false,
        }
    }

    fn open_chooser(&mut self) {
        // Selection limit is one image, re-listed on every open
        self.entries = picker::image::list_images(&self.chooser_dir);
        self.chooser_open = true;
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        store: &ColorStore,
        texture: Option<&egui::TextureHandle>,
        tx: &Sender<PickerEvent>,
        open: &mut bool,
    ) {
        egui::Window::new("Image Color Picker")
            .open(open)
            .collapsible(false)
            .default_size([
                config::WINDOW_WIDTH - 40.0,
                config::WINDOW_HEIGHT - 120.0,
            ])
            .show(ctx, |ui| {
                self.image_area(ui, texture);
                ui.add_space(10.0);
                self.swatch_strip(ui, store, tx);
            });

        if self.chooser_open {
            self.photo_chooser(ctx, tx);
        }
    }

    fn image_area(&mut self, ui: &mut egui::Ui, texture: Option<&egui::TextureHandle>) {
        let area = ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(config::IMAGE_AREA_MIN_HEIGHT);
            match texture {
                Some(texture) => {
                    ui.add(egui::Image::new(texture).shrink_to_fit());
                }
                None => {
                    ui.vertical_centered(|ui| {
                        ui.add_space((config::IMAGE_AREA_MIN_HEIGHT * 0.5 - 45.0).max(0.0));
                        if self.loading {
                            ui.spinner();
                            ui.label(egui::RichText::new("Loading…").size(14.0).weak());
                        } else {
                            ui.label(egui::RichText::new("+").size(35.0));
                            ui.label(egui::RichText::new("Tap to add Image").size(14.0).weak());
                        }
                    });
                }
            }
        });

        // The whole area acts as the tap target, exactly like the original
        if area.response.interact(egui::Sense::click()).clicked() && !self.loading {
            self.open_chooser();
        }
    }

    fn swatch_strip(&mut self, ui: &mut egui::Ui, store: &ColorStore, tx: &Sender<PickerEvent>) {
        let fill = to_color32(store.background);
        let text = foreground_for(store.background_is_dark);

        egui::Frame::default().fill(fill).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_height(config::SWATCH_HEIGHT);
            ui.horizontal(|ui| {
                ui.add_space(config::PICKER_BUTTON_INSET);

                // Only the button of the color picker, popup on demand;
                // its accent follows the same dark/light rule as the label
                apply_accent(ui.visuals_mut(), text);
                let mut rgba = to_color32(store.background);
                let changed = egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut rgba,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed();
                if changed {
                    let color = Color::from_rgb8(rgba.r(), rgba.g(), rgba.b());
                    send_event(tx, PickerEvent::ColorPicked(color));
                }

                ui.label(
                    egui::RichText::new(&store.background_hex)
                        .monospace()
                        .color(text),
                );
            });
        });
    }

    fn photo_chooser(&mut self, ctx: &egui::Context, tx: &Sender<PickerEvent>) {
        let mut keep_open = true;
        let mut picked: Option<PathBuf> = None;
        let mut cancelled = false;

        egui::Window::new("Choose a Photo")
            .open(&mut keep_open)
            .collapsible(false)
            .vscroll(true)
            .default_size([300.0, 360.0])
            .show(ctx, |ui| {
                ui.label(self.chooser_dir.display().to_string());
                ui.separator();

                if self.entries.is_empty() {
                    ui.weak("No images found in this folder");
                }
                for path in &self.entries {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    if ui.button(name).clicked() {
                        picked = Some(path.clone());
                    }
                }

                ui.separator();
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });

        if let Some(path) = picked {
            self.loading = true;
            self.chooser_open = false;
            picker::image::spawn_load(path, tx.clone(), ctx.clone());
        } else if cancelled || !keep_open {
            // Dismissed without a selection
            self.chooser_open = false;
            send_event(tx, PickerEvent::Cancelled);
        }
    }
}

impl Default for PickerSheet {
    fn default() -> Self {
        Self::new()
    }
}

fn send_event(tx: &Sender<PickerEvent>, event: PickerEvent) {
    // The UI drains the channel every frame, a full channel only drops
    // an intermediate value of a continuous drag
    if let Err(e) = tx.try_send(event) {
        warn!("Dropped picker event: {}", e);
    }
}

/// Tints widget frames and glyphs with the legible foreground color,
/// white on dark backgrounds and black on light ones.
fn apply_accent(visuals: &mut egui::Visuals, accent: egui::Color32) {
    for widget in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widget.fg_stroke.color = accent;
        widget.bg_stroke.color = accent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::foreground_for;

    #[test]
    fn test_accent_follows_dark_light_rule() {
        let mut visuals = egui::Visuals::default();

        // Fond sombre -> accent blanc / Dark background -> white accent
        apply_accent(&mut visuals, foreground_for(true));
        assert_eq!(visuals.widgets.inactive.fg_stroke.color, egui::Color32::WHITE);
        assert_eq!(visuals.widgets.hovered.fg_stroke.color, egui::Color32::WHITE);
        assert_eq!(visuals.widgets.active.fg_stroke.color, egui::Color32::WHITE);
        assert_eq!(visuals.widgets.inactive.bg_stroke.color, egui::Color32::WHITE);

        // Fond clair -> accent noir / Light background -> black accent
        apply_accent(&mut visuals, foreground_for(false));
        assert_eq!(visuals.widgets.inactive.fg_stroke.color, egui::Color32::BLACK);
        assert_eq!(visuals.widgets.active.bg_stroke.color, egui::Color32::BLACK);
    }
}
