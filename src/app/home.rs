use crate::app::{foreground_for, to_color32};
use crate::store::ColorStore;

/// Home view: the whole window filled with the selected color, with one
/// centered button whose label stays legible via the dark/light rule.
pub fn show(ctx: &egui::Context, store: &ColorStore, show_picker: &mut bool) {
    let fill = to_color32(store.background);
    let text = foreground_for(store.background_is_dark);

    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(fill))
        .show(ctx, |ui| {
            let offset = (ui.available_height() * 0.5 - 20.0).max(0.0);
            ui.vertical_centered(|ui| {
                ui.add_space(offset);
                let label = egui::RichText::new("Show Image Color Picker")
                    .size(16.0)
                    .color(text);
                if ui.button(label).clicked() {
                    *show_picker = !*show_picker;
                }
            });
        });
}
