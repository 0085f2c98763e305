use eframe::egui;

use super::SettingsData;

pub struct SettingsModal {
    open: bool,
    working: SettingsData,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self { open: false, working: SettingsData::default() }
    }

    pub fn open_settings(&mut self, current: SettingsData) {
        self.working = current;
        self.open = true;
    }

    /// Returns the new settings when the user saves.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut saved = None;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(400.0);

            ui.heading("Settings");
            ui.add_space(10.0);

            ui.checkbox(&mut self.working.drop_missing_images, "Hide cards without an image");
            ui.label(
                egui::RichText::new(
                    "Cards whose source carries no usable image are dropped on the next reload.",
                )
                .size(11.0)
                .color(ui.visuals().weak_text_color()),
            );

            ui.add_space(8.0);

            ui.checkbox(&mut self.working.remote_random_draw, "Draw from the remote endpoint");
            ui.label(
                egui::RichText::new(
                    "When off, a draw picks uniformly from the loaded deck and works offline.",
                )
                .size(11.0)
                .color(ui.visuals().weak_text_color()),
            );

            ui.add_space(15.0);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Save").clicked() {
                        saved = Some(self.working.clone());
                        ui.close();
                    }
                    if ui.button("Cancel").clicked() {
                        ui.close();
                    }
                });
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        saved
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
