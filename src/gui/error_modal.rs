use eframe::egui;

#[derive(Default, Clone)]
pub struct ErrorData {
    pub title: String,
    pub message: String,
    pub details: Option<String>,
}

pub enum ErrorChoice {
    Dismissed,
    Reload,
}

pub struct ErrorModal {
    open: bool,
    offer_reload: bool,
    data: ErrorData,
}

impl ErrorModal {
    pub fn new() -> Self {
        Self { open: false, offer_reload: false, data: ErrorData::default() }
    }

    pub fn show_error(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        details: Option<impl Into<String>>,
    ) {
        self.data = ErrorData {
            title: title.into(),
            message: message.into(),
            details: details.map(|d| d.into()),
        };

        self.offer_reload = false;
        self.open = true;
    }

    /// Same dialog with a Reload button, for errors where a fresh deck load is
    /// the recovery path (empty deck, failed load).
    pub fn show_reload_prompt(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.data =
            ErrorData { title: title.into(), message: message.into(), details: None };

        self.offer_reload = true;
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<ErrorChoice> {
        if !self.open {
            return None;
        }

        let mut choice = None;

        let modal = egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
            ui.set_width(450.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(24.0).color(egui::Color32::RED));
                ui.label(
                    egui::RichText::new(&self.data.title)
                        .size(18.0)
                        .color(ui.visuals().strong_text_color())
                        .strong(),
                );
            });

            ui.add_space(10.0);

            ui.label(egui::RichText::new(&self.data.message).size(14.0));

            if let Some(details) = &self.data.details {
                ui.add_space(10.0);
                ui.collapsing("Technical Details", |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut details.as_str())
                            .desired_width(f32::INFINITY)
                            .desired_rows(4)
                            .code_editor(),
                    );
                });
            };

            ui.add_space(15.0);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        choice = Some(ErrorChoice::Dismissed);
                        ui.close();
                    }
                    if self.offer_reload && ui.button("Reload Deck").clicked() {
                        choice = Some(ErrorChoice::Reload);
                        ui.close();
                    }
                });
            });
        });

        if modal.should_close() {
            self.open = false;
            self.offer_reload = false;
            self.data = ErrorData::default();
            return Some(choice.unwrap_or(ErrorChoice::Dismissed));
        }

        choice
    }
}

impl Default for ErrorModal {
    fn default() -> Self {
        Self::new()
    }
}
