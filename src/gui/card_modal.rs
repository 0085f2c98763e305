use eframe::egui;

use crate::{
    core::Card,
    gui::theme::Theme,
};

pub enum CardModalAction {
    DrawAgain,
}

/// Detail view for a single card, either drawn at random or picked from the
/// table. The draw variant offers a redraw button.
pub struct CardModal {
    open: bool,
    drawn: bool,
    card: Option<Card>,
}

impl CardModal {
    pub fn new() -> Self {
        Self { open: false, drawn: false, card: None }
    }

    pub fn show_card(&mut self, card: Card, drawn: bool) {
        self.card = Some(card);
        self.drawn = drawn;
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) -> Option<CardModalAction> {
        if !self.open {
            return None;
        }

        let card = self.card.clone()?;
        let mut action = None;

        let modal = egui::Modal::new(egui::Id::new("card_modal")).show(ctx, |ui| {
            ui.set_width(420.0);

            if self.drawn {
                ui.label(
                    egui::RichText::new("Your card")
                        .size(11.0)
                        .color(theme.comment(ui.ctx()))
                        .italics(),
                );
            }

            ui.label(theme.heading(ui.ctx(), &card.name).size(22.0).strong());

            let mut subtitle: Vec<String> = Vec::new();
            if let Some(suit) = &card.suit {
                subtitle.push(suit.clone());
            }
            if let Some(code) = &card.short_code {
                subtitle.push(code.clone());
            }
            if !subtitle.is_empty() {
                ui.label(
                    egui::RichText::new(subtitle.join(" · "))
                        .size(12.0)
                        .color(theme.comment(ui.ctx())),
                );
            }

            ui.add_space(8.0);

            if !card.desc.is_empty() {
                ui.label(&card.desc);
                ui.add_space(8.0);
            }

            ui.separator();
            ui.add_space(6.0);

            ui.label(theme.bold(ui.ctx(), "Upright"));
            ui.label(if card.meaning_up.is_empty() { "—" } else { card.meaning_up.as_str() });

            ui.add_space(6.0);

            ui.label(theme.bold(ui.ctx(), "Reversed"));
            ui.label(if card.meaning_rev.is_empty() { "—" } else { card.meaning_rev.as_str() });

            if !card.keywords.is_empty() {
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(card.keywords_text())
                        .size(12.0)
                        .color(theme.cyan(ui.ctx())),
                );
            }

            ui.add_space(8.0);
            ui.hyperlink_to("Card image", card.display_image_url());

            ui.add_space(15.0);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        ui.close();
                    }
                    if self.drawn && ui.button("Draw Again").clicked() {
                        action = Some(CardModalAction::DrawAgain);
                        ui.close();
                    }
                });
            });
        });

        if modal.should_close() {
            self.open = false;
            self.card = None;
        }

        action
    }
}

impl Default for CardModal {
    fn default() -> Self {
        Self::new()
    }
}
