use eframe::egui::{
    self,
    RichText,
    TextEdit,
};
use egui_extras::{
    Column,
    TableBuilder,
};

use super::{
    app::ArcanaApp,
    theme::blend_colors,
};
use crate::core::Card;

pub enum TableAction {
    OpenCard(Card),
    SetSearch(String),
    Reload,
}

pub fn card_table(ctx: &egui::Context, app: &ArcanaApp) -> Vec<TableAction> {
    let mut actions = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        let has_deck = app.deck_state.has_deck();

        if !has_deck && !app.message_overlay.active {
            ui.vertical_centered(|ui| {
                ui.add_space(100.0);

                ui.label(
                    egui::RichText::new("No Deck Loaded")
                        .size(32.0)
                        .color(app.theme.purple(ui.ctx())),
                );

                ui.add_space(1.0);

                ui.label(
                    egui::RichText::new("None of the card sources could be reached.")
                        .size(14.0)
                        .color(app.theme.comment(ui.ctx())),
                );

                ui.add_space(16.0);
                let label = egui::Label::new(
                    egui::RichText::new("Reload Deck")
                        .size(14.0)
                        .color(ctx.style().visuals.weak_text_color()),
                )
                .sense(egui::Sense::click());

                let mut response = ui.add(label);

                if response.hovered() {
                    response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
                }
                if response.clicked() {
                    actions.push(TableAction::Reload);
                }
            });
        } else if has_deck {
            let deck = app.deck_state.deck().unwrap();

            ui.horizontal_wrapped(|ui| {
                ui.set_max_width(ui.available_width());
                ui.heading(
                    egui::RichText::new("Tarot Deck").color(app.theme.purple(ui.ctx())).strong(),
                );
                ui.label(
                    egui::RichText::new(format!(
                        "{} cards · {} · loaded {}",
                        deck.len(),
                        deck.source,
                        deck.loaded_at.format("%H:%M:%S")
                    ))
                    .size(12.0)
                    .color(app.theme.comment(ui.ctx())),
                );
            });

            ui.add_space(6.0);

            let cards = app.deck_state.filtered();

            let mut search = app.deck_state.query().to_string();
            ui.horizontal(|ui| {
                let response = ui.add_sized(
                    [280.0, ui.spacing().interact_size.y],
                    TextEdit::singleline(&mut search).hint_text("Search cards…"),
                );
                if response.changed() {
                    actions.push(TableAction::SetSearch(search.clone()));
                }

                if !app.deck_state.query().is_empty() {
                    ui.label(
                        egui::RichText::new(format!("{} of {} match", cards.len(), deck.len()))
                            .size(12.0)
                            .color(app.theme.comment(ui.ctx())),
                    );
                }
            });

            ui.add_space(10.0);

            if cards.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(
                        egui::RichText::new("No cards match the current search.")
                            .color(app.theme.comment(ui.ctx())),
                    );
                });
                return;
            }

            let text_height = egui::TextStyle::Body
                .resolve(ui.style())
                .size
                .max(ui.spacing().interact_size.y);

            egui::ScrollArea::vertical().show(ui, |ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .resizable(false)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::auto().at_least(170.0))
                    .column(Column::auto().at_least(70.0))
                    .column(Column::auto().at_least(150.0))
                    .column(Column::remainder())
                    .column(Column::remainder())
                    .header(25.0, |mut header| {
                        header.col(|ui| {
                            ui.label(app.theme.heading(ui.ctx(), "Card"));
                        });
                        header.col(|ui| {
                            ui.label(app.theme.heading(ui.ctx(), "Suit"));
                        });
                        header.col(|ui| {
                            ui.label(app.theme.heading(ui.ctx(), "Keywords"));
                        });
                        header.col(|ui| {
                            ui.label(app.theme.heading(ui.ctx(), "Upright"));
                        });
                        header.col(|ui| {
                            ui.label(app.theme.heading(ui.ctx(), "Reversed"));
                        });
                    })
                    .body(|body| {
                        body.rows(text_height, cards.len(), |mut row| {
                            let card = cards[row.index()];

                            ui_col_name(ctx, &mut row, card, app, &mut actions);
                            row.col(|ui| {
                                ui.label(card.suit.as_deref().unwrap_or("—"));
                            });
                            row.col(|ui| {
                                ui.add(
                                    egui::Label::new(
                                        RichText::new(card.keywords_text())
                                            .color(app.theme.cyan(ui.ctx()))
                                            .size(12.0),
                                    )
                                    .truncate(),
                                );
                            });
                            row.col(|ui| {
                                ui.add(egui::Label::new(card.meaning_up.as_str()).truncate());
                            });
                            row.col(|ui| {
                                ui.add(egui::Label::new(card.meaning_rev.as_str()).truncate());
                            });
                        });
                    });
            });
        }
    });

    actions
}

fn ui_col_name(
    ctx: &egui::Context,
    row: &mut egui_extras::TableRow,
    card: &Card,
    app: &ArcanaApp,
    actions: &mut Vec<TableAction>,
) {
    row.col(|ui| {
        let normal_color = ctx.style().visuals.widgets.noninteractive.fg_stroke.color;
        let name_color = blend_colors(normal_color, app.theme.gold(ctx), 0.6);

        let label = egui::Label::new(RichText::new(&card.name).color(name_color).size(15.0))
            .sense(egui::Sense::click());

        let response = ui.add(label).on_hover_text("Click for details");

        if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        if response.clicked() {
            actions.push(TableAction::OpenCard(card.clone()));
        }
    });
}
