use eframe::egui::{
    self,
    containers,
};

pub enum TopBarAction {
    Refresh,
    DrawCard,
    OpenSettings,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        can_refresh: bool,
        refreshing: bool,
        deck_summary: Option<String>,
        source_online: bool,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("Deck", |ui| {
                    if ui
                        .add_enabled(can_refresh, egui::Button::new("Refresh"))
                        .clicked()
                    {
                        action = Some(TopBarAction::Refresh);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Sources & Display").clicked() {
                        action = Some(TopBarAction::OpenSettings);
                    }
                });

                ui.add_space(8.0);

                if ui.button("🔮 Draw Card").clicked() {
                    action = Some(TopBarAction::DrawCard);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicators(ui, source_online, deck_summary, refreshing);
                });
            });
        });

        action
    }

    fn show_status_indicators(
        ui: &mut egui::Ui,
        source_online: bool,
        deck_summary: Option<String>,
        refreshing: bool,
    ) {
        let source_color = if source_online {
            egui::Color32::from_rgb(0, 200, 0)
        } else {
            egui::Color32::from_rgb(200, 80, 80)
        };

        let source_tooltip = if source_online {
            "Card source reachable"
        } else {
            "Card source unreachable (deck may be served from a fallback)"
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("source").on_hover_text(source_tooltip);
            ui.small(egui::RichText::new("●").color(source_color)).on_hover_text(source_tooltip);
        });

        if let Some(summary) = deck_summary {
            ui.add_space(6.0);
            ui.small(summary);
        }

        if refreshing {
            ui.add_space(6.0);
            ui.add(egui::Spinner::new().size(12.0));
            ui.small("Refreshing…");
        }
    }
}
