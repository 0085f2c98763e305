mod modals;

use std::time::{
    Duration,
    Instant,
};

use eframe::egui;
use modals::Modals;

use super::{
    card_modal::CardModalAction,
    card_table::{
        card_table,
        TableAction,
    },
    error_modal::ErrorChoice,
    message_overlay::MessageOverlay,
    settings::SettingsData,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::tasks::{
        LoadTracker,
        TaskManager,
        TaskResult,
    },
    deck::DeckState,
    persistence::{
        load_json_or_default,
        save_json,
    },
    source::{
        default_endpoints,
        embedded::EMBEDDED_SOURCE,
        SourceConfig,
    },
};

const SETTINGS_FILE: &str = "settings.json";
const SOURCE_CHECK_INTERVAL: Duration = Duration::from_secs(60);

pub struct ArcanaApp {
    // Deck Data
    pub deck_state: DeckState,

    // Configuration
    pub settings_data: SettingsData,

    // UI State
    pub theme: Theme,
    pub message_overlay: MessageOverlay,

    // Modals
    pub modals: Modals,

    // External Services
    pub source_online: bool,
    last_source_check: Option<Instant>,
    load_tracker: LoadTracker,
    task_manager: TaskManager,
}

impl ArcanaApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let task_manager = TaskManager::new();

        let settings_data = load_json_or_default::<SettingsData>(SETTINGS_FILE);

        let mut app = Self {
            deck_state: DeckState::new(),
            settings_data,
            theme: Theme::moonlight(),
            message_overlay: MessageOverlay::new(),
            modals: Modals::default(),
            source_online: false,
            last_source_check: None,
            load_tracker: LoadTracker::new(),
            task_manager,
        };

        set_theme(&cc.egui_ctx, app.theme.clone());

        cc.egui_ctx.set_theme(if app.settings_data.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        // First fetch happens behind the loading overlay.
        app.start_load();

        app
    }

    fn source_config(&self) -> SourceConfig {
        SourceConfig {
            drop_missing_images: self.settings_data.drop_missing_images,
            ..SourceConfig::default()
        }
    }

    /// Kicks off a deck load unless one is already in flight; overlapping
    /// refresh requests coalesce into the outstanding one.
    fn start_load(&mut self) {
        if self.load_tracker.is_loading() {
            return;
        }

        let seq = self.task_manager.load_deck(self.source_config());
        self.load_tracker.begin(seq);

        if !self.deck_state.has_deck() {
            self.message_overlay.set_message("Loading deck...".to_string());
        }
    }

    fn draw_card(&mut self) {
        if self.settings_data.remote_random_draw {
            if let Some(endpoint) =
                default_endpoints().into_iter().find(|endpoint| endpoint.random_url.is_some())
            {
                self.task_manager.draw_remote_card(endpoint);
                return;
            }
            log::warn!("No endpoint offers a random card URL; drawing locally instead");
        }

        let drawn = self.deck_state.draw_random().map(|card| card.clone());
        match drawn {
            Ok(card) => self.modals.card.show_card(card, true),
            Err(e) => {
                self.modals.error.show_reload_prompt(
                    "Empty Deck",
                    format!("{}. Reload the deck before drawing a card.", e),
                );
            }
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::DeckLoaded { seq, result } => {
                if !self.load_tracker.accept(seq) {
                    // A newer reload was initiated while this one was in
                    // flight; its response must not overwrite the fresher one.
                    log::info!("Discarding stale deck load result (seq {})", seq);
                    return;
                }

                self.message_overlay.clear_message();

                match result {
                    Ok(load) => {
                        let warning = load.warning();
                        let details = load.failure_details();

                        self.source_online = load.deck.source != EMBEDDED_SOURCE;
                        log::info!(
                            "Deck loaded: {} cards from {}",
                            load.deck.len(),
                            load.deck.source
                        );
                        self.deck_state.replace_deck(load.deck);

                        if let Some(warning) = warning {
                            self.modals.error.show_error(
                                "Card Source Unavailable",
                                warning,
                                Some(details),
                            );
                        }
                    }
                    Err(e) => {
                        self.source_online = false;
                        self.modals.error.show_reload_prompt("Deck Load Failed", e.to_string());
                    }
                }
            }

            TaskResult::RandomCard(result) => {
                self.message_overlay.clear_message();
                match result {
                    Ok(card) => self.modals.card.show_card(card, true),
                    Err(e) => {
                        self.modals.error.show_error("Draw Failed", e.to_string(), None::<String>);
                    }
                }
            }

            TaskResult::SourceStatus(online) => {
                self.source_online = online;
            }

            TaskResult::LoadingMessage(message) => {
                self.message_overlay.set_message(message);
            }
        }
    }

    fn update_source_status(&mut self) {
        let due = self
            .last_source_check
            .map_or(true, |checked| checked.elapsed() >= SOURCE_CHECK_INTERVAL);

        if due {
            if let Some(endpoint) = self.source_config().endpoints.into_iter().next() {
                self.task_manager.check_source(endpoint);
            }
            self.last_source_check = Some(Instant::now());
        }
    }

    /// The top-bar theme switch flips egui's theme; mirror it into settings so
    /// the preference survives restarts.
    fn sync_theme_preference(&mut self, ctx: &egui::Context) {
        let dark = ctx.theme() == egui::Theme::Dark;
        if dark != self.settings_data.dark_mode {
            self.settings_data.dark_mode = dark;
            self.save_settings();
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            log::warn!("Failed to save settings: {}", e);
        }
    }
}

impl eframe::App for ArcanaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let task_results = self.task_manager.poll_results();

        for result in task_results {
            self.handle_task_result(result);
        }

        self.update_source_status();
        self.sync_theme_preference(ctx);

        let deck_summary = self.deck_state.deck().map(|deck| {
            format!("{} cards · {}", deck.len(), deck.source)
        });

        let refreshing = self.load_tracker.is_loading() && self.deck_state.has_deck();

        if let Some(action) = TopBar::show(
            ctx,
            !self.load_tracker.is_loading(),
            refreshing,
            deck_summary,
            self.source_online,
        ) {
            match action {
                TopBarAction::Refresh => self.start_load(),
                TopBarAction::DrawCard => self.draw_card(),
                TopBarAction::OpenSettings => {
                    self.modals.settings.open_settings(self.settings_data.clone());
                }
            }
        }

        let table_actions = card_table(ctx, self);
        for action in table_actions {
            match action {
                TableAction::SetSearch(query) => self.deck_state.set_query(query),
                TableAction::OpenCard(card) => self.modals.card.show_card(card, false),
                TableAction::Reload => self.start_load(),
            }
        }

        self.message_overlay.show(ctx, &self.theme);

        if let Some(choice) = self.modals.error.show(ctx) {
            if matches!(choice, ErrorChoice::Reload) {
                self.start_load();
            }
        }

        if let Some(action) = self.modals.card.show(ctx, &self.theme) {
            match action {
                CardModalAction::DrawAgain => self.draw_card(),
            }
        }

        if let Some(settings) = self.modals.settings.show(ctx) {
            let needs_reload =
                settings.drop_missing_images != self.settings_data.drop_missing_images;

            self.settings_data = settings;
            self.save_settings();

            if needs_reload {
                // The image filter applies at normalization time, so the deck
                // has to be fetched again.
                self.start_load();
            }
        }

        if self.load_tracker.is_loading() || self.message_overlay.active {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
