use eframe::egui;
use rand::Rng;

use super::{
    expression_panel::{
        self,
        ExpressionState,
    },
    flashcard_panel::{
        self,
        FlashcardAction,
    },
    home_panel,
    settings::{
        SettingsData,
        SETTINGS_FILE,
    },
    settings_modal::SettingsModal,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    core::tasks::{
        TaskManager,
        TaskResult,
    },
    expression::ExpressionProvider,
    flashcards::{
        dataset,
        FlashcardSession,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

/// The three mutually exclusive top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Expression,
    Flashcards,
}

pub struct CoachApp {
    // Configuration
    settings_data: SettingsData,

    // View state
    view: View,
    expression_state: ExpressionState,
    flashcards: FlashcardSession,

    // UI chrome
    theme: Theme,
    settings_modal: SettingsModal,

    // External services
    provider: Option<ExpressionProvider>,
    task_manager: TaskManager,
}

impl CoachApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_data = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        let app = Self::with_settings(settings_data);

        set_theme(&cc.egui_ctx, &app.theme);
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);

        cc.egui_ctx.set_theme(if app.settings_data.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = if app.settings_data.dark_mode {
                egui::ThemePreference::Dark
            } else {
                egui::ThemePreference::Light
            };
        });

        app
    }

    fn with_settings(settings_data: SettingsData) -> Self {
        let deck = dataset::load_bundled().expect("bundled vocabulary dataset is valid JSON");
        let provider = Self::build_provider(&settings_data);

        Self {
            settings_data,
            view: View::Home,
            expression_state: ExpressionState::Idle,
            flashcards: FlashcardSession::new(deck),
            theme: Theme::dracula(),
            settings_modal: SettingsModal::new(),
            provider,
            task_manager: TaskManager::new(),
        }
    }

    fn build_provider(settings: &SettingsData) -> Option<ExpressionProvider> {
        match ExpressionProvider::new(settings.provider_config()) {
            Ok(provider) => Some(provider),
            Err(e) => {
                eprintln!("Failed to build expression client: {}", e);
                None
            }
        }
    }

    /// Switches views. First entry into a feature view kicks off its
    /// initial content; returning to it later preserves state, and
    /// reselecting the active view does nothing.
    pub fn select_view(&mut self, view: View) {
        if self.view == view {
            return;
        }
        self.view = view;

        match view {
            View::Expression => {
                if matches!(self.expression_state, ExpressionState::Idle) {
                    self.generate_expression();
                }
            }
            View::Flashcards => {
                if !self.flashcards.has_card() {
                    self.flashcards.draw_card(&mut rand::rng());
                }
            }
            View::Home => {}
        }
    }

    fn generate_expression(&mut self) {
        match &self.provider {
            Some(provider) => {
                self.expression_state = ExpressionState::Loading;
                self.task_manager.fetch_expression(provider.clone());
            }
            None => {
                // Defensive: only reachable when the HTTP client could
                // not be constructed at all.
                self.expression_state = ExpressionState::Failed(
                    "The expression client could not be started. Check the API settings and try again."
                        .to_string(),
                );
            }
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::ExpressionFetched(fetch) => {
                self.expression_state = ExpressionState::Ready(fetch);
            }
        }
    }

    fn apply_flashcard_action(&mut self, action: FlashcardAction, rng: &mut impl Rng) {
        match action {
            FlashcardAction::Reveal => self.flashcards.reveal(),
            FlashcardAction::Feedback(remembered) => {
                self.flashcards.record_feedback(remembered, rng)
            }
            FlashcardAction::NextCard => self.flashcards.draw_card(rng),
            FlashcardAction::ResetTally => self.flashcards.reset_tally(),
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}

impl eframe::App for CoachApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        // Keep repainting while a fetch is in flight so its result is
        // applied promptly.
        if matches!(self.expression_state, ExpressionState::Loading) {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        let dark_mode = ctx.style().visuals.dark_mode;
        if dark_mode != self.settings_data.dark_mode {
            self.settings_data.dark_mode = dark_mode;
            self.save_settings();
        }

        let api_configured = self.provider.as_ref().is_some_and(|p| p.has_credential());

        if let Some(view) =
            TopBar::show(ctx, self.view, &mut self.settings_modal, &self.settings_data, api_configured)
        {
            self.select_view(view);
        }

        if let Some(settings) = self.settings_modal.show(ctx) {
            self.settings_data = settings;
            self.provider = Self::build_provider(&self.settings_data);
            self.save_settings();
        }

        let mut nav = None;
        let mut generate_clicked = false;
        let mut flashcard_action = None;

        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            View::Home => nav = home_panel::show(ui, &self.theme),
            View::Expression => {
                generate_clicked = expression_panel::show(ui, &self.expression_state, &self.theme)
            }
            View::Flashcards => {
                flashcard_action = flashcard_panel::show(ui, &self.flashcards, &self.theme)
            }
        });

        if let Some(view) = nav {
            self.select_view(view);
        }
        if generate_clicked {
            self.generate_expression();
        }
        if let Some(action) = flashcard_action {
            self.apply_flashcard_action(action, &mut rand::rng());
        }
    }
}
