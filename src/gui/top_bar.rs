use eframe::egui::{
    self,
    containers,
};

use super::{
    app::View,
    settings::SettingsData,
    settings_modal::SettingsModal,
};

pub struct TopBar;

impl TopBar {
    /// Draws the navigation bar. Returns the view the user selected,
    /// if any; reselecting the active view returns nothing.
    pub fn show(
        ctx: &egui::Context,
        active_view: View,
        settings_modal: &mut SettingsModal,
        current_settings: &SettingsData,
        api_configured: bool,
    ) -> Option<View> {
        let mut selected = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.separator();

                let views = [
                    (View::Home, "Home"),
                    (View::Expression, "Expressions"),
                    (View::Flashcards, "Flashcards"),
                ];

                for (view, label) in views {
                    let active = active_view == view;
                    if ui.selectable_label(active, label).clicked() && !active {
                        selected = Some(view);
                    }
                }

                ui.separator();

                ui.menu_button("Settings", |ui| {
                    if ui.button("API Settings").clicked() {
                        settings_modal.open_settings(current_settings.clone());
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicator(ui, api_configured);
                });
            });
        });

        selected
    }

    fn show_status_indicator(ui: &mut egui::Ui, api_configured: bool) {
        let color = if api_configured {
            egui::Color32::from_rgb(0, 200, 0)
        } else {
            egui::Color32::from_rgb(200, 80, 80)
        };

        let tooltip = if api_configured {
            "OpenRouter credential configured"
        } else {
            "No API credential set, using built-in expressions"
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("API").on_hover_text(tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
        });
    }
}
