use eframe::egui;

use super::settings::SettingsData;

/// Modal editor for the OpenRouter credential and model id. Returns
/// the new settings from `show` when the user saves.
pub struct SettingsModal {
    open: bool,
    draft: SettingsData,
    original: SettingsData,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self { open: false, draft: SettingsData::default(), original: SettingsData::default() }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        self.draft = current_settings.clone();
        self.original = current_settings;
        self.open = true;
    }

    pub fn is_settings_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result: Option<SettingsData> = None;

        let modal = egui::Modal::new(egui::Id::new("api_settings_modal")).show(ctx, |ui| {
            ui.heading("API Settings");
            ui.add_space(10.0);

            egui::Grid::new("api_settings_grid").num_columns(2).spacing([10.0, 8.0]).show(
                ui,
                |ui| {
                    ui.label("OpenRouter API key");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.draft.api_key)
                            .password(true)
                            .desired_width(260.0),
                    );
                    ui.end_row();

                    ui.label("Model");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.draft.model).desired_width(260.0),
                    );
                    ui.end_row();
                },
            );

            ui.add_space(5.0);
            ui.weak("Leave the key empty to stay offline with the built-in example expressions.");
            ui.add_space(10.0);
            ui.separator();

            let is_dirty = self.draft != self.original;

            ui.horizontal(|ui| {
                let save_clicked =
                    ui.add_enabled(is_dirty, egui::Button::new("Save Settings")).clicked();
                let cancel_clicked = ui.button("Cancel").clicked();

                if save_clicked {
                    self.original = self.draft.clone();
                    result = Some(self.draft.clone());
                    ui.close();
                } else if cancel_clicked {
                    self.draft = self.original.clone();
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
