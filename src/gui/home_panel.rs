use eframe::egui;

use super::{
    app::View,
    theme::Theme,
};

/// Landing page. Purely presentational; returns the view the user
/// jumped to, if any.
pub fn show(ui: &mut egui::Ui, theme: &Theme) -> Option<View> {
    let mut selected = None;

    ui.vertical_centered(|ui| {
        ui.add_space(70.0);
        ui.heading(theme.heading(ui.ctx(), "Natively").size(32.0));
        ui.add_space(6.0);
        ui.label("Learn how native speakers really talk.");
        ui.add_space(40.0);

        if ui.button("Expression coach").clicked() {
            selected = Some(View::Expression);
        }
        ui.small("Direct translation vs the native way to say it");

        ui.add_space(20.0);

        if ui.button("Mnemonic flashcards").clicked() {
            selected = Some(View::Flashcards);
        }
        ui.small("记单词 with Chinese homophone hints");
    });

    selected
}
