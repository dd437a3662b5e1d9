use eframe::egui::{
    self,
    RichText,
    Stroke,
};

use super::theme::Theme;
use crate::expression::{
    ExpressionFetch,
    ExpressionSource,
};

/// Lifecycle of the expression view. Idle only exists before the view
/// is first entered; entering it kicks off a generate.
#[derive(Debug, Clone)]
pub enum ExpressionState {
    Idle,
    Loading,
    Ready(ExpressionFetch),
    Failed(String),
}

/// Draws the comparison view. Returns true when the user asked for a
/// new expression (generate or retry).
pub fn show(ui: &mut egui::Ui, state: &ExpressionState, theme: &Theme) -> bool {
    let mut generate_clicked = false;

    ui.vertical_centered(|ui| {
        ui.add_space(20.0);

        match state {
            ExpressionState::Idle | ExpressionState::Loading => {
                ui.add_space(60.0);
                ui.add(egui::Spinner::new().size(40.0));
                ui.add_space(10.0);
                ui.label("Generating your lesson...");
                ui.add_space(20.0);
                let _ = ui.add_enabled(false, egui::Button::new("Generate new lesson"));
            }

            ExpressionState::Ready(fetch) => {
                show_comparison(ui, fetch, theme);
                ui.add_space(25.0);
                if ui.button("Generate new lesson").clicked() {
                    generate_clicked = true;
                }
            }

            ExpressionState::Failed(message) => {
                ui.add_space(50.0);
                ui.colored_label(theme.orange(ui.ctx()), "Something went wrong");
                ui.add_space(5.0);
                ui.label(message);
                ui.add_space(20.0);
                if ui.button("Try again").clicked() {
                    generate_clicked = true;
                }
            }
        }
    });

    generate_clicked
}

fn show_comparison(ui: &mut egui::Ui, fetch: &ExpressionFetch, theme: &Theme) {
    let ctx = ui.ctx().clone();
    let expression = &fetch.expression;

    let source_label = match fetch.source {
        ExpressionSource::Generated => RichText::new("AI generated").color(theme.cyan(&ctx)),
        ExpressionSource::Fallback => {
            RichText::new("built-in example").color(theme.comment(&ctx))
        }
    };

    ui.horizontal_wrapped(|ui| {
        ui.add_space(ui.available_width() / 2.0 - 80.0);
        ui.label(RichText::new(&expression.category).color(theme.purple(&ctx)).small());
        ui.small("•");
        ui.label(source_label.small());
    });

    ui.add_space(8.0);
    ui.heading(theme.heading(&ctx, &expression.topic).size(24.0));
    ui.label(RichText::new(&expression.context).italics().color(theme.comment(&ctx)));
    ui.add_space(20.0);

    phrase_card(ui, "Direct translation", &expression.direct_expression, theme.red(&ctx));

    ui.add_space(8.0);
    ui.label(RichText::new("VS").strong());
    ui.add_space(8.0);

    phrase_card(ui, "Native expression", &expression.native_expression, theme.green(&ctx));
}

fn phrase_card(ui: &mut egui::Ui, title: &str, phrase: &str, accent: egui::Color32) {
    let frame = egui::Frame::group(ui.style())
        .stroke(Stroke::new(1.5, accent))
        .inner_margin(egui::Margin::same(14));

    frame.show(ui, |ui| {
        ui.set_width(ui.available_width().min(420.0));
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(title).color(accent).strong());
            ui.add_space(6.0);
            ui.label(RichText::new(format!("\u{201c}{}\u{201d}", phrase)).size(18.0));
        });
    });
}
