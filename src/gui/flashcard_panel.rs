use eframe::egui::{
    self,
    RichText,
};

use super::theme::Theme;
use crate::flashcards::{
    CardState,
    FlashcardSession,
    VocabularyEntry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashcardAction {
    Reveal,
    Feedback(bool),
    NextCard,
    ResetTally,
}

/// Draws the flashcard view and returns the action the user took, if
/// any. All state changes happen in the caller.
pub fn show(
    ui: &mut egui::Ui,
    session: &FlashcardSession,
    theme: &Theme,
) -> Option<FlashcardAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.add_space(15.0);
        show_tally(ui, session, theme);
        ui.add_space(15.0);

        match session.current_card() {
            Some(card) => {
                show_card(ui, session, card, theme, &mut action);

                ui.add_space(25.0);
                ui.horizontal(|ui| {
                    ui.add_space(ui.available_width() / 2.0 - 110.0);
                    if ui.button("Draw another word").clicked() {
                        action = Some(FlashcardAction::NextCard);
                    }
                    if ui.button("Reset tally").clicked() {
                        action = Some(FlashcardAction::ResetTally);
                    }
                });
            }
            None => {
                ui.add_space(40.0);
                ui.label("No vocabulary loaded.");
            }
        }
    });

    action
}

fn show_tally(ui: &mut egui::Ui, session: &FlashcardSession, theme: &Theme) {
    let ctx = ui.ctx().clone();
    let tally = session.tally();

    ui.horizontal(|ui| {
        ui.add_space(ui.available_width() / 2.0 - 130.0);
        ui.label(RichText::new(tally.correct.to_string()).color(theme.purple(&ctx)).strong());
        ui.label("remembered");
        ui.separator();
        ui.label(RichText::new(tally.total.to_string()).strong());
        ui.label("total");
        ui.separator();
        ui.label(
            RichText::new(format!("{}%", tally.accuracy_percent()))
                .color(theme.green(&ctx))
                .strong(),
        );
        ui.label("accuracy");
    });
}

fn show_card(
    ui: &mut egui::Ui,
    session: &FlashcardSession,
    card: &VocabularyEntry,
    theme: &Theme,
    action: &mut Option<FlashcardAction>,
) {
    let ctx = ui.ctx().clone();

    ui.heading(theme.heading(&ctx, &card.word).size(34.0));
    ui.label(RichText::new(&card.phonetic).color(theme.comment(&ctx)));
    if let Some(index) = session.current_index() {
        ui.small(format!("card {} / {}", index + 1, session.deck_len()));
    }
    ui.add_space(18.0);

    match session.card_state() {
        CardState::Hidden => {
            ui.label("猜猜这个单词的意思？");
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("\u{201c}{}\u{201d}", card.mnemonic))
                    .color(theme.yellow(&ctx))
                    .size(22.0),
            );
            ui.add_space(15.0);
            if ui.button("查看答案").clicked() {
                *action = Some(FlashcardAction::Reveal);
            }
        }

        CardState::Revealed => {
            ui.label(RichText::new(&card.meaning).color(theme.green(&ctx)).size(24.0).strong());
            ui.add_space(6.0);
            ui.label(format!("谐音：\u{201c}{}\u{201d} → {}", card.mnemonic, card.meaning));
            ui.label(RichText::new(&card.explanation).italics().color(theme.comment(&ctx)));
            ui.add_space(15.0);

            ui.label("你记住这个单词了吗？");
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.add_space(ui.available_width() / 2.0 - 80.0);
                if ui.button(RichText::new("记住了").color(theme.green(&ctx))).clicked() {
                    *action = Some(FlashcardAction::Feedback(true));
                }
                if ui.button(RichText::new("没记住").color(theme.red(&ctx))).clicked() {
                    *action = Some(FlashcardAction::Feedback(false));
                }
            });
        }
    }
}
