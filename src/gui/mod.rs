pub mod app;
pub mod expression_panel;
pub mod flashcard_panel;
pub mod home_panel;
pub mod settings;
pub mod settings_modal;
pub mod theme;
pub mod top_bar;

pub use app::{
    CoachApp,
    View,
};
