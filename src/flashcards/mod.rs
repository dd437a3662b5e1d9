pub mod dataset;
pub mod session;

pub use dataset::VocabularyEntry;
pub use session::{
    CardState,
    FlashcardSession,
    SessionTally,
};
