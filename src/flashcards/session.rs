use rand::Rng;

use super::dataset::VocabularyEntry;

/// Reveal state of the current card. One-way per card; drawing a new
/// card resets to Hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Hidden,
    Revealed,
}

/// Session-only recall counters. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTally {
    pub correct: u32,
    pub total: u32,
}

impl SessionTally {
    /// Integer percent, 0 when nothing has been answered yet.
    pub fn accuracy_percent(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            (100.0 * self.correct as f64 / self.total as f64).round() as u32
        }
    }
}

/// Drives the flashcard view: a fixed deck, one current card, its
/// reveal state, and the running tally.
///
/// Draws are independent uniform samples, so consecutive cards may
/// repeat. The rng is passed in so tests can seed it.
pub struct FlashcardSession {
    deck: Vec<VocabularyEntry>,
    current: Option<usize>,
    state: CardState,
    tally: SessionTally,
}

impl FlashcardSession {
    pub fn new(deck: Vec<VocabularyEntry>) -> Self {
        Self { deck, current: None, state: CardState::Hidden, tally: SessionTally::default() }
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn has_card(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_card(&self) -> Option<&VocabularyEntry> {
        self.current.and_then(|index| self.deck.get(index))
    }

    pub fn card_state(&self) -> CardState {
        self.state
    }

    pub fn tally(&self) -> SessionTally {
        self.tally
    }

    pub fn draw_card(&mut self, rng: &mut impl Rng) {
        if self.deck.is_empty() {
            self.current = None;
        } else {
            self.current = Some(rng.random_range(0..self.deck.len()));
        }
        self.state = CardState::Hidden;
    }

    /// Hidden -> Revealed; calling again while Revealed is a no-op.
    pub fn reveal(&mut self) {
        if self.has_card() {
            self.state = CardState::Revealed;
        }
    }

    /// Records self-reported recall and draws the next card. Only
    /// defined from Revealed; ignored before the card is revealed.
    pub fn record_feedback(&mut self, remembered: bool, rng: &mut impl Rng) {
        if self.state != CardState::Revealed {
            return;
        }

        self.tally.total += 1;
        if remembered {
            self.tally.correct += 1;
        }

        self.draw_card(rng);
    }

    /// Zeroes the tally without touching the current card or its
    /// reveal state.
    pub fn reset_tally(&mut self) {
        self.tally = SessionTally::default();
    }
}

#[cfg(test)]
mod tests {
    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;

    fn test_deck(size: usize) -> Vec<VocabularyEntry> {
        (0..size)
            .map(|i| VocabularyEntry {
                word: format!("word{}", i),
                phonetic: format!("/word{}/", i),
                mnemonic: format!("mnemonic{}", i),
                meaning: format!("meaning{}", i),
                explanation: format!("explanation{}", i),
            })
            .collect()
    }

    fn revealed_session(rng: &mut impl Rng) -> FlashcardSession {
        let mut session = FlashcardSession::new(test_deck(8));
        session.draw_card(rng);
        session.reveal();
        session
    }

    #[test]
    fn test_draw_stays_in_bounds_and_hides() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = FlashcardSession::new(test_deck(4));

        for _ in 0..100 {
            session.draw_card(&mut rng);
            assert!(session.current_index().unwrap() < 4);
            assert_eq!(session.card_state(), CardState::Hidden);
        }
    }

    #[test]
    fn test_feedback_tally_and_accuracy() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = revealed_session(&mut rng);

        session.record_feedback(true, &mut rng);
        session.reveal();
        session.record_feedback(false, &mut rng);

        assert_eq!(session.tally(), SessionTally { correct: 1, total: 2 });
        assert_eq!(session.tally().accuracy_percent(), 50);
    }

    #[test]
    fn test_feedback_before_reveal_is_ignored() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = FlashcardSession::new(test_deck(8));
        session.draw_card(&mut rng);

        let before = session.current_index();
        session.record_feedback(true, &mut rng);

        assert_eq!(session.tally(), SessionTally::default());
        assert_eq!(session.current_index(), before);
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = FlashcardSession::new(test_deck(8));
        session.draw_card(&mut rng);

        assert_eq!(session.card_state(), CardState::Hidden);
        session.reveal();
        assert_eq!(session.card_state(), CardState::Revealed);
        session.reveal();
        assert_eq!(session.card_state(), CardState::Revealed);
    }

    #[test]
    fn test_reset_tally_keeps_current_card() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut session = revealed_session(&mut rng);
        session.record_feedback(true, &mut rng);
        session.reveal();

        let index = session.current_index();
        session.reset_tally();

        assert_eq!(session.tally(), SessionTally::default());
        assert_eq!(session.tally().accuracy_percent(), 0);
        assert_eq!(session.current_index(), index);
        assert_eq!(session.card_state(), CardState::Revealed);
    }

    #[test]
    fn test_empty_deck_never_holds_a_card() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut session = FlashcardSession::new(Vec::new());

        session.draw_card(&mut rng);
        assert!(!session.has_card());
        assert!(session.current_card().is_none());

        // Reveal and feedback stay no-ops without a card.
        session.reveal();
        assert_eq!(session.card_state(), CardState::Hidden);
        session.record_feedback(true, &mut rng);
        assert_eq!(session.tally(), SessionTally::default());
    }
}
