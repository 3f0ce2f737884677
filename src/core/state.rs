//! # Presentation State
//!
//! Core navigation state for a presentation. Domain logic only, no
//! TUI-specific types. Presentation chrome (transitions, scroll offsets)
//! lives in the `tui` module.
//!
//! ```text
//! Presenter
//! ├── deck: Deck             // immutable slide registry (N slides)
//! ├── current_index: usize   // always in [0, N-1]
//! └── is_fullscreen: bool    // mirrors the last fullscreen request
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! Every navigation method clamps at the deck boundaries instead of failing.

use crate::core::deck::{Deck, Slide};

pub struct Presenter {
    deck: Deck,
    current_index: usize,
    is_fullscreen: bool,
}

impl Presenter {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            current_index: 0,
            is_fullscreen: false,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Number of slides, N. Never zero: `Deck` refuses to build empty.
    pub fn slide_count(&self) -> usize {
        self.deck.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.deck.get(self.current_index)
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    pub(crate) fn set_fullscreen(&mut self, fullscreen: bool) {
        self.is_fullscreen = fullscreen;
    }

    fn last_index(&self) -> usize {
        self.slide_count().saturating_sub(1)
    }

    /// Move forward one slide. Returns false (and does nothing) on the last slide.
    pub fn advance(&mut self) -> bool {
        if self.current_index < self.last_index() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// Move back one slide. Returns false (and does nothing) on the first slide.
    pub fn retreat(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    pub fn first(&mut self) -> bool {
        let moved = self.current_index != 0;
        self.current_index = 0;
        moved
    }

    pub fn last(&mut self) -> bool {
        let last = self.last_index();
        let moved = self.current_index != last;
        self.current_index = last;
        moved
    }

    pub fn can_retreat(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_advance(&self) -> bool {
        self.current_index < self.last_index()
    }

    /// Fraction of the deck viewed: `(current_index + 1) / N`, in `(0, 1]`.
    pub fn progress(&self) -> f64 {
        (self.current_index + 1) as f64 / self.slide_count() as f64
    }

    /// 1-based "XX / NN" readout, zero-padded to at least two digits.
    pub fn page_label(&self) -> String {
        self.page_label_at(self.current_index)
    }

    /// Readout for slide `index`, which may differ from the current slide
    /// while a transition is still showing the outgoing one.
    pub fn page_label_at(&self, index: usize) -> String {
        let total = self.slide_count();
        let width = total.to_string().len().max(2);
        format!("{:0width$} / {:0width$}", index + 1, total)
    }
}
