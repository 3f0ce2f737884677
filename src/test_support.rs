//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::io;

use crate::core::deck::{DEFAULT_DECK, Deck};
use crate::core::state::Presenter;
use crate::core::surface::DisplaySurface;

/// A surface that counts requests instead of touching a real display.
#[derive(Default)]
pub struct RecordingSurface {
    pub requests: usize,
    pub exits: usize,
    pub fullscreen: bool,
    /// When set, every request fails and the surface stays windowed.
    pub reject: bool,
}

impl RecordingSurface {
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Default::default()
        }
    }
}

impl DisplaySurface for RecordingSurface {
    fn request_fullscreen(&mut self) -> io::Result<()> {
        self.requests += 1;
        if self.reject {
            return Err(io::Error::other("fullscreen not permitted"));
        }
        self.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> io::Result<()> {
        self.exits += 1;
        self.fullscreen = false;
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}

/// A deck of `count` slides titled "Slide 1", "Slide 2", ...
pub fn deck_with(count: usize) -> Deck {
    let source = (1..=count)
        .map(|i| format!("# Slide {i}\n\nBody of slide {i}."))
        .collect::<Vec<_>>()
        .join("\n---\n");
    Deck::parse(&source).unwrap()
}

pub fn presenter_with(count: usize) -> Presenter {
    Presenter::new(deck_with(count))
}

/// Presenter over the built-in 24-slide orientation deck.
pub fn orientation_presenter() -> Presenter {
    Presenter::new(Deck::builtin(DEFAULT_DECK).unwrap())
}
