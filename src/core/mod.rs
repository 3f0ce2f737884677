//! # Core Presentation Logic
//!
//! This module contains Lectern's navigation logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Deck (slides)        │
//!                    │  • Presenter (state)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────────┐
//!             │    TUI     │          │ DisplaySurface │
//!             │  Adapter   │─────────▶│  (fullscreen)  │
//!             │ (ratatui)  │          │                │
//!             └────────────┘          └────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`deck`]: The `Deck`: slides parsed from Markdown
//! - [`state`]: The `Presenter`: current index and fullscreen flag
//! - [`action`]: The `Action` enum, the `update()` reducer and `dispatch()`
//! - [`surface`]: The `DisplaySurface` trait for the host display
//! - [`config`]: Settings resolution

pub mod action;
pub mod config;
pub mod deck;
pub mod state;
pub mod surface;
