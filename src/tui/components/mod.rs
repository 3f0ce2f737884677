//! # TUI Components
//!
//! The pieces of the presenter screen. All of them are stateless: they get
//! their data as "props" (struct fields) from `ui::draw_ui` and draw into the
//! `Rect` they are given. The one exception is `SlideView`, which borrows the
//! scroll offset mutably so it can clamp it during the render pass.
//!
//! ```text
//! ╭──────────────────────────────────────────────────────╮
//! │━━━━━━━━━━━━━━━━───────────────────────────────────────│  ProgressBar
//! │▌더국제  VOCATIONAL COLLEGE               slide title │  TitleBar
//! │                                                      │
//! │                 slide body (markdown)                │  SlideView
//! │                                                      │
//! │             PROGRESS 03 / 24  [ ‹ ] [ › ] [ ⤢ ]      │  Controls
//! ╰──────────────────────────────────────────────────────╯
//!   [SPACE/ARROWS] NAVIGATE · [F] FULLSCREEN · [Q] QUIT     HelpBar
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── progress_bar.rs  (animated deck progress)
//! ├── title_bar.rs     (brand + slide title)
//! ├── slide_view.rs    (markdown body, transition styling, scroll)
//! ├── controls.rs      (page readout, buttons, click hit-testing)
//! └── help_bar.rs      (key hints, windowed mode only)
//! ```

mod controls;
mod help_bar;
mod progress_bar;
mod slide_view;
mod title_bar;

pub use controls::{ControlButton, Controls, button_at};
pub use help_bar::HelpBar;
pub use progress_bar::ProgressBar;
pub use slide_view::SlideView;
pub use title_bar::TitleBar;
