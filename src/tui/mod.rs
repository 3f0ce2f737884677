//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the presenter
//! screen, and translates keyboard and mouse events into `core::Action`
//! values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (slide transition or progress tween running): draws every
//!   ~16ms so the easing curve reads smoothly.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! One extra frame is drawn after an animation ends so the settled slide is
//! what stays on screen.

pub mod component;
mod components;
mod event;
pub mod markdown;
mod surface;
pub mod theme;
pub mod transition;
mod ui;

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::{debug, info};
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, dispatch};
use crate::core::config::ResolvedConfig;
use crate::core::deck::Deck;
use crate::core::state::Presenter;
use crate::core::surface::DisplaySurface;
use crate::tui::components::ControlButton;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::surface::TerminalSurface;
use crate::tui::theme::Palette;
use crate::tui::transition::{ProgressTween, SlideAnimator, SlideFrame};

const ANIMATING_POLL: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core navigation logic)
pub struct TuiState {
    pub animator: SlideAnimator,
    pub progress: ProgressTween,
    /// Vertical scroll of the visible slide; clamped while rendering.
    pub scroll: u16,
    /// Index of the slide the animator showed last frame.
    shown: usize,
    pub palette: Palette,
    pub brand_name: String,
    pub brand_tagline: String,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig, presenter: &Presenter, now: Instant) -> Self {
        Self {
            animator: SlideAnimator::new(
                config.transition_style,
                config.transition_duration,
                presenter.current_index(),
            ),
            progress: ProgressTween::new(presenter.progress(), config.progress_duration, now),
            scroll: 0,
            shown: presenter.current_index(),
            palette: Palette::default(),
            brand_name: config.brand_name.clone(),
            brand_tagline: config.brand_tagline.clone(),
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.animator.is_animating() || self.progress.is_animating(now)
    }

    /// Start whatever presentation the effect calls for.
    fn apply(&mut self, effect: Effect, presenter: &Presenter, now: Instant) {
        if let Effect::SlideChanged { from, to } = effect {
            self.animator.start(from, to, now);
            self.progress.set_target(presenter.progress(), now);
        }
    }

    /// The animator's frame for `now`. Scrolling starts over from the top
    /// whenever a different slide comes on screen.
    pub fn visible_frame(&mut self, now: Instant) -> SlideFrame {
        let frame = self.animator.frame(now);
        if frame.index != self.shown {
            self.shown = frame.index;
            self.scroll = 0;
        }
        frame
    }
}

/// Mouse capture and a hidden cursor for the lifetime of the presentation.
struct InputBindings;

impl InputBindings {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for InputBindings {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
        info!("Terminal modes restored");
    }
}

/// Feed one input event through the presenter.
///
/// `frame_area` is the terminal area the last frame was laid out in, used to
/// hit-test clicks. Returns `true` when the presentation should end.
fn handle_event(
    event: TuiEvent,
    presenter: &mut Presenter,
    surface: &mut dyn DisplaySurface,
    tui: &mut TuiState,
    frame_area: Rect,
    now: Instant,
) -> bool {
    let action = match event {
        TuiEvent::Advance => Action::Advance,
        TuiEvent::Retreat => Action::Retreat,
        TuiEvent::First => Action::First,
        TuiEvent::Last => Action::Last,
        TuiEvent::ToggleFullscreen => Action::ToggleFullscreen,
        TuiEvent::Quit => Action::Quit,
        TuiEvent::ScrollUp => {
            tui.scroll = tui.scroll.saturating_sub(1);
            return false;
        }
        TuiEvent::ScrollDown => {
            tui.scroll = tui.scroll.saturating_add(1);
            return false;
        }
        TuiEvent::Click(column, row) => {
            match ui::hit_test_controls(frame_area, presenter.is_fullscreen(), column, row) {
                Some(ControlButton::Previous) => Action::Retreat,
                Some(ControlButton::Next) => Action::Advance,
                Some(ControlButton::Fullscreen) => Action::ToggleFullscreen,
                None => return false,
            }
        }
        // Resize just needs a redraw
        TuiEvent::Resize => return false,
    };

    let effect = dispatch(presenter, surface, action);
    debug!("{:?} -> {:?}", action, effect);
    tui.apply(effect, presenter, now);
    effect == Effect::Quit
}

pub fn run(config: ResolvedConfig, deck: Deck) -> io::Result<()> {
    let mut presenter = Presenter::new(deck);
    let mut tui = TuiState::new(&config, &presenter, Instant::now());

    let mut terminal = ratatui::init();
    let result = InputBindings::new().and_then(|_guard| {
        let mut surface = TerminalSurface::new(stdout());
        if config.start_fullscreen {
            dispatch(&mut presenter, &mut surface, Action::ToggleFullscreen);
        }
        present(&mut terminal, &mut presenter, &mut surface, &mut tui)
    });
    ratatui::restore();
    result
}

fn present(
    terminal: &mut DefaultTerminal,
    presenter: &mut Presenter,
    surface: &mut dyn DisplaySurface,
    tui: &mut TuiState,
) -> io::Result<()> {
    info!(
        "Presenting {} slides (fullscreen: {})",
        presenter.slide_count(),
        presenter.is_fullscreen()
    );
    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        let animating = tui.is_animating(now);

        if animating || needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, presenter, tui, now))?;
            // Keep going one frame past the end of an animation
            needs_redraw = animating;
        }

        let timeout = if animating { ANIMATING_POLL } else { IDLE_POLL };
        let mut next = poll_event_timeout(timeout)?;
        if next.is_some() {
            needs_redraw = true;
        }

        // Drain every pending event before the next draw
        while let Some(event) = next {
            let frame_area = terminal.get_frame().area();
            if handle_event(event, presenter, surface, tui, frame_area, Instant::now()) {
                info!("Presentation ended on slide {}", presenter.current_index() + 1);
                return Ok(());
            }
            next = poll_event_immediate()?;
        }
    }
}
