//! # Actions
//!
//! Everything that can happen in a presentation becomes an `Action`.
//! User presses →? That's `Action::Advance`.
//! Clicks the fullscreen button? That's `Action::ToggleFullscreen`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing what the adapter has to do
//! next. No I/O happens in `update()`.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! `dispatch()` is the thin layer on top that carries out fullscreen effects
//! against a `DisplaySurface` and feeds failures back in as actions.

use log::{debug, info, warn};

use crate::core::state::Presenter;
use crate::core::surface::DisplaySurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Advance,
    Retreat,
    First,
    Last,
    ToggleFullscreen,
    /// The host reports its actual fullscreen state.
    FullscreenChanged(bool),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    SlideChanged { from: usize, to: usize },
    RequestFullscreen,
    ExitFullscreen,
    Quit,
}

pub fn update(presenter: &mut Presenter, action: Action) -> Effect {
    let from = presenter.current_index();
    match action {
        Action::Advance | Action::Retreat | Action::First | Action::Last => {
            let moved = match action {
                Action::Advance => presenter.advance(),
                Action::Retreat => presenter.retreat(),
                Action::First => presenter.first(),
                _ => presenter.last(),
            };
            if moved {
                let to = presenter.current_index();
                debug!("{:?}: slide {} -> {}", action, from, to);
                Effect::SlideChanged { from, to }
            } else {
                debug!("{:?} clamped at slide {}", action, from);
                Effect::None
            }
        }
        Action::ToggleFullscreen => {
            // Optimistic: the flag flips before the host confirms anything
            if presenter.is_fullscreen() {
                presenter.set_fullscreen(false);
                Effect::ExitFullscreen
            } else {
                presenter.set_fullscreen(true);
                Effect::RequestFullscreen
            }
        }
        Action::FullscreenChanged(actual) => {
            if presenter.is_fullscreen() != actual {
                info!("Fullscreen flag resynced with host: {}", actual);
                presenter.set_fullscreen(actual);
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Run `update()` and carry out any fullscreen effect on `surface`.
///
/// A toggle first syncs the flag with the surface, so a host that left
/// fullscreen on its own gets a request rather than a second exit. A failed
/// request is logged and the flag is reconciled again afterwards. Slide and
/// quit effects are returned untouched for the caller to handle.
pub fn dispatch(
    presenter: &mut Presenter,
    surface: &mut dyn DisplaySurface,
    action: Action,
) -> Effect {
    if action == Action::ToggleFullscreen {
        reconcile(presenter, surface);
    }
    let effect = update(presenter, action);
    let result = match effect {
        Effect::RequestFullscreen => surface.request_fullscreen(),
        Effect::ExitFullscreen => surface.exit_fullscreen(),
        _ => return effect,
    };

    if let Err(e) = result {
        warn!("Fullscreen {:?} failed: {}", effect, e);
    }
    reconcile(presenter, surface);
    effect
}

fn reconcile(presenter: &mut Presenter, surface: &dyn DisplaySurface) {
    let actual = surface.is_fullscreen();
    if actual != presenter.is_fullscreen() {
        update(presenter, Action::FullscreenChanged(actual));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingSurface, orientation_presenter, presenter_with};

    #[test]
    fn test_advance_emits_slide_changed() {
        let mut presenter = presenter_with(3);
        assert_eq!(
            update(&mut presenter, Action::Advance),
            Effect::SlideChanged { from: 0, to: 1 }
        );
    }

    #[test]
    fn test_clamped_navigation_emits_nothing() {
        let mut presenter = presenter_with(3);
        assert_eq!(update(&mut presenter, Action::Retreat), Effect::None);
        assert_eq!(update(&mut presenter, Action::First), Effect::None);
        update(&mut presenter, Action::Last);
        assert_eq!(update(&mut presenter, Action::Advance), Effect::None);
        assert_eq!(presenter.current_index(), 2);
    }

    #[test]
    fn test_twenty_three_advances_reach_the_end() {
        let mut presenter = orientation_presenter();
        for _ in 0..23 {
            update(&mut presenter, Action::Advance);
        }
        assert_eq!(presenter.current_index(), 23);
        assert!(!presenter.can_advance());
        assert!((presenter.progress() - 1.0).abs() < f64::EPSILON);

        assert_eq!(update(&mut presenter, Action::Advance), Effect::None);
        assert_eq!(presenter.current_index(), 23);
    }

    #[test]
    fn test_toggle_flips_flag_optimistically() {
        let mut presenter = presenter_with(1);
        assert_eq!(
            update(&mut presenter, Action::ToggleFullscreen),
            Effect::RequestFullscreen
        );
        assert!(presenter.is_fullscreen());
        assert_eq!(
            update(&mut presenter, Action::ToggleFullscreen),
            Effect::ExitFullscreen
        );
        assert!(!presenter.is_fullscreen());
    }

    #[test]
    fn test_dispatch_issues_exactly_one_request_per_toggle() {
        let mut presenter = presenter_with(1);
        let mut surface = RecordingSurface::default();

        dispatch(&mut presenter, &mut surface, Action::ToggleFullscreen);
        assert!(presenter.is_fullscreen());
        assert_eq!(surface.requests, 1);
        assert_eq!(surface.exits, 0);

        dispatch(&mut presenter, &mut surface, Action::ToggleFullscreen);
        assert!(!presenter.is_fullscreen());
        assert_eq!(surface.requests, 1);
        assert_eq!(surface.exits, 1);
    }

    #[test]
    fn test_rejected_request_resyncs_flag() {
        let mut presenter = presenter_with(1);
        let mut surface = RecordingSurface::rejecting();

        let effect = dispatch(&mut presenter, &mut surface, Action::ToggleFullscreen);
        assert_eq!(effect, Effect::RequestFullscreen);
        assert_eq!(surface.requests, 1);
        assert!(!presenter.is_fullscreen());
    }

    #[test]
    fn test_host_exit_is_picked_up_before_next_toggle() {
        let mut presenter = presenter_with(1);
        let mut surface = RecordingSurface::default();
        dispatch(&mut presenter, &mut surface, Action::ToggleFullscreen);

        // Host left fullscreen on its own; nobody told the presenter
        surface.fullscreen = false;
        assert!(presenter.is_fullscreen());

        // The next toggle requests again instead of exiting
        let effect = dispatch(&mut presenter, &mut surface, Action::ToggleFullscreen);
        assert_eq!(effect, Effect::RequestFullscreen);
        assert_eq!(surface.requests, 2);
        assert_eq!(surface.exits, 0);
        assert!(presenter.is_fullscreen());
    }

    #[test]
    fn test_host_entry_is_picked_up_before_next_toggle() {
        let mut presenter = presenter_with(1);
        let mut surface = RecordingSurface::default();

        // Host went fullscreen without a request from us
        surface.fullscreen = true;
        let effect = dispatch(&mut presenter, &mut surface, Action::ToggleFullscreen);
        assert_eq!(effect, Effect::ExitFullscreen);
        assert_eq!((surface.requests, surface.exits), (0, 1));
        assert!(!presenter.is_fullscreen());
    }

    #[test]
    fn test_dispatch_leaves_navigation_to_caller() {
        let mut presenter = presenter_with(2);
        let mut surface = RecordingSurface::default();
        let effect = dispatch(&mut presenter, &mut surface, Action::Advance);
        assert_eq!(effect, Effect::SlideChanged { from: 0, to: 1 });
        assert_eq!(surface.requests + surface.exits, 0);
        assert_eq!(dispatch(&mut presenter, &mut surface, Action::Quit), Effect::Quit);
    }
}
