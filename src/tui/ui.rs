//! Screen layout and the top-level draw function.
//!
//! Windowed mode frames the slide in a rounded card with a margin around it
//! and the key hints underneath. Fullscreen mode drops the card, the margin
//! and the hints, and gives the slide the whole terminal.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType};

use crate::core::state::Presenter;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    ControlButton, Controls, HelpBar, ProgressBar, SlideView, TitleBar, button_at,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Card border, windowed mode only.
    pub card: Option<Rect>,
    pub progress: Rect,
    pub header: Rect,
    pub slide: Rect,
    pub controls: Rect,
    /// Key hints, windowed mode only.
    pub help: Option<Rect>,
}

pub fn screen_layout(area: Rect, fullscreen: bool) -> ScreenLayout {
    use Constraint::{Length, Min};

    let (card, content, help) = if fullscreen {
        (None, area, None)
    } else {
        let framed = area.inner(Margin::new(2, 1));
        let [card, help] = Layout::vertical([Min(0), Length(1)]).areas(framed);
        let inner = card_block().inner(card);
        (Some(card), inner, Some(help))
    };

    let [progress, header, _gap, slide, controls] =
        Layout::vertical([Length(1), Length(1), Length(1), Min(0), Length(1)]).areas(content);
    // Inset the text rows from the card edge; the progress bar runs full width.
    let header = header.inner(Margin::new(1, 0));
    let controls = controls.inner(Margin::new(1, 0));

    ScreenLayout {
        card,
        progress,
        header,
        slide,
        controls,
        help,
    }
}

fn card_block() -> Block<'static> {
    Block::bordered().border_type(BorderType::Rounded)
}

/// Which control button, if any, was clicked at (`column`, `row`).
pub fn hit_test_controls(
    area: Rect,
    fullscreen: bool,
    column: u16,
    row: u16,
) -> Option<ControlButton> {
    let layout = screen_layout(area, fullscreen);
    button_at(layout.controls, column, row)
}

pub fn draw_ui(frame: &mut Frame, presenter: &Presenter, tui: &mut TuiState, now: Instant) {
    let layout = screen_layout(frame.area(), presenter.is_fullscreen());
    let palette = tui.palette;

    if let Some(card) = layout.card {
        frame.render_widget(
            card_block().border_style(Style::default().fg(palette.surface)),
            card,
        );
    }

    ProgressBar::new(tui.progress.value(now), palette).render(frame, layout.progress);

    // Mid-transition the animator may still be showing the outgoing slide;
    // title and readout follow whatever is on screen.
    let slide_frame = tui.visible_frame(now);
    let shown_index = if slide_frame.index < presenter.slide_count() {
        slide_frame.index
    } else {
        presenter.current_index()
    };
    let slide = presenter.deck().get(shown_index);

    TitleBar::new(
        tui.brand_name.clone(),
        tui.brand_tagline.clone(),
        slide.map(|s| s.title.clone()).unwrap_or_default(),
        palette,
    )
    .render(frame, layout.header);

    if let Some(slide) = slide {
        SlideView::new(slide, slide_frame, palette, &mut tui.scroll).render(frame, layout.slide);
    }

    Controls {
        page_label: presenter.page_label_at(shown_index),
        can_retreat: presenter.can_retreat(),
        can_advance: presenter.can_advance(),
        is_fullscreen: presenter.is_fullscreen(),
        palette,
    }
    .render(frame, layout.controls);

    if let Some(help) = layout.help {
        HelpBar { palette }.render(frame, help);
    }
}
