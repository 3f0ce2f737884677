//! # Controls Component
//!
//! Bottom-right navigation cluster: page readout plus three buttons.
//!
//! ```text
//!                         PROGRESS 03 / 24  [ ‹ ] [ › ] [ ⤢ ]
//! ```
//!
//! Buttons are laid out from the right edge so `button_at` can hit-test a
//! mouse click against exactly the cells that were drawn. A disabled button
//! is drawn dimmed; clicking it still reports the button, and the presenter
//! clamps the resulting action into a no-op.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::theme::Palette;

const BUTTON_WIDTH: u16 = 5;
const BUTTON_GAP: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    Previous,
    Next,
    Fullscreen,
}

pub struct Controls {
    pub page_label: String,
    pub can_retreat: bool,
    pub can_advance: bool,
    pub is_fullscreen: bool,
    pub palette: Palette,
}

/// Screen rectangles of the three buttons, left to right, inside `area`.
pub fn button_rects(area: Rect) -> [(ControlButton, Rect); 3] {
    let right = area.x + area.width;
    let at = |slot: u16| {
        let x = right.saturating_sub(BUTTON_WIDTH * (slot + 1) + BUTTON_GAP * slot);
        Rect::new(x.max(area.x), area.y, BUTTON_WIDTH, 1.min(area.height))
    };
    [
        (ControlButton::Previous, at(2)),
        (ControlButton::Next, at(1)),
        (ControlButton::Fullscreen, at(0)),
    ]
}

/// Which button, if any, covers the cell at (`column`, `row`).
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<ControlButton> {
    button_rects(area).into_iter().find_map(|(button, rect)| {
        let hit = column >= rect.x
            && column < rect.x + rect.width
            && row >= rect.y
            && row < rect.y + rect.height;
        hit.then_some(button)
    })
}

impl Controls {
    fn button_style(&self, enabled: bool, primary: bool) -> Style {
        match (enabled, primary) {
            (false, _) => Style::default()
                .fg(self.palette.surface)
                .add_modifier(Modifier::DIM),
            (true, true) => Style::default()
                .fg(self.palette.accent)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(self.palette.text),
        }
    }
}

impl Component for Controls {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let icon = if self.is_fullscreen { "⤡" } else { "⤢" };
        let buttons = [
            ("‹", self.button_style(self.can_retreat, false)),
            ("›", self.button_style(self.can_advance, true)),
            (icon, Style::default().fg(self.palette.muted)),
        ];
        for ((_, rect), (glyph, style)) in button_rects(area).into_iter().zip(buttons) {
            frame.render_widget(Span::styled(format!("[ {glyph} ]"), style), rect);
        }

        let cluster = BUTTON_WIDTH * 3 + BUTTON_GAP * 2;
        let readout = Line::from(vec![
            Span::styled("PROGRESS ", Style::default().fg(self.palette.muted)),
            Span::styled(
                self.page_label.clone(),
                Style::default()
                    .fg(self.palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ]);
        let readout_width = readout.width() as u16;
        if area.width >= cluster + readout_width {
            let x = area.x + area.width - cluster - readout_width;
            frame.render_widget(readout, Rect::new(x, area.y, readout_width, 1));
        }
    }
}
