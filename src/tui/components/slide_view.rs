//! # SlideView Component
//!
//! Renders one slide's Markdown body, as positioned and faded by the
//! current `SlideFrame`.
//!
//! A terminal can't do real opacity or blur, so both are quantized into
//! style changes:
//!
//! | opacity / blur           | drawn as                        |
//! |--------------------------|---------------------------------|
//! | opacity < 0.15           | nothing                         |
//! | opacity < 0.5 or blur > 0.5 | muted color, dimmed          |
//! | opacity < 0.9            | dimmed                          |
//! | otherwise                | as authored                     |
//!
//! The horizontal shift moves the text block by up to `MAX_SHIFT` columns,
//! eating into the side padding so the text never leaves the card.
//!
//! Content shorter than the area is centered vertically. Longer content
//! scrolls; the offset is clamped here (hence `&mut u16`) so the caller's
//! scroll state never drifts past the end.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::deck::Slide;
use crate::tui::component::Component;
use crate::tui::markdown;
use crate::tui::theme::Palette;
use crate::tui::transition::SlideFrame;

pub const MAX_SHIFT: u16 = 4;

pub struct SlideView<'a> {
    slide: &'a Slide,
    frame: SlideFrame,
    palette: Palette,
    scroll: &'a mut u16,
}

impl<'a> SlideView<'a> {
    pub fn new(slide: &'a Slide, frame: SlideFrame, palette: Palette, scroll: &'a mut u16) -> Self {
        Self {
            slide,
            frame,
            palette,
            scroll,
        }
    }

    fn styled_text(&self) -> Option<Text<'static>> {
        if self.frame.opacity < 0.15 {
            return None;
        }
        let mut text = markdown::render(&self.slide.body, &self.palette);
        let overlay = if self.frame.opacity < 0.5 || self.frame.blur > 0.5 {
            Some(
                Style::default()
                    .fg(self.palette.muted)
                    .add_modifier(Modifier::DIM),
            )
        } else if self.frame.opacity < 0.9 {
            Some(Style::default().add_modifier(Modifier::DIM))
        } else {
            None
        };
        if let Some(overlay) = overlay {
            for line in &mut text.lines {
                for span in &mut line.spans {
                    span.style = span.style.patch(overlay);
                }
            }
        }
        Some(text)
    }
}

/// Text area inside `area` after padding and the shift offset.
pub fn content_area(area: Rect, shift: f32) -> Rect {
    let pad = if area.width >= 40 { MAX_SHIFT + 2 } else { 1 };
    let max_shift = pad.min(MAX_SHIFT) as f32;
    let offset = (shift.clamp(-1.0, 1.0) * max_shift).round() as i32;
    let x = (area.x + pad) as i32 + offset;
    let width = area.width.saturating_sub(pad * 2);
    Rect::new(x.max(area.x as i32) as u16, area.y, width, area.height)
}

impl Component for SlideView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(text) = self.styled_text() else {
            *self.scroll = 0;
            return;
        };

        let inner = content_area(area, self.frame.shift);
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        let lines = paragraph.line_count(inner.width) as u16;

        let target = if lines < inner.height {
            *self.scroll = 0;
            let top = (inner.height - lines) / 2;
            Rect::new(inner.x, inner.y + top, inner.width, lines)
        } else {
            *self.scroll = (*self.scroll).min(lines - inner.height);
            inner
        };

        frame.render_widget(paragraph.scroll((*self.scroll, 0)), target);
    }
}
