//! # TitleBar Component
//!
//! Brand header at the top of the slide card.
//!
//! ```text
//! ▌더국제  VOCATIONAL COLLEGE                    NCS(국가직무능력표준)란?
//! ```
//!
//! The brand sits on the left; the current slide's title is right-aligned
//! and truncated with `…` when the row is too narrow. Widths are measured in
//! terminal columns (`unicode-width`), since Hangul and other wide scripts
//! take two columns per character.
//!
//! Stateless: every field is a prop handed in by `ui::draw_ui`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub struct TitleBar {
    pub brand_name: String,
    pub tagline: String,
    pub slide_title: String,
    pub palette: Palette,
}

impl TitleBar {
    pub fn new(brand_name: String, tagline: String, slide_title: String, palette: Palette) -> Self {
        Self {
            brand_name,
            tagline,
            slide_title,
            palette,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let brand_style = Style::default()
            .fg(self.palette.text)
            .add_modifier(Modifier::BOLD);
        let mut spans = vec![
            Span::styled("▌", Style::default().fg(self.palette.accent)),
            Span::styled(self.brand_name.clone(), brand_style),
            Span::raw("  "),
            Span::styled(self.tagline.clone(), Style::default().fg(self.palette.muted)),
        ];

        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let available = (area.width as usize).saturating_sub(used + 2);
        let title = truncate_to_width(&self.slide_title, available);
        if !title.is_empty() {
            let gap = (area.width as usize).saturating_sub(used + title.width());
            spans.push(Span::raw(" ".repeat(gap)));
            spans.push(Span::styled(title, Style::default().fg(self.palette.muted)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

/// Cut `text` to at most `max` columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
