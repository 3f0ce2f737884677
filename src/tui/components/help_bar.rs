use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub const HELP_TEXT: &str = "[SPACE/ARROWS] NAVIGATE · [F] FULLSCREEN · [Q] QUIT";

/// Key hint line shown under the card in windowed mode.
pub struct HelpBar {
    pub palette: Palette,
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            HELP_TEXT,
            Style::default()
                .fg(self.palette.muted)
                .add_modifier(Modifier::DIM),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(line, area);
    }
}
