//! Thin progress bar across the top of the slide card.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub struct ProgressBar {
    /// Filled fraction in [0, 1]; may be mid-animation.
    pub ratio: f64,
    pub palette: Palette,
}

impl ProgressBar {
    pub fn new(ratio: f64, palette: Palette) -> Self {
        Self { ratio, palette }
    }

    fn filled_cells(&self, width: u16) -> usize {
        (self.ratio.clamp(0.0, 1.0) * width as f64).round() as usize
    }
}

impl Component for ProgressBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let filled = self.filled_cells(area.width);
        let track = (area.width as usize).saturating_sub(filled);
        let line = Line::from(vec![
            Span::styled("━".repeat(filled), Style::default().fg(self.palette.accent)),
            Span::styled("─".repeat(track), Style::default().fg(self.palette.surface)),
        ]);
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn count_filled(width: u16, ratio: f64) -> usize {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = ProgressBar::new(ratio, Palette::default());
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|c| c.symbol() == "━")
            .count()
    }

    #[test]
    fn test_progress_bar_fill() {
        assert_eq!(count_filled(24, 1.0 / 24.0), 1);
        assert_eq!(count_filled(24, 0.5), 12);
        assert_eq!(count_filled(24, 1.0), 24);
        assert_eq!(count_filled(24, 0.0), 0);
    }

    #[test]
    fn test_progress_bar_clamps_ratio() {
        assert_eq!(count_filled(10, 1.7), 10);
        assert_eq!(count_filled(10, -0.3), 0);
    }
}
