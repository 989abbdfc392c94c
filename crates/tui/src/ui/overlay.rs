//! Estimate overlay: the current π estimate and the running counts.

use buffon_core::PiEstimate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Running values shown over the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub estimate: PiEstimate,
    pub trials: u64,
    pub crossings: u64,
}

impl Overlay {
    pub fn new(estimate: PiEstimate, trials: u64, crossings: u64) -> Self {
        Self {
            estimate,
            trials,
            crossings,
        }
    }

    /// Empty overlay before the first needle
    pub fn blank() -> Self {
        Self::new(PiEstimate::Undefined, 0, 0)
    }

    pub fn estimate_text(&self) -> String {
        format!("π ≈ {:.5}", self.estimate)
    }

    pub fn counts_text(&self) -> String {
        format!("Needles: {}  Crossings: {}", self.trials, self.crossings)
    }
}

impl Widget for &Overlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let estimate_style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(Span::styled(self.estimate_text(), estimate_style)),
            Line::from(Span::styled(self.counts_text(), Style::default().fg(Color::Gray))),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}
