//! Layout Manager
//!
//! Splits the terminal into the needle board and a status bar, and places
//! the text overlay in the board's top-left corner.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout configuration
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Height reserved for status bar
    pub status_bar_height: u16,
    /// Lines of overlay text drawn over the board
    pub overlay_height: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            status_bar_height: 1,
            overlay_height: 2,
        }
    }
}

impl LayoutConfig {
    /// Create a new layout config
    pub fn new() -> Self {
        Self::default()
    }
}

/// The computed layout areas
#[derive(Debug, Clone, Copy)]
pub struct ComputedLayout {
    /// Area for the needle board (including its border)
    pub board: Rect,
    /// Area for the estimate overlay, inside the board border
    pub overlay: Rect,
    /// Area for the status bar
    pub status: Rect,
}

impl ComputedLayout {
    /// Compute the layout for a given terminal area
    pub fn compute(area: Rect, config: &LayoutConfig) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(config.status_bar_height),
            ])
            .split(area);

        let main_area = vertical_chunks[0];
        let status_area = vertical_chunks[1];

        // Terminal cells are about twice as tall as wide; keep the board square
        let width = main_area.width.min(main_area.height.saturating_mul(2));
        let x = main_area.x + (main_area.width - width) / 2;
        let board = Rect::new(x, main_area.y, width, main_area.height);

        // Inside the border, one cell in from the top-left corner
        let overlay = Rect::new(
            board.x.saturating_add(1),
            board.y.saturating_add(1),
            board.width.saturating_sub(2),
            config.overlay_height.min(board.height.saturating_sub(2)),
        );

        Self {
            board,
            overlay,
            status: status_area,
        }
    }
}

/// Status bar content
#[derive(Debug, Clone, Default)]
pub struct StatusContent {
    /// Run state (running, paused, done)
    pub state: String,
    /// Drop interval in milliseconds
    pub interval_ms: u64,
    /// Trials remaining in this run
    pub remaining: u64,
    /// Any additional status message
    pub message: Option<String>,
}

impl StatusContent {
    /// Create a new status content
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn interval_ms(mut self, ms: u64) -> Self {
        self.interval_ms = ms;
        self
    }

    pub fn remaining(mut self, remaining: u64) -> Self {
        self.remaining = remaining;
        self
    }

    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.message = Some(msg.into());
        self
    }

    /// Format for display
    pub fn format(&self, width: u16) -> String {
        let left = format!(" {} | {} left | {} ms ", self.state, self.remaining, self.interval_ms);
        let middle = self.message.clone().unwrap_or_default();
        let right = " space pause  +/- speed  r restart  q quit ".to_string();

        let padding_needed = (width as usize)
            .saturating_sub(left.chars().count())
            .saturating_sub(middle.chars().count())
            .saturating_sub(right.chars().count());

        let left_pad = padding_needed / 2;
        let right_pad = padding_needed - left_pad;

        format!(
            "{}{}{}{}{}",
            left,
            " ".repeat(left_pad),
            middle,
            " ".repeat(right_pad),
            right
        )
    }
}
