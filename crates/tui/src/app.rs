//! TUI Application
//!
//! Application state for the live view. Owns the simulation, the needles
//! dropped so far, and the playback controls. The event loop in `lib.rs`
//! calls [`App::tick`] and [`App::handle_key`]; rendering is [`App::render`].

use crate::ui::board::Board;
use crate::ui::layout::{ComputedLayout, LayoutConfig, StatusContent};
use crate::ui::overlay::Overlay;
use buffon_core::{Needle, Simulation, TrialReport};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Bounds for the drop interval, in milliseconds
const MIN_INTERVAL_MS: u64 = 1;
const MAX_INTERVAL_MS: u64 = 1000;

/// Main application state
pub struct App {
    /// The run being displayed
    pub simulation: Simulation,
    /// Every needle dropped in this run, oldest first
    pub needles: Vec<Needle>,
    /// Values shown in the overlay
    pub overlay: Overlay,
    /// Layout configuration
    pub layout_config: LayoutConfig,
    /// Delay between needle drops
    pub interval: Duration,
    /// Whether drops are paused
    pub paused: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message (clears after next key)
    pub status_message: Option<String>,
    /// When the next needle is due
    next_drop: Option<Instant>,
}

impl App {
    /// Create the app for a fresh simulation
    pub fn new(simulation: Simulation, interval: Duration) -> Self {
        let capacity = usize::try_from(simulation.target()).unwrap_or(0).min(1 << 16);
        let interval_ms = (interval.as_millis() as u64).clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
        Self {
            simulation,
            needles: Vec::with_capacity(capacity),
            overlay: Overlay::blank(),
            layout_config: LayoutConfig::default(),
            interval: Duration::from_millis(interval_ms),
            paused: false,
            should_quit: false,
            status_message: None,
            next_drop: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.simulation.is_finished()
    }

    /// Short name for the run state
    pub fn state_name(&self) -> &'static str {
        if self.is_finished() {
            "done"
        } else if self.paused {
            "paused"
        } else {
            "running"
        }
    }

    /// Drop one needle now, regardless of timing
    pub fn advance(&mut self) -> Option<TrialReport> {
        let report = self.simulation.step()?;
        self.needles.push(report.needle);
        self.overlay = Overlay::new(report.estimate, report.trials_completed, report.crossings);
        if self.simulation.is_finished() {
            info!(
                trials = report.trials_completed,
                crossings = report.crossings,
                estimate = %report.estimate,
                "run complete"
            );
            self.status_message = Some(format!("Done: π ≈ {:.5}", report.estimate));
        }
        Some(report)
    }

    /// Drop a needle if one is due at `now`
    pub fn tick(&mut self, now: Instant) {
        if self.paused || self.is_finished() {
            return;
        }
        match self.next_drop {
            Some(due) if now < due => {}
            _ => {
                self.advance();
                self.next_drop = Some(now + self.interval);
            }
        }
    }

    /// How long the event loop may wait before the next tick
    pub fn time_until_next(&self, now: Instant) -> Duration {
        if self.paused || self.is_finished() {
            return Duration::from_millis(100);
        }
        match self.next_drop {
            Some(due) => due.saturating_duration_since(now),
            None => Duration::ZERO,
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear status message on any key
        self.status_message = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('c') | KeyCode::Char('d') | KeyCode::Char('q') = key.code {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') | KeyCode::Char('p') => {
                self.toggle_pause();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.set_interval_ms(self.interval_ms() / 2);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.set_interval_ms(self.interval_ms() * 2);
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval.as_millis() as u64
    }

    fn set_interval_ms(&mut self, ms: u64) {
        let ms = ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
        self.interval = Duration::from_millis(ms);
        self.status_message = Some(format!("Interval: {} ms", ms));
        debug!(interval_ms = ms, "changed drop interval");
    }

    fn toggle_pause(&mut self) {
        if self.is_finished() {
            return;
        }
        self.paused = !self.paused;
        // Next tick drops straight away
        self.next_drop = None;
        debug!(paused = self.paused, "toggled pause");
    }

    /// Begin a new run with the same trial count
    fn restart(&mut self) {
        self.simulation.restart();
        self.needles.clear();
        self.overlay = Overlay::blank();
        self.paused = false;
        self.next_drop = None;
        self.status_message = Some("Restarted".to_string());
    }

    /// Render the whole frame
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = ComputedLayout::compute(area, &self.layout_config);

        let board = Board::new(
            &self.needles,
            *self.simulation.geometry(),
            *self.simulation.bounds(),
        );
        frame.render_widget(&board, layout.board);
        frame.render_widget(&self.overlay, layout.overlay);

        self.render_status_bar(frame, layout.status);
    }

    /// Render the status bar
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mut status = StatusContent::new()
            .state(self.state_name())
            .interval_ms(self.interval_ms())
            .remaining(self.simulation.remaining());
        if let Some(msg) = &self.status_message {
            status = status.message(msg.clone());
        }

        let style = Style::default().bg(Color::DarkGray).fg(Color::White);
        let paragraph = Paragraph::new(Line::from(Span::styled(status.format(area.width), style)));
        frame.render_widget(paragraph, area);
    }
}
