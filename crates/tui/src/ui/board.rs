//! Needle Board Widget
//!
//! Draws the ruled plane and every needle dropped so far on a braille
//! canvas. Needles that cross a line are red, the rest blue.

use buffon_core::{Bounds, Geometry, Needle};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        Block, Borders, Widget,
        canvas::{Canvas, Line as CanvasLine},
    },
};

/// Title shown on the board border
pub const BOARD_TITLE: &str = " Buffon's Needle - Monte Carlo Simulation ";

pub const CROSSING_COLOR: Color = Color::Red;
pub const MISS_COLOR: Color = Color::Blue;
pub const GRID_COLOR: Color = Color::DarkGray;

/// Color for a needle by crossing status
pub fn needle_color(needle: &Needle) -> Color {
    if needle.crosses {
        CROSSING_COLOR
    } else {
        MISS_COLOR
    }
}

/// The needle board
pub struct Board<'a> {
    needles: &'a [Needle],
    geometry: Geometry,
    bounds: Bounds,
}

impl<'a> Board<'a> {
    pub fn new(needles: &'a [Needle], geometry: Geometry, bounds: Bounds) -> Self {
        Self {
            needles,
            geometry,
            bounds,
        }
    }
}

impl Widget for &Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(BOARD_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let bounds = self.bounds;
        let grid = bounds.grid_lines(&self.geometry);
        let length = self.geometry.needle_length;

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([bounds.x_min, bounds.x_max])
            .y_bounds([bounds.y_min, bounds.y_max])
            .paint(|ctx| {
                for &y in &grid {
                    ctx.draw(&CanvasLine::new(
                        bounds.x_min,
                        y,
                        bounds.x_max,
                        y,
                        GRID_COLOR,
                    ));
                }
                // Needles above the grid
                ctx.layer();
                for needle in self.needles {
                    let ((x0, y0), (x1, y1)) = needle.endpoints(length);
                    ctx.draw(&CanvasLine::new(x0, y0, x1, y1, needle_color(needle)));
                }
            });

        canvas.render(area, buf);
    }
}
