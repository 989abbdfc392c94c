//! UI components for the live view
//!
//! These modules handle rendering of the board, overlay and status bar.

pub mod board;
pub mod layout;
pub mod overlay;
