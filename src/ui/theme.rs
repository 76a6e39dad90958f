//! Color theme constants for the picker UI
//!
//! Defines the minimal dark color palette used by the folder picker.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Characters that matched the fuzzy query
pub const COLOR_MATCH: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Background color for the picker dialog
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
