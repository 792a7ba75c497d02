//! Color constants for the task window.

use ratatui::style::Color;

/// Selection highlight and button fill.
pub const SAGE: Color = Color::Rgb(163, 201, 168);
/// Focused button / active border.
pub const SAGE_DARK: Color = Color::Rgb(134, 180, 155);
/// Body text.
pub const SLATE: Color = Color::Rgb(55, 71, 79);
/// Header text.
pub const DEEP_TEAL: Color = Color::Rgb(47, 72, 88);
/// Warning dialogs.
pub const DARK_RED: Color = Color::Rgb(114, 0, 0);
