//! Single-line query input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use tui_textarea::{CursorMove, TextArea};

use crate::theme::Theme;

const PLACEHOLDER: &str = "Search Hacker News stories";

/// Editable query text plus cursor state.
///
/// Navigation and submission keys never reach this widget; the action layer
/// intercepts them first, so the textarea stays a single line.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_placeholder_text(PLACEHOLDER);
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Adopt the palette for text, placeholder, and cursor.
	pub fn apply_theme(&mut self, theme: &Theme) {
		self.textarea.set_style(theme.input);
		self.textarea.set_cursor_line_style(theme.input);
		self.textarea.set_cursor_style(theme.cursor);
		self.textarea.set_placeholder_style(theme.placeholder);
	}

	/// Current input text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Whether the submit affordance is enabled, re-derived from the trimmed
	/// text on every call.
	#[must_use]
	pub fn can_submit(&self) -> bool {
		!self.text().trim().is_empty()
	}

	/// Reset to an empty input, keeping styles intact.
	pub fn clear(&mut self) {
		self.textarea.move_cursor(CursorMove::End);
		while self.textarea.delete_char() {}
	}

	/// Feed a key event to the editor; returns true when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		self.textarea.input(key)
	}

	pub(crate) fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}
