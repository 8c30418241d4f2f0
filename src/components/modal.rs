//! Blocking error overlay.

use hnq_api::ApiError;
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::theme::Theme;

/// Kind-specific alert raised when a fetch fails.
///
/// The overlay is blocking: the action layer swallows every key except the
/// dismissal keys while one is visible. No error state outlives dismissal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ErrorModal {
	pub(crate) title: &'static str,
	pub(crate) message: String,
}

impl ErrorModal {
	/// Map an API failure to the user-facing alert kind.
	pub(crate) fn from_api_error(err: &ApiError) -> Self {
		let title = if err.is_network() {
			"Network error"
		} else {
			"Something went wrong"
		};
		Self {
			title,
			message: err.to_string(),
		}
	}
}

pub(crate) fn render_error(frame: &mut Frame, area: Rect, modal: &ErrorModal, theme: &Theme) {
	let popup = centered_rect(area, 60, 7);
	frame.render_widget(Clear, popup);

	let block = Block::bordered()
		.title(modal.title)
		.border_style(theme.error_border);
	let body = vec![
		Line::raw(modal.message.clone()),
		Line::raw(""),
		Line::styled("press Enter to dismiss", theme.hit_meta),
	];
	let paragraph = Paragraph::new(body)
		.style(theme.error_body)
		.wrap(Wrap { trim: true })
		.block(block);
	frame.render_widget(paragraph, popup);
}

fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
	let [horizontal] = Layout::horizontal([Constraint::Percentage(percent_x)])
		.flex(Flex::Center)
		.areas(area);
	let [vertical] = Layout::vertical([Constraint::Length(height)])
		.flex(Flex::Center)
		.areas(horizontal);
	vertical
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn transport_failures_raise_the_network_alert() {
		let err = ApiError::Status {
			status: 500,
			url: "https://hn.algolia.com/api/v1/search".to_string(),
		};
		let modal = ErrorModal::from_api_error(&err);
		assert_eq!(modal.title, "Network error");
		assert!(modal.message.contains("500"));
	}

	#[test]
	fn decode_failures_raise_the_generic_alert() {
		let cause = serde_json::from_str::<u32>("oops").unwrap_err();
		let modal = ErrorModal::from_api_error(&ApiError::from(cause));
		assert_eq!(modal.title, "Something went wrong");
	}

	#[test]
	fn popups_are_centered_within_the_area() {
		let area = Rect::new(0, 0, 100, 30);
		let popup = centered_rect(area, 60, 7);
		assert_eq!(popup.width, 60);
		assert_eq!(popup.height, 7);
		assert_eq!(popup.x, 20);
		assert!(popup.y > 0 && popup.y + popup.height < area.height);
	}
}
