//! Pagination bar: a 1-indexed page counter between prev/next controls.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme::Theme;

/// Argument bundle for rendering the pagination bar.
pub(crate) struct PagerContext<'a> {
	pub(crate) page: u32,
	pub(crate) nb_pages: u32,
	pub(crate) theme: &'a Theme,
}

/// Whether the previous-page control is active.
pub(crate) fn prev_enabled(page: u32) -> bool {
	page > 0
}

/// Whether the next-page control is active; pages are 0-indexed internally.
pub(crate) fn next_enabled(page: u32, nb_pages: u32) -> bool {
	page + 1 < nb_pages
}

pub(crate) fn render_pager(frame: &mut Frame, area: Rect, ctx: PagerContext<'_>) {
	let prev_style = if prev_enabled(ctx.page) {
		ctx.theme.pager_enabled
	} else {
		ctx.theme.pager_disabled
	};
	let next_style = if next_enabled(ctx.page, ctx.nb_pages) {
		ctx.theme.pager_enabled
	} else {
		ctx.theme.pager_disabled
	};

	let line = Line::from(vec![
		Span::styled("\u{2190} Prev", prev_style),
		Span::styled(
			format!("   {} / {}   ", ctx.page + 1, ctx.nb_pages),
			ctx.theme.pager_counter,
		),
		Span::styled("Next \u{2192}", next_style),
	]);
	frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn prev_is_disabled_on_the_first_page() {
		assert!(!prev_enabled(0));
		assert!(prev_enabled(1));
	}

	#[test]
	fn next_is_disabled_on_the_last_page() {
		// page + 1 >= nb_pages: 3 >= 3 on the final page of three.
		assert!(!next_enabled(2, 3));
		assert!(next_enabled(1, 3));
	}

	#[test]
	fn single_page_disables_both_directions() {
		assert!(!prev_enabled(0));
		assert!(!next_enabled(0, 1));
	}

	#[test]
	fn first_of_many_pages_enables_next_only() {
		assert!(!prev_enabled(0));
		assert!(next_enabled(0, 2));
	}
}
