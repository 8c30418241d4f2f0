//! Input prompt row: query editor, submit affordance, loading throbber.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::{Block, Paragraph};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::input::QueryInput;
use crate::theme::Theme;

const STATUS_WIDTH: u16 = 12;

/// Argument bundle for rendering the prompt row.
pub(crate) struct PromptContext<'a, 'b> {
	pub(crate) input: &'a QueryInput<'b>,
	pub(crate) loading: bool,
	pub(crate) theme: &'a Theme,
}

/// Render the bordered input row with the status cell at the right.
///
/// While a request is in flight the status cell animates the throbber;
/// otherwise it shows the submit hint, styled by whether submitting is
/// currently possible.
pub(crate) fn render_prompt(
	frame: &mut Frame,
	area: Rect,
	ctx: PromptContext<'_, '_>,
	throbber_state: &mut ThrobberState,
) {
	let block = Block::bordered()
		.title("Search Hacker News")
		.border_style(ctx.theme.prompt_border);
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let [input_area, status_area] =
		Layout::horizontal([Constraint::Min(1), Constraint::Length(STATUS_WIDTH)]).areas(inner);

	ctx.input.render(frame, input_area);

	if ctx.loading {
		let throbber = Throbber::default()
			.label("fetching")
			.throbber_style(ctx.theme.throbber);
		frame.render_stateful_widget(throbber, status_area, throbber_state);
	} else {
		let style = if ctx.input.can_submit() {
			ctx.theme.hint_enabled
		} else {
			ctx.theme.hint_disabled
		};
		let hint = Paragraph::new("\u{23ce} search")
			.style(style)
			.alignment(Alignment::Right);
		frame.render_widget(hint, status_area);
	}
}
