use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;

use crate::components::{
	PagerContext, PromptContext, ResultsContext, render_error, render_pager, render_prompt,
	render_results,
};

use super::state::App;

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let [prompt_area, body_area, pager_area, footer_area] = Layout::vertical([
			Constraint::Length(3),
			Constraint::Min(1),
			Constraint::Length(1),
			Constraint::Length(1),
		])
		.areas(area);

		let prompt = PromptContext {
			input: &self.input,
			loading: self.search.is_loading(),
			theme: &self.theme,
		};
		render_prompt(frame, prompt_area, prompt, &mut self.throbber_state);

		match &self.result {
			Some(result) => {
				let ctx = ResultsContext {
					result,
					sort: self.session.sort,
					theme: &self.theme,
					local_offset: self.local_offset,
				};
				render_results(frame, body_area, ctx, &mut self.list_state);

				let pager = PagerContext {
					page: result.page,
					nb_pages: result.nb_pages,
					theme: &self.theme,
				};
				render_pager(frame, pager_area, pager);
			}
			None => {
				// Results cleared ahead of a fetch stay cleared; the hint only
				// greets a session that has no query yet.
				if !self.search.is_loading() && self.session.query.is_empty() {
					let placeholder = Paragraph::new("Type a query and press Enter to search.")
						.style(self.theme.empty)
						.alignment(Alignment::Center);
					frame.render_widget(placeholder, body_area);
				}
			}
		}

		self.render_footer(frame, footer_area);

		if let Some(modal) = &self.error {
			render_error(frame, area, modal, &self.theme);
		}
	}

	fn render_footer(&self, frame: &mut Frame, area: Rect) {
		let text = if self.session.query.is_empty() {
			"Enter search \u{00b7} Tab sort \u{00b7} \u{2190}/\u{2192} pages \u{00b7} Esc quit"
				.to_string()
		} else {
			self.share_link()
		};
		frame.render_widget(Paragraph::new(text).style(self.theme.footer), area);
	}
}

#[cfg(test)]
mod tests {
	use hnq_api::{ApiError, Hit, SearchResult, SortFilter};
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use ratatui::buffer::Buffer;

	use super::super::state::testing::{Harness, app_with_session};
	use crate::components::ErrorModal;
	use crate::session::Session;

	fn buffer_to_string(buf: &Buffer) -> String {
		let mut lines = Vec::new();
		for y in 0..buf.area.height {
			let mut line = String::new();
			for x in 0..buf.area.width {
				line.push_str(buf[(x, y)].symbol());
			}
			lines.push(line);
		}
		lines.join("\n")
	}

	fn draw_to_string(harness: &mut Harness) -> String {
		let backend = TestBackend::new(100, 24);
		let mut terminal = Terminal::new(backend).expect("terminal");
		terminal
			.draw(|frame| harness.app.draw(frame))
			.expect("draw frame");
		buffer_to_string(terminal.backend().buffer())
	}

	fn harness_with_result(page: u32, nb_pages: u32) -> Harness {
		let mut harness = app_with_session(Session {
			query: "widgets".to_string(),
			page,
			sort: SortFilter::Points,
		});
		harness.app.result = Some(SearchResult {
			query: "widgets".to_string(),
			page,
			nb_pages,
			hits: vec![Hit {
				author: "alice".to_string(),
				created_at_i: 0,
				points: 42,
				title: "Widget story".to_string(),
				url: "https://example.com/widgets".to_string(),
			}],
		});
		harness.app.list_state.select(Some(0));
		harness
	}

	#[test]
	fn frame_shows_query_echo_sort_selector_hits_and_pager() {
		let mut harness = harness_with_result(1, 3);
		let frame = draw_to_string(&mut harness);

		assert!(frame.contains("Showing results for \u{201c}widgets\u{201d}"));
		assert!(frame.contains("Sort:"));
		assert!(frame.contains("Points"));
		assert!(frame.contains("Created at"));
		assert!(frame.contains("Widget story"));
		assert!(frame.contains("42 points by alice"));
		assert!(frame.contains("2 / 3"));
		assert!(frame.contains("Prev"));
		assert!(frame.contains("Next"));
	}

	#[test]
	fn footer_carries_the_share_link() {
		let mut harness = harness_with_result(1, 3);
		let frame = draw_to_string(&mut harness);

		assert!(frame.contains("/search?query=widgets&tags=story&page=1"));
	}

	#[test]
	fn idle_start_shows_the_hint_instead_of_results() {
		let mut harness = app_with_session(Session::default());
		let frame = draw_to_string(&mut harness);

		assert!(frame.contains("Type a query and press Enter to search."));
		assert!(!frame.contains("Showing results for"));
	}

	#[test]
	fn cleared_results_stay_empty_once_a_query_exists() {
		let mut harness = app_with_session(Session {
			query: "rust".to_string(),
			page: 0,
			sort: SortFilter::Points,
		});
		harness.app.search.settle();
		let frame = draw_to_string(&mut harness);

		assert!(!frame.contains("Type a query and press Enter to search."));
		assert!(!frame.contains("Showing results for"));
	}

	#[test]
	fn empty_hit_list_renders_the_placeholder() {
		let mut harness = harness_with_result(0, 0);
		harness.app.result.as_mut().unwrap().hits.clear();
		harness.app.list_state.select(None);
		let frame = draw_to_string(&mut harness);

		assert!(frame.contains("No results"));
	}

	#[test]
	fn error_modal_overlays_the_frame() {
		let mut harness = harness_with_result(0, 3);
		harness.app.error = Some(ErrorModal::from_api_error(&ApiError::Status {
			status: 503,
			url: "https://hn.algolia.com/api/v1/search".to_string(),
		}));
		let frame = draw_to_string(&mut harness);

		assert!(frame.contains("Network error"));
		assert!(frame.contains("503"));
	}
}
