use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::App;

impl App<'_> {
	/// Process a key press; returns true when the user asked to leave.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
		if self.error.is_some() {
			// Blocking alert: nothing else happens until it is dismissed.
			if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
				self.error = None;
			}
			return false;
		}

		match key.code {
			KeyCode::Esc => return true,
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
			KeyCode::Enter => self.submit(),
			KeyCode::Tab => self.toggle_sort(),
			KeyCode::Left => self.page_prev(),
			KeyCode::Right => self.page_next(),
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ => {
				self.input.input(key);
			}
		}
		false
	}

	/// Start a fresh search from the input field.
	fn submit(&mut self) {
		if !self.input.can_submit() {
			return;
		}

		self.session.query = self.input.text().trim().to_string();
		self.session.page = 0;
		// Drop the previous render so stale hits never sit under the new
		// spinner.
		self.result = None;
		self.list_state.select(None);
		self.dispatch_fetch();
		self.input.clear();
	}

	/// Switch between the two sort orders; page and query stay put.
	fn toggle_sort(&mut self) {
		if self.session.query.is_empty() || self.result.is_none() {
			return;
		}

		self.session.sort = self.session.sort.toggled();
		self.dispatch_fetch();
	}

	fn page_prev(&mut self) {
		if self.session.query.is_empty() || self.result.is_none() {
			return;
		}
		// Prev is disabled on the first page.
		if self.session.page == 0 {
			return;
		}

		self.session.page -= 1;
		self.dispatch_fetch();
	}

	fn page_next(&mut self) {
		if self.session.query.is_empty() {
			return;
		}
		let Some(result) = &self.result else {
			return;
		};
		// Next is disabled on the last page.
		if self.session.page + 1 >= result.nb_pages {
			return;
		}

		self.session.page += 1;
		self.dispatch_fetch();
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.list_state.selected()
			&& selected > 0
		{
			self.list_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		let len = self.result.as_ref().map_or(0, |result| result.hits.len());
		if let Some(selected) = self.list_state.selected()
			&& selected + 1 < len
		{
			self.list_state.select(Some(selected + 1));
		}
	}
}
