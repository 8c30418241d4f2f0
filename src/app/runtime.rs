//! Application runtime and event loop.

use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::state::{App, AppConfig};

/// Construct an [`App`] for the resolved configuration and run it until the
/// user leaves.
pub fn run(config: AppConfig) -> Result<()> {
	let mut app = App::new(config);
	app.run()
}

impl App<'_> {
	/// Pump the terminal event loop until the user exits.
	pub fn run(&mut self) -> Result<()> {
		let mut terminal = ratatui::init();
		terminal.clear()?;

		let result = loop {
			self.pump_search_replies();
			self.throbber_state.calc_next();
			terminal.draw(|frame| self.draw(frame))?;

			if event::poll(Duration::from_millis(50))? {
				match event::read()? {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						if self.handle_key(key) {
							break Ok(());
						}
					}
					Event::Resize(_, _) => {}
					_ => {}
				}
			}
		};

		ratatui::restore();
		result
	}
}
