//! Core state container for the terminal front-end.
//!
//! The [`App`] owns all mutable session state: the query, page, and sort
//! filter, the last fetched result, the input widget, and the handle to the
//! background search worker. Two states exist — idle and loading — and the
//! throbber tracks the latter.

use std::sync::mpsc::TryRecvError;
use std::time::Duration;

use hnq_api::{Client, DEFAULT_BASE_URL, SearchResult};
use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;
use time::UtcOffset;
use tracing::{debug, info};

use crate::components::ErrorModal;
use crate::input::QueryInput;
use crate::session::Session;
use crate::theme::Theme;

use super::search::{SearchReply, SearchRuntime};

/// Everything the application needs to start, resolved by the binary's
/// settings layer.
pub struct AppConfig {
	pub base_url: String,
	pub timeout: Duration,
	pub theme: Theme,
	pub session: Session,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			timeout: Duration::from_secs(10),
			theme: Theme::default(),
			session: Session::default(),
		}
	}
}

impl Drop for App<'_> {
	fn drop(&mut self) {
		self.search.shutdown();
	}
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	pub session: Session,
	pub input: QueryInput<'a>,
	pub result: Option<SearchResult>,
	pub theme: Theme,
	pub(crate) base_url: String,
	pub(crate) list_state: ListState,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) local_offset: UtcOffset,
	pub(crate) error: Option<ErrorModal>,
	pub(crate) search: SearchRuntime,
}

impl<'a> App<'a> {
	/// Construct the app and spawn its search worker.
	#[must_use]
	pub fn new(config: AppConfig) -> Self {
		let client = Client::new(config.base_url.clone(), config.timeout);
		let search = SearchRuntime::spawn(client);
		Self::with_runtime(config, search)
	}

	pub(crate) fn with_runtime(config: AppConfig, search: SearchRuntime) -> Self {
		let AppConfig {
			base_url,
			timeout: _,
			theme,
			session,
		} = config;

		let mut input = QueryInput::new("");
		input.apply_theme(&theme);
		// Resolved once on the main thread; offset lookups are not reliable
		// after other threads have started.
		let local_offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);

		let mut app = Self {
			session,
			input,
			result: None,
			theme,
			base_url,
			list_state: ListState::default(),
			throbber_state: ThrobberState::default(),
			local_offset,
			error: None,
			search,
		};

		// Initial load: a restored link or CLI query starts fetching at once;
		// with no query the app stays idle until the user submits one.
		if !app.session.query.is_empty() {
			app.dispatch_fetch();
		}
		app
	}

	/// Send a fetch for the current session state to the worker.
	pub(crate) fn dispatch_fetch(&mut self) {
		self.search.dispatch(self.session.to_request());
	}

	/// Drain worker replies waiting on the channel.
	pub(crate) fn pump_search_replies(&mut self) {
		loop {
			match self.search.try_recv() {
				Ok(reply) => self.handle_search_reply(reply),
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
	}

	/// Apply a worker reply if it corresponds to the most recent dispatch.
	fn handle_search_reply(&mut self, reply: SearchReply) {
		if !self.search.matches_latest(reply.id) {
			debug!(id = reply.id, "discarding stale search reply");
			return;
		}

		// The loading indicator always clears, success or failure.
		self.search.settle();
		match reply.outcome {
			Ok(result) => {
				info!(
					query = %result.query,
					page = result.page,
					hits = result.hits.len(),
					"search completed"
				);
				self.list_state
					.select(if result.hits.is_empty() { None } else { Some(0) });
				self.result = Some(result);
			}
			Err(err) => self.error = Some(ErrorModal::from_api_error(&err)),
		}
	}

	/// Share link for the current session state.
	#[must_use]
	pub fn share_link(&self) -> String {
		self.session.share_link(&self.base_url)
	}
}

#[cfg(test)]
pub(crate) mod testing {
	use std::sync::Arc;
	use std::sync::atomic::AtomicU64;
	use std::sync::mpsc::{self, Receiver, Sender};

	use super::super::search::{SearchCommand, SearchReply, SearchRuntime};
	use super::{App, AppConfig};
	use crate::session::Session;

	pub(crate) struct Harness {
		pub(crate) app: App<'static>,
		pub(crate) commands: Receiver<SearchCommand>,
		pub(crate) replies: Sender<SearchReply>,
	}

	/// An [`App`] wired to loopback channels instead of a live worker.
	pub(crate) fn app_with_session(session: Session) -> Harness {
		let (command_tx, command_rx) = mpsc::channel();
		let (reply_tx, reply_rx) = mpsc::channel();
		let runtime = SearchRuntime::new(command_tx, reply_rx, Arc::new(AtomicU64::new(0)));
		let config = AppConfig {
			session,
			..AppConfig::default()
		};
		Harness {
			app: App::with_runtime(config, runtime),
			commands: command_rx,
			replies: reply_tx,
		}
	}
}

#[cfg(test)]
mod tests {
	use hnq_api::{ApiError, Hit, SearchRequest, SearchResult, SortFilter};

	use super::super::search::{SearchCommand, SearchReply};
	use super::testing::app_with_session;
	use crate::session::Session;

	fn session(query: &str, page: u32, sort: SortFilter) -> Session {
		Session {
			query: query.to_string(),
			page,
			sort,
		}
	}

	fn result_with(query: &str, page: u32, nb_pages: u32) -> SearchResult {
		SearchResult {
			query: query.to_string(),
			page,
			nb_pages,
			hits: vec![Hit {
				author: "alice".to_string(),
				created_at_i: 1_700_000_000,
				points: 10,
				title: "A story".to_string(),
				url: "https://example.com".to_string(),
			}],
		}
	}

	#[test]
	fn initial_load_fetches_when_a_query_is_present() {
		let harness = app_with_session(session("rust", 2, SortFilter::CreatedAt));
		assert!(harness.app.search.is_loading());

		match harness.commands.try_recv().unwrap() {
			SearchCommand::Fetch { id, request } => {
				assert_eq!(id, 1);
				assert_eq!(request, SearchRequest::new("rust", 2, SortFilter::CreatedAt));
			}
			SearchCommand::Shutdown => panic!("unexpected shutdown"),
		}
	}

	#[test]
	fn initial_load_stays_idle_without_a_query() {
		let harness = app_with_session(Session::default());
		assert!(!harness.app.search.is_loading());
		assert!(harness.commands.try_recv().is_err());
	}

	#[test]
	fn successful_reply_replaces_the_result_and_clears_loading() {
		let mut harness = app_with_session(session("rust", 0, SortFilter::Points));

		harness
			.replies
			.send(SearchReply {
				id: 1,
				outcome: Ok(result_with("rust", 0, 3)),
			})
			.unwrap();
		harness.app.pump_search_replies();

		assert!(!harness.app.search.is_loading());
		assert_eq!(harness.app.result.as_ref().unwrap().nb_pages, 3);
		assert_eq!(harness.app.list_state.selected(), Some(0));
	}

	#[test]
	fn stale_replies_are_discarded() {
		let mut harness = app_with_session(session("rust", 0, SortFilter::Points));
		// A second dispatch supersedes the first.
		harness.app.dispatch_fetch();

		harness
			.replies
			.send(SearchReply {
				id: 1,
				outcome: Ok(result_with("stale", 0, 9)),
			})
			.unwrap();
		harness.app.pump_search_replies();

		assert!(harness.app.result.is_none(), "stale reply must not render");
		assert!(harness.app.search.is_loading(), "latest request is still pending");

		harness
			.replies
			.send(SearchReply {
				id: 2,
				outcome: Ok(result_with("rust", 0, 3)),
			})
			.unwrap();
		harness.app.pump_search_replies();

		assert_eq!(harness.app.result.as_ref().unwrap().query, "rust");
		assert!(!harness.app.search.is_loading());
	}

	#[test]
	fn failed_reply_raises_the_modal_and_keeps_prior_results() {
		let mut harness = app_with_session(session("rust", 0, SortFilter::Points));
		harness
			.replies
			.send(SearchReply {
				id: 1,
				outcome: Ok(result_with("rust", 0, 3)),
			})
			.unwrap();
		harness.app.pump_search_replies();

		harness.app.dispatch_fetch();
		harness
			.replies
			.send(SearchReply {
				id: 2,
				outcome: Err(ApiError::Status {
					status: 503,
					url: "https://hn.algolia.com/api/v1/search".to_string(),
				}),
			})
			.unwrap();
		harness.app.pump_search_replies();

		assert!(!harness.app.search.is_loading(), "throbber ends hidden on failure");
		let modal = harness.app.error.as_ref().unwrap();
		assert_eq!(modal.title, "Network error");
		// The previous render is left in place.
		assert_eq!(harness.app.result.as_ref().unwrap().query, "rust");
	}
}
