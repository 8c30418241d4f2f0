//! Search dispatch and coordination with the background worker.
//!
//! One worker thread owns the API client and performs blocking fetches in
//! command order. Every dispatch carries a monotonically increasing id; the
//! worker skips commands that are already stale, and the controller discards
//! replies that do not match the latest id. A newer action therefore always
//! supersedes an older in-flight request, and out-of-order arrival can never
//! render stale data.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use hnq_api::{ApiError, Client, SearchRequest, SearchResult};
use tracing::{debug, warn};

#[derive(Debug)]
pub(crate) enum SearchCommand {
	Fetch { id: u64, request: SearchRequest },
	Shutdown,
}

#[derive(Debug)]
pub(crate) struct SearchReply {
	pub(crate) id: u64,
	pub(crate) outcome: Result<SearchResult, ApiError>,
}

/// Controller-side handle for the background search worker.
pub(crate) struct SearchRuntime {
	tx: Sender<SearchCommand>,
	rx: Receiver<SearchReply>,
	latest_dispatched: Arc<AtomicU64>,
	next_id: u64,
	latest_id: Option<u64>,
	in_flight: bool,
}

impl SearchRuntime {
	/// Spawn the worker thread and wire up both channels.
	pub(crate) fn spawn(client: Client) -> Self {
		let (command_tx, command_rx) = mpsc::channel();
		let (reply_tx, reply_rx) = mpsc::channel();
		let latest_dispatched = Arc::new(AtomicU64::new(0));
		let worker_latest = Arc::clone(&latest_dispatched);

		thread::spawn(move || worker_loop(client, command_rx, reply_tx, worker_latest));

		Self::new(command_tx, reply_rx, latest_dispatched)
	}

	pub(crate) fn new(
		tx: Sender<SearchCommand>,
		rx: Receiver<SearchReply>,
		latest_dispatched: Arc<AtomicU64>,
	) -> Self {
		Self {
			tx,
			rx,
			latest_dispatched,
			next_id: 0,
			latest_id: None,
			in_flight: false,
		}
	}

	/// Hand a request to the worker under a fresh id.
	pub(crate) fn dispatch(&mut self, request: SearchRequest) {
		self.next_id = self.next_id.saturating_add(1);
		let id = self.next_id;
		self.latest_id = Some(id);
		self.in_flight = true;
		self.latest_dispatched.store(id, AtomicOrdering::Release);
		debug!(id, query = %request.query, page = request.page, "dispatching search");
		let _ = self.tx.send(SearchCommand::Fetch { id, request });
	}

	pub(crate) fn try_recv(&self) -> Result<SearchReply, TryRecvError> {
		self.rx.try_recv()
	}

	/// Whether `id` belongs to the most recent dispatch.
	pub(crate) fn matches_latest(&self, id: u64) -> bool {
		Some(id) == self.latest_id
	}

	/// Clear the loading flag once the latest request has settled.
	pub(crate) fn settle(&mut self) {
		self.in_flight = false;
	}

	pub(crate) fn is_loading(&self) -> bool {
		self.in_flight
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(SearchCommand::Shutdown);
	}
}

fn worker_loop(
	client: Client,
	commands: Receiver<SearchCommand>,
	replies: Sender<SearchReply>,
	latest_dispatched: Arc<AtomicU64>,
) {
	while let Ok(command) = commands.recv() {
		match command {
			SearchCommand::Fetch { id, request } => {
				// A newer command is already queued; skip the stale fetch.
				if latest_dispatched.load(AtomicOrdering::Acquire) > id {
					continue;
				}
				let outcome = client.search(request.endpoint(), &request);
				if let Err(err) = &outcome {
					warn!(id, error = %err, "search failed");
				}
				if replies.send(SearchReply { id, outcome }).is_err() {
					break;
				}
			}
			SearchCommand::Shutdown => break,
		}
	}
}
