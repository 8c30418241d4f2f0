use std::time::Duration;

use anyhow::{Context, Result, anyhow, ensure};
use config::{Config, File};
use serde::Deserialize;

use hnq::{AppConfig, Session, app_dirs, theme};
use hnq_api::{DEFAULT_BASE_URL, SortFilter};

use crate::cli::CliArgs;

const CONFIG_FILE: &str = "config.toml";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	api: ApiSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
	base_url: Option<String>,
	timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	sort: Option<SortFilter>,
}

/// Effective configuration after merging files and CLI flags.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	pub(crate) base_url: String,
	pub(crate) timeout: Duration,
	pub(crate) theme_name: Option<String>,
	pub(crate) session: Session,
}

/// Merge the default config file, any `--config` files, and CLI flags.
///
/// CLI flags win; a restored link supplies whatever the flags leave unset.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let raw = read_raw(cli)?;

	let base_url = cli
		.base_url
		.clone()
		.or(raw.api.base_url)
		.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
	ensure!(!base_url.trim().is_empty(), "api.base_url must not be empty");

	let timeout_ms = raw.api.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS);
	ensure!(timeout_ms > 0, "api.timeout_ms must be greater than zero");

	let mut session = match &cli.link {
		Some(link) => Session::from_link(link),
		None => Session::default(),
	};
	if let Some(query) = &cli.query {
		session.query = query.trim().to_string();
	}
	if let Some(page) = cli.page {
		session.page = page;
	}
	if let Some(sort) = cli.sort {
		session.sort = sort.into();
	} else if cli.link.is_none()
		&& let Some(sort) = raw.ui.sort
	{
		session.sort = sort;
	}

	let theme_name = cli.theme.clone().or(raw.ui.theme);

	Ok(ResolvedConfig {
		base_url,
		timeout: Duration::from_millis(timeout_ms),
		theme_name,
		session,
	})
}

fn read_raw(cli: &CliArgs) -> Result<RawConfig> {
	let mut builder = Config::builder();

	if !cli.no_config
		&& let Ok(dir) = app_dirs::get_config_dir()
	{
		builder = builder.add_source(File::from(dir.join(CONFIG_FILE)).required(false));
	}
	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()));
	}

	builder
		.build()
		.and_then(Config::try_deserialize)
		.context("failed to load configuration")
}

impl ResolvedConfig {
	/// Print a summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Base URL: {}", self.base_url);
		println!("  Timeout: {}ms", self.timeout.as_millis());
		println!(
			"  Theme: {}",
			self.theme_name.as_deref().unwrap_or("default")
		);
		println!(
			"  Query: {}",
			if self.session.query.is_empty() {
				"(none)"
			} else {
				&self.session.query
			}
		);
		println!("  Page: {}", self.session.page);
		println!("  Sort: {}", self.session.sort.label());
	}

	/// Resolve names into concrete values the application can start with.
	pub(crate) fn into_app_config(self) -> Result<AppConfig> {
		let theme = match self.theme_name.as_deref() {
			None => theme::Theme::default(),
			Some(name) => theme::by_name(name).ok_or_else(|| anyhow!("unknown theme: {name}"))?,
		};

		Ok(AppConfig {
			base_url: self.base_url,
			timeout: self.timeout,
			theme,
			session: self.session,
		})
	}
}
