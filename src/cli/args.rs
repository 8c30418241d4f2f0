use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use hnq::app_dirs;
use hnq_api::SortFilter;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("hnq {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "hnq",
	version,
	long_version = long_version(),
	about = "Interactive terminal search for Hacker News stories",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `hnq` binary.
pub(crate) struct CliArgs {
	#[arg(
		value_name = "QUERY",
		help = "Initial search query (default: none, start idle)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short,
		long,
		value_name = "N",
		help = "Result page to start on, 0-indexed (default: 0)"
	)]
	pub(crate) page: Option<u32>,
	#[arg(
		short,
		long,
		value_enum,
		value_name = "SORT",
		help = "Sort order for results (default: points)"
	)]
	pub(crate) sort: Option<SortArg>,
	#[arg(
		short,
		long,
		value_name = "LINK",
		help = "Restore a session from a share link (other flags override its parts)"
	)]
	pub(crate) link: Option<String>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "HNQ_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading the default configuration file (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "URL",
		env = "HNQ_BASE_URL",
		help = "Override the search API base address (default: the Algolia host)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: library theme)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(long, help = "List available theme names and exit")]
	pub(crate) list_themes: bool,
	#[arg(long, help = "Print the effective configuration before starting")]
	pub(crate) print_config: bool,
}

/// Sort orders accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortArg {
	/// Order results by points.
	Points,
	/// Order results by creation time.
	CreatedAt,
}

impl From<SortArg> for SortFilter {
	fn from(sort: SortArg) -> Self {
		match sort {
			SortArg::Points => Self::Points,
			SortArg::CreatedAt => Self::CreatedAt,
		}
	}
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn cli_definition_is_consistent() {
		CliArgs::command().debug_assert();
	}

	#[test]
	fn sort_values_map_onto_the_api_enum() {
		assert_eq!(SortFilter::from(SortArg::Points), SortFilter::Points);
		assert_eq!(SortFilter::from(SortArg::CreatedAt), SortFilter::CreatedAt);
	}
}
