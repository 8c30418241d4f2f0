mod cli;
mod settings;

use anyhow::Result;
use cli::parse_cli;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in hnq::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	// The terminal owns stderr once the UI starts, so a logging failure is
	// reported up front and the app carries on without it.
	match hnq::logging::initialize() {
		Ok(path) => tracing::info!(log = %path.display(), "logging initialized"),
		Err(err) => eprintln!("warning: file logging disabled: {err:#}"),
	}

	hnq::run(resolved.into_app_config()?)
}
