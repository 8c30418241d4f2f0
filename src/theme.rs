//! Color themes for the interface.

use ratatui::style::{Color, Modifier, Style};

/// Style palette used across the interface.
#[derive(Debug, Clone)]
pub struct Theme {
	pub prompt_border: Style,
	pub input: Style,
	pub placeholder: Style,
	pub cursor: Style,
	pub hint_enabled: Style,
	pub hint_disabled: Style,
	pub throbber: Style,
	pub header: Style,
	pub sort_active: Style,
	pub sort_inactive: Style,
	pub hit_title: Style,
	pub hit_meta: Style,
	pub hit_link: Style,
	pub selected: Style,
	pub pager_enabled: Style,
	pub pager_disabled: Style,
	pub pager_counter: Style,
	pub footer: Style,
	pub empty: Style,
	pub error_border: Style,
	pub error_body: Style,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			prompt_border: Style::default().fg(Color::DarkGray),
			input: Style::default().fg(Color::White),
			placeholder: Style::default().fg(Color::DarkGray),
			cursor: Style::default().add_modifier(Modifier::REVERSED),
			hint_enabled: Style::default().fg(Color::Green),
			hint_disabled: Style::default().fg(Color::DarkGray),
			throbber: Style::default().fg(Color::Yellow),
			header: Style::default().fg(Color::Gray),
			sort_active: Style::default()
				.fg(Color::Black)
				.bg(Color::Cyan)
				.add_modifier(Modifier::BOLD),
			sort_inactive: Style::default().fg(Color::DarkGray),
			hit_title: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
			hit_meta: Style::default().fg(Color::DarkGray),
			hit_link: Style::default()
				.fg(Color::Blue)
				.add_modifier(Modifier::UNDERLINED),
			selected: Style::default().bg(Color::Rgb(40, 40, 40)),
			pager_enabled: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
			pager_disabled: Style::default().fg(Color::DarkGray),
			pager_counter: Style::default().fg(Color::Gray),
			footer: Style::default().fg(Color::DarkGray),
			empty: Style::default().fg(Color::DarkGray),
			error_border: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
			error_body: Style::default().fg(Color::White),
		}
	}
}

fn light() -> Theme {
	Theme {
		prompt_border: Style::default().fg(Color::Gray),
		input: Style::default().fg(Color::Black),
		placeholder: Style::default().fg(Color::Gray),
		hint_enabled: Style::default().fg(Color::Green),
		hint_disabled: Style::default().fg(Color::Gray),
		throbber: Style::default().fg(Color::Magenta),
		header: Style::default().fg(Color::DarkGray),
		sort_active: Style::default()
			.fg(Color::White)
			.bg(Color::Blue)
			.add_modifier(Modifier::BOLD),
		sort_inactive: Style::default().fg(Color::Gray),
		hit_title: Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
		hit_meta: Style::default().fg(Color::Gray),
		selected: Style::default().bg(Color::Rgb(230, 230, 230)),
		pager_enabled: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
		pager_disabled: Style::default().fg(Color::Gray),
		pager_counter: Style::default().fg(Color::DarkGray),
		footer: Style::default().fg(Color::Gray),
		empty: Style::default().fg(Color::Gray),
		..Theme::default()
	}
}

/// Names accepted by [`by_name`], in display order.
#[must_use]
pub fn names() -> &'static [&'static str] {
	&["default", "light"]
}

/// Look up a built-in theme by name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	match name {
		"default" => Some(Theme::default()),
		"light" => Some(light()),
		_ => None,
	}
}
