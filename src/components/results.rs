//! Results pane: echoed query, sort selector, and the hit list.

use hnq_api::{Hit, SearchResult, SortFilter};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use time::UtcOffset;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::Theme;

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
	format_description!("[year]-[month]-[day] [hour]:[minute]");

/// Argument bundle for rendering the results pane.
pub(crate) struct ResultsContext<'a> {
	pub(crate) result: &'a SearchResult,
	pub(crate) sort: SortFilter,
	pub(crate) theme: &'a Theme,
	pub(crate) local_offset: UtcOffset,
}

pub(crate) fn render_results(
	frame: &mut Frame,
	area: Rect,
	ctx: ResultsContext<'_>,
	list_state: &mut ListState,
) {
	let [header_area, list_area] =
		Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(area);

	render_header(frame, header_area, &ctx);

	if ctx.result.hits.is_empty() {
		let empty = Paragraph::new("No results")
			.style(ctx.theme.empty)
			.alignment(Alignment::Center);
		frame.render_widget(empty, list_area);
		return;
	}

	let items: Vec<ListItem> = ctx
		.result
		.hits
		.iter()
		.map(|hit| hit_item(hit, &ctx, list_area.width))
		.collect();
	let list = List::new(items).highlight_style(ctx.theme.selected);
	frame.render_stateful_widget(list, list_area, list_state);
}

fn render_header(frame: &mut Frame, area: Rect, ctx: &ResultsContext<'_>) {
	let selector = sort_selector(ctx.sort, ctx.theme);
	let selector_width = selector.width() as u16;
	let [echo_area, sort_area] =
		Layout::horizontal([Constraint::Min(1), Constraint::Length(selector_width)]).areas(area);

	let echo = Paragraph::new(format!(
		"Showing results for \u{201c}{}\u{201d}",
		ctx.result.query
	))
	.style(ctx.theme.header);
	frame.render_widget(echo, echo_area);
	frame.render_widget(Paragraph::new(selector), sort_area);
}

/// Two-option selector with the active filter highlighted.
fn sort_selector(sort: SortFilter, theme: &Theme) -> Line<'static> {
	let style_for = |candidate: SortFilter| {
		if sort == candidate {
			theme.sort_active
		} else {
			theme.sort_inactive
		}
	};

	Line::from(vec![
		Span::styled("Sort: ", theme.header),
		Span::styled(
			format!(" {} ", SortFilter::Points.label()),
			style_for(SortFilter::Points),
		),
		Span::raw(" "),
		Span::styled(
			format!(" {} ", SortFilter::CreatedAt.label()),
			style_for(SortFilter::CreatedAt),
		),
	])
}

fn hit_item(hit: &Hit, ctx: &ResultsContext<'_>, width: u16) -> ListItem<'static> {
	let title = Line::styled(hit.title.clone(), ctx.theme.hit_title);

	let meta_text = format!(
		"  {} points by {} at {}",
		hit.points,
		hit.author,
		format_timestamp(hit.created_at_i, ctx.local_offset),
	);
	let mut meta = vec![Span::styled(meta_text.clone(), ctx.theme.hit_meta)];
	if !hit.url.is_empty() {
		let remaining = usize::from(width).saturating_sub(meta_text.width() + 3);
		meta.push(Span::styled(" \u{00b7} ", ctx.theme.hit_meta));
		meta.push(Span::styled(truncated(&hit.url, remaining), ctx.theme.hit_link));
	}

	ListItem::new(vec![title, Line::from(meta)])
}

/// Clip `text` to `width` columns, marking the cut with an ellipsis.
fn truncated(text: &str, width: usize) -> String {
	if text.width() <= width {
		return text.to_string();
	}

	let mut clipped = String::new();
	let mut used = 0;
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width + 1 > width {
			break;
		}
		clipped.push(ch);
		used += ch_width;
	}
	clipped.push('\u{2026}');
	clipped
}

/// Unix seconds to an absolute timestamp in the viewer's offset.
pub(crate) fn format_timestamp(unix_seconds: i64, offset: UtcOffset) -> String {
	match time::OffsetDateTime::from_unix_timestamp(unix_seconds) {
		Ok(moment) => moment
			.to_offset(offset)
			.format(TIMESTAMP_FORMAT)
			.unwrap_or_else(|_| unix_seconds.to_string()),
		Err(_) => unix_seconds.to_string(),
	}
}
