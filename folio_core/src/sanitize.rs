//! Self-healing cleanup that runs before every structural mutation.
//!
//! Two kinds of debris build up when edits are applied repeatedly to the
//! same text:
//!
//! - the same top-level heading inserted twice in a row with nothing but
//!   blank lines between the copies;
//! - the default placeholder paragraph of a card left behind after its
//!   heading was deleted, now glued to the end of whatever precedes it.
//!
//! [`sanitize`] removes both without reporting anything and is idempotent.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::container_region;
use crate::document::section_spans;
use crate::heading;
use crate::lines;

/// Each pattern matches one whole line of [`default_card_body`], so author
/// text that merely starts the same way is never treated as debris.
///
/// [`default_card_body`]: crate::default_card_body
static PLACEHOLDER_LINES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
	[
		r"^Add content for New Card \d+ here\.$",
		r"(?i)^You can use (\*\*)?Markdown(\*\*)? formatting:?$",
		r"^[•*-]\s+\*\*Bold text\*\*\s+for emphasis$",
		r"^[•*-]\s+\*Italic text\*\s+for nuance$",
		r"^[•*-]\s+Bullet points for lists$",
	]
	.into_iter()
	.map(|pattern| Regex::new(pattern).expect("invalid placeholder regex"))
	.collect()
});

/// Whether a line is part of the default placeholder text of a card.
pub fn is_placeholder_line(line: &str) -> bool {
	let trimmed = lines::content(line).trim();
	!trimmed.is_empty()
		&& PLACEHOLDER_LINES
			.iter()
			.any(|pattern| pattern.is_match(trimmed))
}

/// Clean up duplicate headings and orphaned placeholder text.
pub fn sanitize(text: impl AsRef<str>) -> String {
	let text = text.as_ref();
	let collapsed = collapse_duplicate_headings(text);
	let cleaned = remove_orphan_placeholders(&collapsed);

	if cleaned != text {
		tracing::debug!(
			removed_bytes = text.len().saturating_sub(cleaned.len()),
			"sanitized case study text"
		);
	}

	cleaned
}

/// Drop a top-level heading that repeats the previous heading with only blank
/// lines in between.
pub fn collapse_duplicate_headings(text: &str) -> String {
	let mut kept: Vec<&str> = vec![];
	let mut previous_heading: Option<&str> = None;

	for (index, segment) in lines::split_lines(text).into_iter().enumerate() {
		if let Some(title) = heading::top_level_title(segment) {
			if previous_heading == Some(title) {
				tracing::trace!(line = index + 1, title, "removing duplicate heading");
				continue;
			}

			previous_heading = Some(title);
		} else if !lines::is_blank(segment) {
			previous_heading = None;
		}

		kept.push(segment);
	}

	lines::join(&kept)
}

/// Delete placeholder runs inside the container region that no longer sit
/// directly under a heading of their own.
pub fn remove_orphan_placeholders(text: &str) -> String {
	let segments = lines::split_lines(text);
	let spans = section_spans(&segments);
	let Some(region) = container_region(&spans) else {
		return text.to_string();
	};

	let mut removed: Vec<(usize, usize)> = vec![];
	let mut index = region.heading + 1;

	while index < region.end {
		if !is_placeholder_line(segments[index]) {
			index += 1;
			continue;
		}

		let run_start = index;
		let mut run_end = index + 1;
		let mut cursor = index + 1;
		while cursor < region.end
			&& (is_placeholder_line(segments[cursor]) || lines::is_blank(segments[cursor]))
		{
			if is_placeholder_line(segments[cursor]) {
				run_end = cursor + 1;
			}
			cursor += 1;
		}

		// The container heading always precedes the region body, so the search
		// for the previous non-blank line stops there at the latest.
		let mut leading = run_start;
		while leading > region.heading + 1 && lines::is_blank(segments[leading - 1]) {
			leading -= 1;
		}

		if !heading::is_heading(segments[leading - 1]) {
			tracing::trace!(
				from = leading + 1,
				to = run_end,
				"removing orphaned placeholder text"
			);
			removed.push((leading, run_end));
		}

		index = run_end;
	}

	if removed.is_empty() {
		return text.to_string();
	}

	let kept: Vec<&str> = segments
		.iter()
		.enumerate()
		.filter(|(index, _)| {
			!removed
				.iter()
				.any(|(start, end)| (*start..*end).contains(index))
		})
		.map(|(_, segment)| *segment)
		.collect();

	lines::join(&kept)
}
