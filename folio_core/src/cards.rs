//! Numbered cards inside the solution container.
//!
//! Cards are headings named `New Card <n>`. They live either as sub-headings
//! inside the container body or as top-level sections directly after the
//! container heading. Numbers only ever grow: a new card takes the highest
//! number found anywhere in the authoritative text plus one, so numbers freed
//! by deletions are never reused.

use crate::Section;
use crate::Subsection;
use crate::document::SectionSpan;
use crate::document::container_region;
use crate::document::section_spans;
use crate::heading;
use crate::lines;
use crate::parse;
use crate::parse_subsections;
use crate::sanitize;

/// Paragraph written under a synthesized container heading.
pub const DEFAULT_CONTAINER_BODY: &str =
	"Describe the solution and the key features that made it work.";

/// Placeholder body written under a new card heading.
pub fn default_card_body(number: u32) -> String {
	format!(
		"Add content for {} here.\n\nYou can use Markdown formatting:\n• **Bold text** for \
		 emphasis\n• *Italic text* for nuance\n• Bullet points for lists\n",
		heading::card_title(number)
	)
}

/// Result of [`append_card`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAppend {
	/// The new authoritative text. When the append was aborted this is the
	/// sanitized input.
	pub text: String,
	/// The number of the card that was added, `None` when aborted.
	pub number: Option<u32>,
}

impl CardAppend {
	pub fn is_appended(&self) -> bool {
		self.number.is_some()
	}
}

/// Every card number used by a heading anywhere in the text.
pub fn card_numbers(text: impl AsRef<str>) -> Vec<u32> {
	lines::split_lines(text.as_ref())
		.into_iter()
		.filter_map(heading::card_heading_number)
		.collect()
}

/// The number the next appended card receives, `None` on overflow.
pub fn next_card_number(text: impl AsRef<str>) -> Option<u32> {
	match card_numbers(text).into_iter().max() {
		Some(highest) => highest.checked_add(1),
		None => Some(1),
	}
}

/// Append a new numbered card after the last card of the container.
///
/// Pass the authoritative copy: the next number is computed from the text as
/// given, before sanitation, so a card dropped by the cleanup still reserves
/// its number.
pub fn append_card(authoritative: impl AsRef<str>) -> CardAppend {
	let authoritative = authoritative.as_ref();
	let sanitized = sanitize(authoritative);

	let Some(number) = next_card_number(authoritative) else {
		tracing::warn!("card numbers exhausted, not appending a card");
		return aborted(sanitized);
	};

	if card_numbers(&sanitized).contains(&number) {
		tracing::warn!(number, "card number already in use, not appending a card");
		return aborted(sanitized);
	}

	let with_container = ensure_container(&sanitized);
	let segments = lines::split_lines(&with_container);
	let spans = section_spans(&segments);
	let Some(region) = container_region(&spans) else {
		tracing::warn!("no container section after synthesis, not appending a card");
		return aborted(sanitized);
	};

	let insert_at = lines::trim_trailing_blank(&segments, region.heading + 1, region.end);
	let mut output: Vec<String> = segments[..insert_at]
		.iter()
		.map(|segment| (*segment).to_string())
		.collect();

	if let Some(last) = output.last_mut() {
		*last = lines::terminated(last);
	}

	output.push("\n".to_string());
	output.push("\n".to_string());
	output.push(format!("# {}\n", heading::card_title(number)));
	output.push("\n".to_string());
	output.push(default_card_body(number));

	let rest = &segments[insert_at..];
	if rest.first().is_some_and(|segment| !lines::is_blank(segment)) {
		output.push("\n".to_string());
	}
	output.extend(rest.iter().map(|segment| (*segment).to_string()));

	tracing::debug!(number, line = insert_at + 1, "appended card");

	CardAppend {
		text: lines::join(&output),
		number: Some(number),
	}
}

fn aborted(text: String) -> CardAppend {
	CardAppend { text, number: None }
}

/// Return the text with a container section, synthesizing one when missing.
///
/// A synthesized container goes after the last `Competitive analysis`
/// section, else the last `Research insights` section, else at the end.
pub fn ensure_container(text: impl AsRef<str>) -> String {
	let text = text.as_ref();
	let segments = lines::split_lines(text);
	let spans = section_spans(&segments);

	if container_region(&spans).is_some() {
		return text.to_string();
	}

	let insert_at = last_span_containing(&spans, "competitive analysis")
		.or_else(|| last_span_containing(&spans, "research insights"))
		.map_or(segments.len(), |span| span.end);

	let mut output: Vec<String> = segments[..insert_at]
		.iter()
		.map(|segment| (*segment).to_string())
		.collect();

	if let Some(last) = output.last_mut() {
		let needs_separator = !lines::is_blank(last);
		*last = lines::terminated(last);
		if needs_separator {
			output.push("\n".to_string());
		}
	}

	output.push(format!("# {}\n", heading::DEFAULT_CONTAINER_TITLE));
	output.push("\n".to_string());
	output.push(format!("{DEFAULT_CONTAINER_BODY}\n"));

	let rest = &segments[insert_at..];
	if !rest.is_empty() {
		output.push("\n".to_string());
	}
	output.extend(rest.iter().map(|segment| (*segment).to_string()));

	tracing::debug!(line = insert_at + 1, "synthesized container section");

	lines::join(&output)
}

fn last_span_containing<'a>(spans: &'a [SectionSpan], needle: &str) -> Option<&'a SectionSpan> {
	spans
		.iter()
		.rev()
		.find(|span| span.title.to_lowercase().contains(needle))
}

/// Remove the card whose heading text equals `card_title`, up to the next
/// heading of any level. Returns the text unchanged when no such card exists.
pub fn remove_card(authoritative: impl AsRef<str>, card_title: &str) -> String {
	let authoritative = authoritative.as_ref();
	let segments = lines::split_lines(authoritative);

	let Some(start) = segments.iter().position(|segment| {
		heading::heading_title(segment).is_some_and(|title| heading::titles_match(title, card_title))
	}) else {
		tracing::debug!(card_title, "card not found, nothing removed");
		return authoritative.to_string();
	};

	let end = segments[start + 1..]
		.iter()
		.position(|segment| heading::is_heading(segment))
		.map_or(segments.len(), |offset| start + 1 + offset);

	tracing::debug!(card_title, from = start + 1, to = end, "removed card");

	let mut kept = segments[..start].to_vec();
	kept.extend_from_slice(&segments[end..]);
	lines::join(&kept)
}

/// The grid entries of the container: every sub-section inside its body
/// followed by the card sections directly after it.
pub fn card_grid(sections: &[Section]) -> Vec<Subsection> {
	let Some(position) = sections
		.iter()
		.position(|section| heading::is_container_title(&section.title))
	else {
		return vec![];
	};

	let mut grid = parse_subsections(&sections[position].body);
	grid.extend(
		sections[position + 1..]
			.iter()
			.take_while(|section| heading::is_card_title(&section.title))
			.map(|section| Subsection::new(section.title.clone(), section.body.clone())),
	);
	grid
}

/// The grid entries of the container in raw text.
pub fn cards(text: impl AsRef<str>) -> Vec<Subsection> {
	card_grid(&parse(text))
}
