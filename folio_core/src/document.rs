use serde::Deserialize;
use serde::Serialize;

use crate::heading;
use crate::lines;

/// A top-level, heading-delimited block of a case study.
///
/// The body keeps its line terminators, so serializing a list of unmodified
/// sections reproduces the text they were parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
	/// Heading text after the `# ` marker.
	pub title: String,
	/// Every line after the heading up to the next top-level heading.
	pub body: String,
}

impl Section {
	pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			body: body.into(),
		}
	}

	/// Whether the body has no visible content.
	pub fn is_empty(&self) -> bool {
		self.body.trim().is_empty()
	}
}

/// Line coordinates of one section inside a list of line segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SectionSpan {
	pub title: String,
	/// Index of the heading line.
	pub heading: usize,
	/// Index one past the last body line.
	pub end: usize,
}

impl SectionSpan {
	pub fn body_start(&self) -> usize {
		self.heading + 1
	}
}

/// Locate every top-level section in a list of line segments.
pub(crate) fn section_spans(segments: &[&str]) -> Vec<SectionSpan> {
	let mut spans: Vec<SectionSpan> = vec![];

	for (index, segment) in segments.iter().enumerate() {
		let Some(title) = heading::top_level_title(segment) else {
			continue;
		};

		if let Some(previous) = spans.last_mut() {
			previous.end = index;
		}

		spans.push(SectionSpan {
			title: title.to_string(),
			heading: index,
			end: segments.len(),
		});
	}

	spans
}

/// Line coordinates of the solution container and the cards that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ContainerRegion {
	/// Index of the container heading line.
	pub heading: usize,
	/// Index one past the last card section directly following the container.
	pub end: usize,
}

/// Locate the first container section and the card sections that directly
/// follow it.
pub(crate) fn container_region(spans: &[SectionSpan]) -> Option<ContainerRegion> {
	let position = spans
		.iter()
		.position(|span| heading::is_container_title(&span.title))?;
	let container = &spans[position];
	let end = spans[position + 1..]
		.iter()
		.take_while(|span| heading::is_card_title(&span.title))
		.last()
		.map_or(container.end, |span| span.end);

	Some(ContainerRegion {
		heading: container.heading,
		end,
	})
}

/// Split raw text into its ordered top-level sections.
///
/// Text before the first heading does not belong to any section. A `## Impact`
/// line inside a section titled `Impact` is dropped.
pub fn parse(text: impl AsRef<str>) -> Vec<Section> {
	let segments = lines::split_lines(text.as_ref());

	section_spans(&segments)
		.into_iter()
		.map(|span| {
			let drop_impact_heading = span.title == "Impact";
			let body = segments[span.body_start()..span.end]
				.iter()
				.filter(|segment| {
					!(drop_impact_heading && lines::content(segment).trim() == "## Impact")
				})
				.copied()
				.collect::<String>();

			Section {
				title: span.title,
				body,
			}
		})
		.collect()
}

/// Write sections back to raw text.
///
/// A body that does not end with a newline gets one when another section
/// follows it, so headings never run into the previous body.
pub fn serialize(sections: &[Section]) -> String {
	let mut output = String::new();

	for (index, section) in sections.iter().enumerate() {
		output.push_str("# ");
		output.push_str(&section.title);
		output.push('\n');
		output.push_str(&section.body);

		let is_last = index + 1 == sections.len();
		if !is_last && !section.body.is_empty() && !section.body.ends_with('\n') {
			output.push('\n');
		}
	}

	output
}
