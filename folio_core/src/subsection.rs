use serde::Deserialize;
use serde::Serialize;

use crate::heading;
use crate::lines;

/// A heading-delimited block nested inside a section body. Cards, research
/// insights, competitive-analysis entries and role breakdowns all use this
/// shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsection {
	/// Heading text after the `##` marker.
	pub name: String,
	/// Lines after the heading up to the next sub-heading.
	pub body: String,
}

impl Subsection {
	pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			body: body.into(),
		}
	}
}

/// Split a section body into its sub-sections.
pub fn parse_subsections(body: impl AsRef<str>) -> Vec<Subsection> {
	split_subsections(body).1
}

/// Split a section body into the text before the first sub-heading and the
/// sub-sections that follow it.
pub fn split_subsections(body: impl AsRef<str>) -> (String, Vec<Subsection>) {
	let mut intro = String::new();
	let mut subsections: Vec<Subsection> = vec![];

	for segment in lines::split_lines(body.as_ref()) {
		if let Some(name) = heading::sub_heading_title(segment) {
			subsections.push(Subsection::new(name, String::new()));
			continue;
		}

		match subsections.last_mut() {
			Some(current) => current.body.push_str(segment),
			None => intro.push_str(segment),
		}
	}

	(intro, subsections)
}
