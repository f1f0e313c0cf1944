//! Line-level helpers shared by the parsers and mutators.
//!
//! Every structural operation works on the raw document as a list of line
//! segments that keep their terminators, so joining the segments back
//! together reproduces the original bytes.

/// Split text into line segments, each keeping its trailing `\n` (the final
/// segment has none when the text does not end with a newline).
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
	text.split_inclusive('\n').collect()
}

/// The visible content of a line segment without its `\n` / `\r\n`.
pub(crate) fn content(segment: &str) -> &str {
	segment.trim_end_matches(['\n', '\r'])
}

pub(crate) fn is_blank(segment: &str) -> bool {
	content(segment).trim().is_empty()
}

/// Join owned or borrowed segments back into one string.
pub(crate) fn join<S: AsRef<str>>(segments: &[S]) -> String {
	let mut output = String::with_capacity(segments.iter().map(|s| s.as_ref().len()).sum());
	for segment in segments {
		output.push_str(segment.as_ref());
	}
	output
}

/// Make sure the segment ends with a newline so another line can follow it.
pub(crate) fn terminated(segment: &str) -> String {
	if segment.ends_with('\n') {
		segment.to_string()
	} else {
		format!("{segment}\n")
	}
}

/// Index one past the last non-blank segment in `start..end`, or `start` when
/// the whole range is blank.
pub(crate) fn trim_trailing_blank(segments: &[&str], start: usize, end: usize) -> usize {
	let mut index = end;
	while index > start && is_blank(segments[index - 1]) {
		index -= 1;
	}
	index
}
