use crate::Section;
use crate::document::SectionSpan;
use crate::document::section_spans;
use crate::heading;
use crate::lines;

fn find_span<'a>(spans: &'a [SectionSpan], title: &str) -> Option<&'a SectionSpan> {
	heading::find_title(spans.iter().map(|span| span.title.as_str()), title)
		.map(|index| &spans[index])
}

/// Replace the heading and body of the section titled `old_title`.
///
/// Other sections pass through untouched. Returns the text unchanged when
/// `old_title` is not present.
pub fn rename_and_edit(
	text: impl AsRef<str>,
	old_title: &str,
	new_title: &str,
	new_body: &str,
) -> String {
	let text = text.as_ref();
	let segments = lines::split_lines(text);
	let spans = section_spans(&segments);

	let Some(span) = find_span(&spans, old_title) else {
		tracing::debug!(old_title, "section not found, nothing renamed");
		return text.to_string();
	};

	let rest = &segments[span.end..];
	let mut output = lines::join(&segments[..span.heading]);
	output.push_str("# ");
	output.push_str(new_title);
	output.push('\n');
	output.push_str(new_body);

	if !rest.is_empty() && !new_body.is_empty() && !new_body.ends_with('\n') {
		output.push('\n');
	}
	output.push_str(&lines::join(rest));

	tracing::debug!(old_title, new_title, "renamed section");

	output
}

/// Remove the section titled `title` together with its body. Returns the text
/// unchanged when `title` is not present.
pub fn delete_section(text: impl AsRef<str>, title: &str) -> String {
	let text = text.as_ref();
	let segments = lines::split_lines(text);
	let spans = section_spans(&segments);

	let Some(span) = find_span(&spans, title) else {
		tracing::debug!(title, "section not found, nothing deleted");
		return text.to_string();
	};

	tracing::debug!(
		title,
		from = span.heading + 1,
		to = span.end,
		"deleted section"
	);

	let mut kept = segments[..span.heading].to_vec();
	kept.extend_from_slice(&segments[span.end..]);
	lines::join(&kept)
}

/// Move the element at `from` to `to`. Both indices clamp to the list bounds.
pub fn move_item<T>(mut items: Vec<T>, from: usize, to: usize) -> Vec<T> {
	let Some(last) = items.len().checked_sub(1) else {
		return items;
	};

	let from = from.min(last);
	let to = to.min(last);
	if from != to {
		let item = items.remove(from);
		items.insert(to, item);
	}

	items
}

/// Reorder parsed sections. The caller serializes the result.
pub fn move_section(sections: Vec<Section>, from: usize, to: usize) -> Vec<Section> {
	move_item(sections, from, to)
}

/// Reorder the sections of raw text, keeping any text before the first
/// heading in place and every section byte-for-byte.
pub fn move_section_in_text(text: impl AsRef<str>, from: usize, to: usize) -> String {
	let text = text.as_ref();
	let segments = lines::split_lines(text);
	let spans = section_spans(&segments);

	let Some(first) = spans.first() else {
		return text.to_string();
	};

	let chunks: Vec<String> = spans
		.iter()
		.map(|span| lines::join(&segments[span.heading..span.end]))
		.collect();
	let chunks = move_item(chunks, from, to);

	let mut output = lines::join(&segments[..first.heading]);
	for (index, chunk) in chunks.iter().enumerate() {
		if index + 1 == chunks.len() {
			output.push_str(chunk);
		} else {
			output.push_str(&lines::terminated(chunk));
		}
	}

	tracing::debug!(from, to, "moved section");

	output
}
