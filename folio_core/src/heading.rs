//! Heading detection rules for case-study text.
//!
//! - A top-level heading is a line exactly `# Title`.
//! - A sub-heading is two or more `#`, whitespace, then text.
//! - A card heading is any heading whose text is `New Card <n>`.
//!
//! Sections and cards are identified by their title text. All title
//! comparisons go through [`titles_match`] so the identity rule lives in one
//! place.

use std::sync::LazyLock;

use regex::Regex;

use crate::lines;

static TOP_LEVEL_HEADING: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^# (.+)$").expect("invalid top-level heading regex"));
static SUB_HEADING: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^##+\s+(.+)$").expect("invalid sub-heading regex"));
static ANY_HEADING: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^#+\s+(.+)$").expect("invalid heading regex"));
static CARD_TITLE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^New Card (\d+)$").expect("invalid card title regex"));

/// Prefix of every card title.
pub const CARD_TITLE_PREFIX: &str = "New Card";

/// Title given to a synthesized container section.
pub const DEFAULT_CONTAINER_TITLE: &str = "The solution";

/// Section titles that render in a sidebar rather than the main flow.
pub const RESERVED_SIDEBAR_TITLES: [&str; 4] = ["Impact", "Tools", "At a glance", "Tech stack"];

/// The title of a top-level (`# `) heading line.
pub fn top_level_title(line: &str) -> Option<&str> {
	TOP_LEVEL_HEADING
		.captures(lines::content(line))
		.and_then(|captures| captures.get(1))
		.map(|title| title.as_str())
}

/// The title of a `##`-or-deeper heading line.
pub fn sub_heading_title(line: &str) -> Option<&str> {
	SUB_HEADING
		.captures(lines::content(line))
		.and_then(|captures| captures.get(1))
		.map(|title| title.as_str())
}

/// The title of a heading line of any level.
pub fn heading_title(line: &str) -> Option<&str> {
	ANY_HEADING
		.captures(lines::content(line))
		.and_then(|captures| captures.get(1))
		.map(|title| title.as_str())
}

pub fn is_heading(line: &str) -> bool {
	heading_title(line).is_some()
}

/// The card number of a `New Card <n>` title. Zero is not a valid card
/// number.
pub fn card_number(title: &str) -> Option<u32> {
	CARD_TITLE
		.captures(title.trim())
		.and_then(|captures| captures.get(1))
		.and_then(|number| number.as_str().parse::<u32>().ok())
		.filter(|number| *number > 0)
}

pub fn is_card_title(title: &str) -> bool {
	card_number(title).is_some()
}

/// The card number of a heading line of any level.
pub fn card_heading_number(line: &str) -> Option<u32> {
	heading_title(line).and_then(card_number)
}

pub fn card_title(number: u32) -> String {
	format!("{CARD_TITLE_PREFIX} {number}")
}

/// Whether a section title designates the solution container which holds the
/// cards.
pub fn is_container_title(title: &str) -> bool {
	let lower = title.to_lowercase();
	lower.contains("the solution") && !lower.contains("cards") && !lower.contains("new card")
}

pub fn is_reserved_sidebar_title(title: &str) -> bool {
	RESERVED_SIDEBAR_TITLES
		.iter()
		.any(|reserved| reserved.eq_ignore_ascii_case(title.trim()))
}

/// Title identity: exact, case-sensitive equality.
pub fn titles_match(candidate: &str, title: &str) -> bool {
	candidate == title
}

/// Index of the first title equal to `title`. Every lookup of a section by
/// its title goes through here.
pub fn find_title<'a>(titles: impl IntoIterator<Item = &'a str>, title: &str) -> Option<usize> {
	titles
		.into_iter()
		.position(|candidate| titles_match(candidate, title))
}
