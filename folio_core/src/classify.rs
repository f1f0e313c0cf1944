use serde::Deserialize;
use serde::Serialize;

use crate::Section;
use crate::heading;
use crate::parse_subsections;

/// Longest sub-heading accepted by the key-features heuristic.
pub const MAX_FEATURE_NAME_CHARS: usize = 60;
/// Longest sub-section body accepted by the key-features heuristic.
pub const MAX_FEATURE_BODY_CHARS: usize = 600;

const DECORATIVE_KEYWORDS: [&str; 9] = [
	"overview",
	"challenge",
	"problem",
	"goal",
	"outcome",
	"result",
	"takeaway",
	"reflection",
	"learning",
];

/// How a section is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
	/// A grid of short feature cards.
	KeyFeatures,
	/// A grid of research findings.
	ResearchInsights,
	/// A grid of competitor entries.
	CompetitiveAnalysis,
	/// A breakdown of the author's role and impact.
	RoleAndImpact,
	/// Prose with decorative styling.
	Decorative,
	Plain,
}

impl SectionKind {
	/// The `snake_case` name also used in serialized output.
	pub fn label(self) -> &'static str {
		match self {
			Self::KeyFeatures => "key_features",
			Self::ResearchInsights => "research_insights",
			Self::CompetitiveAnalysis => "competitive_analysis",
			Self::RoleAndImpact => "role_and_impact",
			Self::Decorative => "decorative",
			Self::Plain => "plain",
		}
	}
}

/// Classify a section by its title, falling back to the shape of its body.
pub fn classify(section: &Section) -> SectionKind {
	let title = section.title.to_lowercase();

	if title.contains("research insight") {
		return SectionKind::ResearchInsights;
	}

	if title.contains("competitive analysis") {
		return SectionKind::CompetitiveAnalysis;
	}

	if title.contains("my role") || (title.contains("role") && title.contains("impact")) {
		return SectionKind::RoleAndImpact;
	}

	if heading::is_container_title(&section.title)
		|| title.contains("key feature")
		|| is_key_features_section(section)
	{
		return SectionKind::KeyFeatures;
	}

	if DECORATIVE_KEYWORDS
		.iter()
		.any(|keyword| title.contains(keyword))
	{
		return SectionKind::Decorative;
	}

	SectionKind::Plain
}

/// At least two sub-sections, each with a short heading and a non-empty body
/// of bounded length.
pub fn is_key_features_section(section: &Section) -> bool {
	let subsections = parse_subsections(&section.body);

	subsections.len() >= 2
		&& subsections.iter().all(|subsection| {
			let body = subsection.body.trim();
			subsection.name.trim().chars().count() <= MAX_FEATURE_NAME_CHARS
				&& !body.is_empty()
				&& body.chars().count() <= MAX_FEATURE_BODY_CHARS
		})
}
