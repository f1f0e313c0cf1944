//! Render order for a case study.
//!
//! The host renders the page from a [`RenderList`]: the primary sections of
//! the document, classified once, merged with non-text slots (galleries, the
//! solution card grid, sidebars) at host-configured positions.

use derive_more::Deref;
use serde::Deserialize;
use serde::Serialize;

use crate::Section;
use crate::SectionKind;
use crate::Subsection;
use crate::card_grid;
use crate::classify;
use crate::heading;
use crate::parse;

/// Title of the section the sidebars attach to.
pub const OVERVIEW_TITLE: &str = "Overview";

/// The kinds of non-text content a host can place in the render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
	ProjectImages,
	Videos,
	FlowDiagrams,
	SolutionCards,
	AtAGlance,
	Impact,
}

impl SlotKind {
	pub fn label(self) -> &'static str {
		match self {
			Self::ProjectImages => "project_images",
			Self::Videos => "videos",
			Self::FlowDiagrams => "flow_diagrams",
			Self::SolutionCards => "solution_cards",
			Self::AtAGlance => "at_a_glance",
			Self::Impact => "impact",
		}
	}

	/// Sidebars ignore their position and always follow the overview.
	pub fn is_sidebar(self) -> bool {
		matches!(self, Self::AtAGlance | Self::Impact)
	}

	pub fn is_gallery(self) -> bool {
		matches!(self, Self::ProjectImages | Self::Videos | Self::FlowDiagrams)
	}

	/// Reserved section titles a sidebar displays.
	pub fn sidebar_titles(self) -> &'static [&'static str] {
		match self {
			Self::AtAGlance => &["At a glance", "Tools", "Tech stack"],
			Self::Impact => &["Impact"],
			_ => &[],
		}
	}
}

/// A host-supplied placeholder inserted into the render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
	pub kind: SlotKind,
	/// Index in the merged list. Values outside the list clamp to its ends.
	pub position: i64,
}

impl Slot {
	pub fn new(kind: SlotKind, position: i64) -> Self {
		Self { kind, position }
	}
}

/// Slot configuration supplied by the host, usually from the `[slots]` table
/// of `folio.toml`.
///
/// ```toml
/// [slots]
/// project_images_position = 2
/// videos_position = 4
/// at_a_glance = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPositions {
	#[serde(default)]
	pub project_images_position: Option<i64>,
	#[serde(default)]
	pub videos_position: Option<i64>,
	#[serde(default)]
	pub flow_diagrams_position: Option<i64>,
	#[serde(default)]
	pub solution_cards_position: Option<i64>,
	/// Show the "at a glance" sidebar after the overview.
	#[serde(default = "default_enabled")]
	pub at_a_glance: bool,
	/// Show the impact sidebar after the overview.
	#[serde(default = "default_enabled")]
	pub impact: bool,
}

fn default_enabled() -> bool {
	true
}

impl Default for SlotPositions {
	fn default() -> Self {
		Self {
			project_images_position: None,
			videos_position: None,
			flow_diagrams_position: None,
			solution_cards_position: None,
			at_a_glance: true,
			impact: true,
		}
	}
}

impl SlotPositions {
	/// The configured slots. Sidebars carry position `0`, which the resolver
	/// ignores.
	pub fn slots(&self) -> Vec<Slot> {
		let positioned = [
			(SlotKind::ProjectImages, self.project_images_position),
			(SlotKind::Videos, self.videos_position),
			(SlotKind::FlowDiagrams, self.flow_diagrams_position),
			(SlotKind::SolutionCards, self.solution_cards_position),
		];

		let mut slots: Vec<Slot> = positioned
			.into_iter()
			.filter_map(|(kind, position)| position.map(|position| Slot::new(kind, position)))
			.collect();

		if self.at_a_glance {
			slots.push(Slot::new(SlotKind::AtAGlance, 0));
		}
		if self.impact {
			slots.push(Slot::new(SlotKind::Impact, 0));
		}

		slots
	}
}

/// A primary section ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderSection {
	pub section: Section,
	pub kind: SectionKind,
	/// The card grid, only on the container and only when no solution-cards
	/// slot renders the grid elsewhere.
	pub cards: Vec<Subsection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderItem {
	Section(RenderSection),
	/// A gallery slot. The host fills it with its media.
	Slot(Slot),
	SolutionCards { cards: Vec<Subsection> },
	Sidebar {
		kind: SlotKind,
		sections: Vec<Section>,
	},
}

impl RenderItem {
	pub fn section_title(&self) -> Option<&str> {
		match self {
			Self::Section(render) => Some(render.section.title.as_str()),
			_ => None,
		}
	}
}

/// Ordered items the host renders from top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deref)]
#[serde(transparent)]
pub struct RenderList(Vec<RenderItem>);

impl RenderList {
	pub fn into_inner(self) -> Vec<RenderItem> {
		self.0
	}
}

/// Merge the primary sections with the host's slots.
///
/// Sidebar sections, card sections folded into the container and empty
/// sections are left out of the primary flow. Positioned slots are spliced in
/// ascending order at their clamped position. Sidebars go directly after the
/// `Overview` section and are dropped when there is none.
///
/// Slot positions index the list before the sidebars are added. With both
/// sidebars enabled, a slot at position `2` behind the overview ends up at
/// index `4` of the result.
pub fn resolve(sections: &[Section], slots: &[Slot]) -> RenderList {
	let container = sections
		.iter()
		.position(|section| heading::is_container_title(&section.title));
	let folded_until = container.map_or(0, |position| {
		let folded = sections[position + 1..]
			.iter()
			.take_while(|section| heading::is_card_title(&section.title))
			.count();
		position + 1 + folded
	});
	let cards_slotted = slots
		.iter()
		.any(|slot| slot.kind == SlotKind::SolutionCards);
	let grid = card_grid(sections);

	let mut items: Vec<RenderItem> = vec![];

	for (index, section) in sections.iter().enumerate() {
		if heading::is_reserved_sidebar_title(&section.title) {
			continue;
		}

		let is_container = container == Some(index);
		if container.is_some_and(|position| index > position && index < folded_until) {
			continue;
		}

		let cards = if is_container && !cards_slotted {
			grid.clone()
		} else {
			vec![]
		};

		if section.is_empty() && cards.is_empty() {
			continue;
		}

		items.push(RenderItem::Section(RenderSection {
			section: section.clone(),
			kind: classify(section),
			cards,
		}));
	}

	let mut positioned: Vec<&Slot> = slots.iter().filter(|slot| !slot.kind.is_sidebar()).collect();
	positioned.sort_by_key(|slot| slot.position);

	for slot in positioned {
		let index = clamp_position(slot.position, items.len());
		let item = if slot.kind.is_gallery() {
			RenderItem::Slot(*slot)
		} else {
			RenderItem::SolutionCards { cards: grid.clone() }
		};
		items.insert(index, item);
	}

	let overview = heading::find_title(
		items
			.iter()
			.map(|item| item.section_title().unwrap_or_default()),
		OVERVIEW_TITLE,
	);

	match overview {
		Some(position) => {
			let sidebars = slots.iter().filter(|slot| slot.kind.is_sidebar());
			for (offset, slot) in sidebars.enumerate() {
				items.insert(
					position + 1 + offset,
					RenderItem::Sidebar {
						kind: slot.kind,
						sections: sidebar_sections(sections, slot.kind),
					},
				);
			}
		}
		None => {
			if slots.iter().any(|slot| slot.kind.is_sidebar()) {
				tracing::debug!("no overview section, sidebars omitted");
			}
		}
	}

	RenderList(items)
}

/// Parse raw text and resolve it against the configured slots.
pub fn resolve_text(text: impl AsRef<str>, positions: &SlotPositions) -> RenderList {
	resolve(&parse(text), &positions.slots())
}

fn clamp_position(position: i64, len: usize) -> usize {
	usize::try_from(position.max(0)).map_or(len, |position| position.min(len))
}

fn sidebar_sections(sections: &[Section], kind: SlotKind) -> Vec<Section> {
	sections
		.iter()
		.filter(|section| {
			kind.sidebar_titles()
				.iter()
				.any(|title| title.eq_ignore_ascii_case(section.title.trim()))
		})
		.cloned()
		.collect()
}
