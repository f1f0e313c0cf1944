use crate::Section;

pub const SCENARIO_A: &str = "# Overview\nHello\n\n# The solution: A new direction\nIntro text\n";

pub const SCENARIO_A_APPENDED: &str = "# Overview\nHello\n\n# The solution: A new direction\nIntro \
                                       text\n\n\n# New Card 1\n\nAdd content for New Card 1 \
                                       here.\n\nYou can use Markdown formatting:\n• **Bold text** \
                                       for emphasis\n• *Italic text* for nuance\n• Bullet points \
                                       for lists\n";

pub const PLACEHOLDER_BODY_LINES: &str = "Add content for New Card 1 here.\n\nYou can use Markdown \
                                          formatting:\n• **Bold text** for emphasis\n• *Italic \
                                          text* for nuance\n• Bullet points for lists\n";

/// A complete case study with sidebar sections, a research grid and cards.
pub fn case_study() -> String {
	[
		"# Overview\n",
		"A redesign of the booking flow.\n",
		"\n",
		"# At a glance\n",
		"Role: Lead designer\n",
		"\n",
		"# Research insights\n",
		"## Users abandon at payment\n",
		"Most drop-offs happened on the payment step.\n",
		"\n",
		"## Trust matters\n",
		"Participants wanted visible security cues.\n",
		"\n",
		"# The solution: A new direction\n",
		"We rebuilt checkout around saved cards.\n",
		"\n",
		"# New Card 1\n",
		"One-tap payment.\n",
		"\n",
		"# New Card 3\n",
		"Visible security badges.\n",
		"\n",
		"# Outcome\n",
		"Conversion rose by 12%.\n",
		"\n",
		"# Impact\n",
		"## Impact\n",
		"Shipped to two million travellers.\n",
	]
	.concat()
}

pub fn four_sections() -> Vec<Section> {
	vec![
		Section::new("Alpha", "a\n"),
		Section::new("Beta", "b\n"),
		Section::new("Gamma", "c\n"),
		Section::new("Delta", "d\n"),
	]
}
