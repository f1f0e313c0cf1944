#![allow(dead_code)]

use std::path::Path;
use std::path::PathBuf;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub const STUDY: &str = "# Overview\nHello\n\n# The solution: A new direction\nIntro text\n";

pub const STUDY_WITH_CARDS: &str = "# Overview\nA redesign of the booking flow.\n\n# At a \
                                    glance\nRole: Lead designer\n\n# The solution\nWe rebuilt \
                                    checkout.\n\n# New Card 1\nOne-tap payment.\n\n# New Card \
                                    3\nVisible security badges.\n\n# Outcome\nConversion rose.\n";

pub fn folio_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("folio"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd
}

/// Write a case study into the directory and return its path.
pub fn write_study(dir: &Path, content: &str) -> std::io::Result<PathBuf> {
	let path = dir.join("study.md");
	std::fs::write(&path, content)?;
	Ok(path)
}
