use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use folio_core::ContentSink;
use folio_core::FolioResult;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Edit portfolio case studies stored as heading-delimited text.",
	long_about = "folio reads a case study as an ordered list of sections, resolves the render \
	              order against the media slots configured in `folio.toml`, and applies \
	              structural edits without losing saved content.\n\nQuick start:\n  folio \
	              sections study.md      List sections and how they render\n  folio append-card \
	              study.md   Print the study with a new card\n  folio append-card study.md \
	              --write\n                          Save the new card to the file"
)]
pub struct FolioCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Directory containing `folio.toml`. Defaults to the current directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output, including debug logs on stderr.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

/// The file to edit and how the result is persisted.
#[derive(Args, Debug, Clone)]
pub struct EditArgs {
	/// The case study file.
	pub file: PathBuf,

	/// Save the result to the file instead of printing it.
	#[arg(long, default_value_t = false)]
	pub write: bool,

	/// Show a unified diff between the current and the new text on stderr.
	#[arg(long, default_value_t = false)]
	pub diff: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// List the top-level sections and how each one is classified.
	Sections {
		/// The case study file.
		file: PathBuf,

		/// Output format. Use `text` for human-readable output or `json` for
		/// programmatic consumption.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// List the cards of the solution container in grid order.
	Cards {
		/// The case study file.
		file: PathBuf,
	},
	/// Print the render order: sections merged with the configured slots.
	///
	/// Slot positions are read from the `[slots]` table of `folio.toml` in
	/// the `--path` directory.
	Render {
		/// The case study file.
		file: PathBuf,

		/// Output format. Use `text` for human-readable output or `json` for
		/// programmatic consumption.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Collapse duplicate headings and drop orphaned placeholder text.
	Sanitize {
		#[command(flatten)]
		edit: EditArgs,
	},
	/// Append a numbered card to the solution container.
	///
	/// The container is created after the competitive analysis or research
	/// insights section when the study does not have one yet.
	AppendCard {
		#[command(flatten)]
		edit: EditArgs,
	},
	/// Remove a card by its exact heading text, e.g. `New Card 2`.
	RemoveCard {
		#[command(flatten)]
		edit: EditArgs,

		/// The card heading text.
		title: String,
	},
	/// Rename a section and replace its body.
	Rename {
		#[command(flatten)]
		edit: EditArgs,

		/// The current section title.
		old_title: String,

		/// The new section title.
		new_title: String,

		/// The new section body.
		#[arg(long, default_value = "")]
		body: String,
	},
	/// Delete a section together with its body.
	Delete {
		#[command(flatten)]
		edit: EditArgs,

		/// The section title.
		title: String,
	},
	/// Move the section at index `from` to index `to`. Indices are zero-based
	/// and clamp to the section count.
	Move {
		#[command(flatten)]
		edit: EditArgs,

		from: usize,

		to: usize,
	},
	/// Apply a JSON array of edit operations in order.
	///
	/// Each operation is an object tagged by `op`, for example
	/// `[{"op": "append_card"}, {"op": "delete_section", "title": "Draft"}]`.
	Apply {
		#[command(flatten)]
		edit: EditArgs,

		/// File containing the JSON operations.
		operations: PathBuf,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}

/// Persists each new authoritative text to the edited file. In dry-run mode
/// the updates are only counted and the caller prints the final text.
#[derive(Debug)]
pub struct FileSink {
	path: PathBuf,
	dry_run: bool,
	updates: usize,
}

impl FileSink {
	pub fn new(path: impl Into<PathBuf>, dry_run: bool) -> Self {
		Self {
			path: path.into(),
			dry_run,
			updates: 0,
		}
	}

	/// How many times the authoritative text changed.
	pub fn updates(&self) -> usize {
		self.updates
	}

	pub fn is_dry_run(&self) -> bool {
		self.dry_run
	}
}

impl ContentSink for FileSink {
	fn on_content_update(&mut self, text: &str) -> FolioResult<()> {
		if !self.dry_run {
			std::fs::write(&self.path, text)?;
		}
		self.updates += 1;
		Ok(())
	}
}
