use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use folio_cli::Commands;
use folio_cli::EditArgs;
use folio_cli::FileSink;
use folio_cli::FolioCli;
use folio_cli::OutputFormat;
use folio_core::AnyResult;
use folio_core::EditOperation;
use folio_core::EditOutcome;
use folio_core::Editor;
use folio_core::FolioConfig;
use folio_core::RenderItem;
use folio_core::cards;
use folio_core::classify;
use folio_core::heading::card_title;
use folio_core::next_card_number;
use folio_core::parse;
use folio_core::parse_operations;
use folio_core::parse_subsections;
use folio_core::resolve_text;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = FolioCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_tracing(args.verbose);

	let result = match &args.command {
		Some(Commands::Sections { file, format }) => run_sections(file, *format),
		Some(Commands::Cards { file }) => run_cards(file),
		Some(Commands::Render { file, format }) => run_render(&args, file, *format),
		Some(Commands::Sanitize { edit }) => run_single(edit, &EditOperation::Sanitize),
		Some(Commands::AppendCard { edit }) => run_append_card(edit),
		Some(Commands::RemoveCard { edit, title }) => {
			run_single(
				edit,
				&EditOperation::RemoveCard {
					title: title.clone(),
				},
			)
		}
		Some(Commands::Rename {
			edit,
			old_title,
			new_title,
			body,
		}) => {
			run_single(
				edit,
				&EditOperation::RenameSection {
					old_title: old_title.clone(),
					new_title: new_title.clone(),
					body: body.clone(),
				},
			)
		}
		Some(Commands::Delete { edit, title }) => {
			run_single(
				edit,
				&EditOperation::DeleteSection {
					title: title.clone(),
				},
			)
		}
		Some(Commands::Move { edit, from, to }) => {
			run_single(
				edit,
				&EditOperation::MoveSection {
					from: *from,
					to: *to,
				},
			)
		}
		Some(Commands::Apply { edit, operations }) => run_apply(edit, operations),
		None => {
			eprintln!("No subcommand specified. Run `folio --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<folio_core::FolioError>() {
			Ok(folio_err) => {
				let report: miette::Report = (*folio_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr. `--verbose` forces debug output, otherwise `RUST_LOG`
/// decides and warnings are shown by default.
fn init_tracing(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(color_enabled())
		.with_target(false)
		.without_time()
		.try_init()
		.ok();
}

fn resolve_root(args: &FolioCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn read_text(file: &Path) -> AnyResult<String> {
	let text = std::fs::read_to_string(file).map_err(folio_core::FolioError::from)?;
	Ok(text)
}

fn run_sections(file: &Path, format: OutputFormat) -> AnyResult<()> {
	let sections = parse(read_text(file)?);

	match format {
		OutputFormat::Json => {
			let entries: Vec<serde_json::Value> = sections
				.iter()
				.enumerate()
				.map(|(index, section)| {
					serde_json::json!({
						"index": index,
						"title": section.title,
						"kind": classify(section),
						"subsections": parse_subsections(&section.body).len(),
					})
				})
				.collect();
			println!("{}", serde_json::to_string_pretty(&entries)?);
		}
		OutputFormat::Text => {
			if sections.is_empty() {
				println!("No sections found.");
				return Ok(());
			}

			for (index, section) in sections.iter().enumerate() {
				println!(
					"{index:>3}  {} [{}]",
					colored!(section.title, bold),
					classify(section).label()
				);
			}
			println!("\n{} section(s)", sections.len());
		}
	}

	Ok(())
}

fn run_cards(file: &Path) -> AnyResult<()> {
	let cards = cards(read_text(file)?);

	if cards.is_empty() {
		println!("No cards found.");
		return Ok(());
	}

	for card in &cards {
		println!("  {}", card.name);
	}
	println!("\n{} card(s)", cards.len());

	Ok(())
}

fn run_render(args: &FolioCli, file: &Path, format: OutputFormat) -> AnyResult<()> {
	let root = resolve_root(args);
	let config = FolioConfig::load_or_default(&root)?;
	let text = read_text(file)?;
	let list = resolve_text(&text, &config.slots);

	if args.verbose {
		match FolioConfig::resolve_path(&root) {
			Some(path) => eprintln!("Using slot positions from {}", path.display()),
			None => eprintln!("No folio.toml found, using default slot positions"),
		}
	}

	match format {
		OutputFormat::Json => {
			println!("{}", serde_json::to_string_pretty(&list)?);
		}
		OutputFormat::Text => {
			for (index, item) in list.iter().enumerate() {
				println!("{index:>3}  {}", describe_item(item));
			}
		}
	}

	Ok(())
}

fn describe_item(item: &RenderItem) -> String {
	match item {
		RenderItem::Section(render) => {
			let mut line = format!(
				"section  {} [{}]",
				colored!(render.section.title, bold),
				render.kind.label()
			);
			if !render.cards.is_empty() {
				line.push_str(&format!(" with {} card(s)", render.cards.len()));
			}
			line
		}
		RenderItem::Slot(slot) => format!("slot     {}", slot.kind.label()),
		RenderItem::SolutionCards { cards } => format!("cards    {} card(s)", cards.len()),
		RenderItem::Sidebar { kind, sections } => {
			let titles: Vec<&str> = sections
				.iter()
				.map(|section| section.title.as_str())
				.collect();
			let titles = if titles.is_empty() {
				"(empty)".to_string()
			} else {
				titles.join(", ")
			};
			format!("sidebar  {}: {titles}", kind.label())
		}
	}
}

/// Apply operations through a file-backed editor, then print the new text
/// or report the write.
fn run_edit(
	edit: &EditArgs,
	text: String,
	operations: &[EditOperation],
) -> AnyResult<Vec<EditOutcome>> {
	let mut editor = Editor::with_sink(text.clone(), FileSink::new(&edit.file, !edit.write));
	let outcomes = editor.apply_all(operations)?;
	let (updated, sink) = editor.into_parts();
	let updates = sink.map_or(0, |sink| sink.updates());

	if edit.diff {
		print_diff(&text, &updated);
	}

	if !edit.write {
		print!("{updated}");
	} else if updates > 0 {
		println!("Updated {}", edit.file.display());
	} else {
		println!("No changes to {}", edit.file.display());
	}

	Ok(outcomes)
}

fn run_single(edit: &EditArgs, operation: &EditOperation) -> AnyResult<()> {
	let text = read_text(&edit.file)?;
	let outcomes = run_edit(edit, text, std::slice::from_ref(operation))?;

	for outcome in outcomes {
		report_outcome(edit, operation, outcome);
	}

	Ok(())
}

fn run_append_card(edit: &EditArgs) -> AnyResult<()> {
	let text = read_text(&edit.file)?;
	let number = next_card_number(&text);
	let outcomes = run_edit(edit, text, &[EditOperation::AppendCard])?;

	match (outcomes.first(), number) {
		(Some(EditOutcome::Applied), Some(number)) => {
			status(edit, &format!("Appended {}", card_title(number)));
		}
		(Some(outcome), _) => report_outcome(edit, &EditOperation::AppendCard, *outcome),
		(None, _) => {}
	}

	Ok(())
}

fn run_apply(edit: &EditArgs, operations: &Path) -> AnyResult<()> {
	let operations = parse_operations(&read_text(operations)?)?;
	let text = read_text(&edit.file)?;
	let outcomes = run_edit(edit, text, &operations)?;

	for (operation, outcome) in operations.iter().zip(outcomes) {
		report_outcome(edit, operation, outcome);
	}

	Ok(())
}

/// Status lines go to stderr while stdout carries the edited text.
fn status(edit: &EditArgs, message: &str) {
	if edit.write {
		println!("{message}");
	} else {
		eprintln!("{message}");
	}
}

fn report_outcome(edit: &EditArgs, operation: &EditOperation, outcome: EditOutcome) {
	match outcome {
		EditOutcome::Applied => {
			status(edit, &format!("{}: {}", operation.name(), colored!("applied", green)));
		}
		EditOutcome::Unchanged => {
			eprintln!(
				"{} {}: target not found, nothing changed",
				colored!("warning:", yellow),
				operation.name()
			);
		}
		EditOutcome::Aborted => {
			eprintln!(
				"{} {}: aborted, only the cleanup of the text was kept",
				colored!("warning:", yellow),
				operation.name()
			);
		}
	}
}

fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}
