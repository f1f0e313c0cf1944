//! The host-facing edit boundary.
//!
//! An [`Editor`] owns the authoritative copy of a case study. Every
//! [`EditOperation`] is applied to that copy, never to a filtered display
//! view, and each result is handed to the host's [`ContentSink`] before it
//! becomes the base for the next operation.

use serde::Deserialize;
use serde::Serialize;

use crate::FolioError;
use crate::FolioResult;
use crate::RenderList;
use crate::SlotPositions;
use crate::append_card;
use crate::delete_section;
use crate::move_section_in_text;
use crate::remove_card;
use crate::rename_and_edit;
use crate::resolve_text;
use crate::sanitize;

/// Receives every new authoritative text so the host can persist it.
pub trait ContentSink {
	fn on_content_update(&mut self, text: &str) -> FolioResult<()>;
}

/// Records every update in memory.
impl ContentSink for Vec<String> {
	fn on_content_update(&mut self, text: &str) -> FolioResult<()> {
		self.push(text.to_string());
		Ok(())
	}
}

/// A single edit requested by the host.
///
/// ```json
/// [
///   { "op": "append_card" },
///   { "op": "rename_section", "old_title": "New Card 1", "new_title": "Search", "body": "Fast.\n" },
///   { "op": "move_section", "from": 3, "to": 1 }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOperation {
	AppendCard,
	RemoveCard {
		title: String,
	},
	RenameSection {
		old_title: String,
		new_title: String,
		#[serde(default)]
		body: String,
	},
	DeleteSection {
		title: String,
	},
	MoveSection {
		from: usize,
		to: usize,
	},
	Sanitize,
}

impl EditOperation {
	/// Structural operations add, remove or reorder sections and run the
	/// sanitizer first.
	pub fn is_structural(&self) -> bool {
		matches!(
			self,
			Self::AppendCard | Self::RemoveCard { .. } | Self::DeleteSection { .. } | Self::MoveSection { .. }
		)
	}

	pub fn name(&self) -> &'static str {
		match self {
			Self::AppendCard => "append_card",
			Self::RemoveCard { .. } => "remove_card",
			Self::RenameSection { .. } => "rename_section",
			Self::DeleteSection { .. } => "delete_section",
			Self::MoveSection { .. } => "move_section",
			Self::Sanitize => "sanitize",
		}
	}
}

/// Read a JSON array of operations.
pub fn parse_operations(json: &str) -> FolioResult<Vec<EditOperation>> {
	serde_json::from_str(json).map_err(|e| FolioError::InvalidOperations(e.to_string()))
}

/// What an applied operation did to the authoritative copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditOutcome {
	/// The text changed and the sink was notified.
	Applied,
	/// The target was not found or the edit had no effect.
	Unchanged,
	/// A card append was refused to avoid a duplicate number. Any sanitizer
	/// cleanup was still persisted.
	Aborted,
}

/// Apply one operation to the authoritative text. Returns the new text and
/// whether the operation was aborted.
pub fn apply_operation(authoritative: &str, operation: &EditOperation) -> (String, bool) {
	match operation {
		EditOperation::AppendCard => {
			let result = append_card(authoritative);
			let aborted = !result.is_appended();
			(result.text, aborted)
		}
		EditOperation::RemoveCard { title } => (remove_card(sanitize(authoritative), title), false),
		EditOperation::RenameSection {
			old_title,
			new_title,
			body,
		} => (
			rename_and_edit(authoritative, old_title, new_title, body),
			false,
		),
		EditOperation::DeleteSection { title } => {
			(delete_section(sanitize(authoritative), title), false)
		}
		EditOperation::MoveSection { from, to } => {
			(move_section_in_text(sanitize(authoritative), *from, *to), false)
		}
		EditOperation::Sanitize => (sanitize(authoritative), false),
	}
}

/// Holds the authoritative copy and applies edits to it one at a time.
#[derive(Debug)]
pub struct Editor<S> {
	authoritative: String,
	sink: Option<S>,
}

impl<S: ContentSink> Editor<S> {
	/// An editor without a sink. Every operation fails until one is attached.
	pub fn new(authoritative: impl Into<String>) -> Self {
		Self {
			authoritative: authoritative.into(),
			sink: None,
		}
	}

	pub fn with_sink(authoritative: impl Into<String>, sink: S) -> Self {
		Self {
			authoritative: authoritative.into(),
			sink: Some(sink),
		}
	}

	pub fn attach_sink(&mut self, sink: S) {
		self.sink = Some(sink);
	}

	/// The last text confirmed by the sink.
	pub fn authoritative(&self) -> &str {
		&self.authoritative
	}

	pub fn into_parts(self) -> (String, Option<S>) {
		(self.authoritative, self.sink)
	}

	/// Apply an operation to the authoritative copy and persist the result
	/// through the sink.
	///
	/// Fails with [`FolioError::MissingContentSink`] when no sink is attached,
	/// leaving the document untouched. When the sink itself fails the
	/// authoritative copy is not replaced.
	pub fn apply(&mut self, operation: &EditOperation) -> FolioResult<EditOutcome> {
		let Some(sink) = self.sink.as_mut() else {
			tracing::warn!(
				operation = operation.name(),
				"no content sink attached, edit not applied"
			);
			return Err(FolioError::MissingContentSink);
		};

		let (text, aborted) = apply_operation(&self.authoritative, operation);

		if text == self.authoritative {
			tracing::debug!(operation = operation.name(), "edit left the text unchanged");
			return Ok(if aborted {
				EditOutcome::Aborted
			} else {
				EditOutcome::Unchanged
			});
		}

		sink.on_content_update(&text)?;
		self.authoritative = text;
		tracing::debug!(operation = operation.name(), aborted, "edit persisted");

		Ok(if aborted {
			EditOutcome::Aborted
		} else {
			EditOutcome::Applied
		})
	}

	/// Apply operations strictly in order, stopping at the first error.
	pub fn apply_all(&mut self, operations: &[EditOperation]) -> FolioResult<Vec<EditOutcome>> {
		operations
			.iter()
			.map(|operation| self.apply(operation))
			.collect()
	}

	/// The render list for the current authoritative copy.
	pub fn display(&self, positions: &SlotPositions) -> RenderList {
		resolve_text(&self.authoritative, positions)
	}
}
