use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum FolioError {
	#[error(transparent)]
	#[diagnostic(code(folio::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(folio::config_parse),
		help("check that folio.toml is valid TOML with an optional [slots] section")
	)]
	ConfigParse(String),

	#[error("no content sink is attached, the edit cannot be persisted")]
	#[diagnostic(
		code(folio::missing_content_sink),
		help("attach a `ContentSink` to the editor before applying operations")
	)]
	MissingContentSink,

	#[error("failed to read edit operations: {0}")]
	#[diagnostic(
		code(folio::invalid_operations),
		help(
			"operations are a JSON array of objects tagged by `op`, e.g. \
			 `[{{\"op\": \"append_card\"}}]`"
		)
	)]
	InvalidOperations(String),
}

pub type FolioResult<T> = Result<T, FolioError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
