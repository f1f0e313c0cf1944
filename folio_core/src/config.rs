use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::FolioError;
use crate::FolioResult;
use crate::SlotPositions;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["folio.toml", ".folio.toml", ".config/folio.toml"];

/// Configuration loaded from a `folio.toml` file.
///
/// ```toml
/// [slots]
/// project_images_position = 2
/// videos_position = 4
/// flow_diagrams_position = 5
/// solution_cards_position = 3
/// at_a_glance = true
/// impact = false
/// ```
///
/// Every key is optional. Positions that are absent leave their slot out of
/// the render list. Both sidebars are enabled unless switched off.
#[derive(Debug, Default, Deserialize)]
pub struct FolioConfig {
	/// Where non-text content is placed in the render order.
	#[serde(default)]
	pub slots: SlotPositions,
}

impl FolioConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if the file does not exist.
	pub fn load(root: &Path) -> FolioResult<Option<FolioConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::from_toml(&content)?;
		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	/// Load the config at `root`, falling back to defaults when there is none.
	pub fn load_or_default(root: &Path) -> FolioResult<FolioConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}

	pub fn from_toml(content: &str) -> FolioResult<FolioConfig> {
		toml::from_str(content).map_err(|e| FolioError::ConfigParse(e.to_string()))
	}
}
