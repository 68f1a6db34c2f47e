//! Explorer configuration

use crate::{
	auxiliary::DEFAULT_AUX_CONCURRENCY,
	cursor::{CursorOptions, DEFAULT_MAX_KEYS, DEFAULT_MAX_PAGES},
	projector::{ProjectorOptions, DEFAULT_ROOT_LABEL},
	sort::SortOrder,
};

use std::{fs, path::Path};

use anyhow::{anyhow, ensure, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "explorer.json";

/// Largest page an S3 `ListObjectsV2` call will return.
const MAX_KEYS_CEILING: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
	/// Config schema version
	pub version: u32,

	/// Keys requested per listing page
	pub max_keys: u32,

	/// Pages a single listing may take before it is abandoned
	pub max_pages: u32,

	/// Label of the first breadcrumb
	pub root_label: String,

	/// Whether names starting with `.` are listed
	pub show_hidden: bool,

	/// Worker limit for per-file auxiliary work
	pub aux_concurrency: usize,

	pub default_sort: SortOrder,

	/// Logging level
	pub log_level: String,
}

impl Default for ExplorerConfig {
	fn default() -> Self {
		Self {
			version: Self::target_version(),
			max_keys: DEFAULT_MAX_KEYS,
			max_pages: DEFAULT_MAX_PAGES,
			root_label: DEFAULT_ROOT_LABEL.to_string(),
			show_hidden: true,
			aux_concurrency: DEFAULT_AUX_CONCURRENCY,
			default_sort: SortOrder::default(),
			log_level: "info".to_string(),
		}
	}
}

impl ExplorerConfig {
	pub const fn target_version() -> u32 {
		1
	}

	/// Load configuration from `dir`, writing the defaults there if none exists yet
	pub fn load_from(dir: impl AsRef<Path>) -> Result<Self> {
		let dir = dir.as_ref();
		let config_path = dir.join(CONFIG_FILE_NAME);

		if config_path.exists() {
			info!("Loading config from {:?}", config_path);
			let json = fs::read_to_string(&config_path)?;
			let config: Self = serde_json::from_str(&json)?;

			if config.version > Self::target_version() {
				return Err(anyhow!("Unknown config version: {}", config.version));
			}

			config.validate()?;
			Ok(config)
		} else {
			warn!("No config found, creating default at {:?}", config_path);
			let config = Self::default();
			config.save_to(dir)?;
			Ok(config)
		}
	}

	/// Save configuration to `dir`
	pub fn save_to(&self, dir: impl AsRef<Path>) -> Result<()> {
		let dir = dir.as_ref();
		fs::create_dir_all(dir)?;

		let config_path = dir.join(CONFIG_FILE_NAME);
		let json = serde_json::to_string_pretty(self)?;
		fs::write(&config_path, json)?;
		info!("Saved config to {:?}", config_path);
		Ok(())
	}

	pub fn validate(&self) -> Result<()> {
		ensure!(
			(1..=MAX_KEYS_CEILING).contains(&self.max_keys),
			"max_keys must be between 1 and {MAX_KEYS_CEILING}, got {}",
			self.max_keys
		);
		ensure!(self.max_pages > 0, "max_pages must be positive");
		ensure!(self.aux_concurrency > 0, "aux_concurrency must be positive");
		Ok(())
	}

	pub const fn cursor_options(&self) -> CursorOptions {
		CursorOptions {
			max_keys: self.max_keys,
			max_pages: self.max_pages,
		}
	}

	pub fn projector_options(&self) -> ProjectorOptions {
		ProjectorOptions {
			cursor: self.cursor_options(),
			root_label: self.root_label.clone(),
			show_hidden: self.show_hidden,
		}
	}
}
