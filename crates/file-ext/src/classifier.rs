use crate::{
	extensions, mime,
	kind::Category,
	special,
	table::TypeEntry,
};

use serde::{Deserialize, Serialize};
use specta::Type;
use tracing::trace;

pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// What an object is, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct TypeInfo {
	pub mime_type: String,
	pub category: Category,
	pub display_name: String,
	pub icon: String,
}

impl TypeInfo {
	pub fn new(
		category: Category,
		mime_type: impl Into<String>,
		display_name: impl Into<String>,
		icon: impl Into<String>,
	) -> Self {
		Self {
			mime_type: mime_type.into(),
			category,
			display_name: display_name.into(),
			icon: icon.into(),
		}
	}

	/// The result for anything no rule recognises.
	pub fn unknown() -> Self {
		Self::new(
			Category::Unknown,
			DEFAULT_MIME_TYPE,
			"File",
			Category::Unknown.default_icon(),
		)
	}
}

impl From<&TypeEntry> for TypeInfo {
	fn from(entry: &TypeEntry) -> Self {
		Self::new(
			entry.category,
			entry.mime_type,
			entry.display_name,
			entry.icon,
		)
	}
}

/// Caller supplied rules that take precedence over every built-in table.
///
/// Basename rules are exact and case-sensitive. Suffix rules are matched
/// case-insensitively and, like the built-in compound suffixes, must leave a
/// non-empty stem; the longest matching suffix wins.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
	basenames: Vec<(String, TypeInfo)>,
	suffixes: Vec<(String, TypeInfo)>,
}

impl Overrides {
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn basename(mut self, name: impl Into<String>, info: TypeInfo) -> Self {
		self.basenames.push((name.into(), info));
		self
	}

	/// `suffix` may be given with or without its leading dot (`"tar.lz"` or `".tar.lz"`).
	#[must_use]
	pub fn suffix(mut self, suffix: impl AsRef<str>, info: TypeInfo) -> Self {
		let suffix = suffix.as_ref().trim_start_matches('.').to_ascii_lowercase();
		if !suffix.is_empty() {
			self.suffixes.push((format!(".{suffix}"), info));
		}
		self
	}

	pub fn is_empty(&self) -> bool {
		self.basenames.is_empty() && self.suffixes.is_empty()
	}

	fn resolve(&self, basename: &str, lowercase: &str) -> Option<&TypeInfo> {
		if let Some((_, info)) = self.basenames.iter().find(|(name, _)| name == basename) {
			return Some(info);
		}

		let mut best: Option<(usize, &TypeInfo)> = None;
		for (suffix, info) in &self.suffixes {
			if lowercase.len() > suffix.len()
				&& lowercase.ends_with(suffix.as_str())
				&& best.map_or(true, |(len, _)| suffix.len() > len)
			{
				best = Some((suffix.len(), info));
			}
		}
		best.map(|(_, info)| info)
	}
}

/// Maps object names to [`TypeInfo`]. Holds no mutable state, so a single
/// instance can be shared freely between tasks.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
	overrides: Overrides,
}

impl Classifier {
	pub fn new() -> Self {
		Self::default()
	}

	pub const fn with_overrides(overrides: Overrides) -> Self {
		Self { overrides }
	}

	/// Resolves `name` (a basename or a full key) and the optional stored content type.
	///
	/// Rules are tried in order and the first hit wins:
	/// caller overrides, exact special filenames, compound suffixes, the final
	/// extension, then the content type. Anything else is [`TypeInfo::unknown`].
	pub fn classify(&self, name: &str, content_type: Option<&str>) -> TypeInfo {
		let basename = name.rsplit('/').next().unwrap_or(name);
		let lowercase = basename.to_ascii_lowercase();

		if let Some(info) = self.overrides.resolve(basename, &lowercase) {
			return info.clone();
		}

		if let Some(entry) = special::from_basename(basename) {
			return entry.into();
		}

		if let Some(entry) = extensions::longest_compound(&lowercase) {
			return entry.into();
		}

		if let Some(entry) = extension(basename).and_then(extensions::from_extension) {
			return entry.into();
		}

		if let Some(essence) = content_type.and_then(mime::normalize) {
			if let Some((entry, mime_type)) = mime::from_mime(&essence) {
				let mut info = TypeInfo::from(entry);
				if mime_type.is_none() {
					info.mime_type = essence;
				}
				return info;
			}
		}

		trace!(%name, ?content_type, "No type rule matched");
		TypeInfo::unknown()
	}
}

/// Classifies with the built-in tables only.
pub fn classify(name: &str, content_type: Option<&str>) -> TypeInfo {
	Classifier::new().classify(name, content_type)
}

/// The final `.`-delimited segment. A leading dot starts a hidden name, not an extension.
fn extension(basename: &str) -> Option<&str> {
	match basename.rsplit_once('.') {
		Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
		_ => None,
	}
}
