use crate::{
	cursor::{CursorOptions, Listing, ListingError, PaginationCursor},
	lister::{ObjectLister, DELIMITER},
	path::{Breadcrumb, VirtualPath},
};

use std::collections::HashSet;

use bv_file_ext::{Classifier, TypeInfo};
use chrono::{DateTime, Utc};
use serde::Serialize;
use specta::Type;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

pub const DEFAULT_ROOT_LABEL: &str = "Root";

/// A folder or file at one directory level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Type)]
pub struct FileNode {
	pub name: String,
	pub full_key: String,
	pub is_folder: bool,
	pub size: Option<u64>,
	pub last_modified: Option<DateTime<Utc>>,
	/// Always `None` for folders.
	pub type_info: Option<TypeInfo>,
}

impl FileNode {
	pub fn folder(prefix: &str, name: &str) -> Self {
		Self {
			name: name.to_string(),
			full_key: format!("{prefix}{name}{DELIMITER}"),
			is_folder: true,
			size: None,
			last_modified: None,
			type_info: None,
		}
	}
}

/// The contents of one virtual directory, unsorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Type)]
pub struct DirectoryView {
	pub path: VirtualPath,
	pub folders: Vec<FileNode>,
	pub files: Vec<FileNode>,
	pub breadcrumbs: Vec<Breadcrumb>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectorOptions {
	pub cursor: CursorOptions,
	pub root_label: String,
	pub show_hidden: bool,
}

impl Default for ProjectorOptions {
	fn default() -> Self {
		Self {
			cursor: CursorOptions::default(),
			root_label: DEFAULT_ROOT_LABEL.to_string(),
			show_hidden: true,
		}
	}
}

/// Turns delimiter listings of a flat key space into directory views.
pub struct NamespaceProjector<L> {
	lister: L,
	classifier: Classifier,
	options: ProjectorOptions,
}

impl<L: ObjectLister> NamespaceProjector<L> {
	pub fn new(lister: L) -> Self {
		Self {
			lister,
			classifier: Classifier::new(),
			options: ProjectorOptions::default(),
		}
	}

	#[must_use]
	pub fn with_classifier(mut self, classifier: Classifier) -> Self {
		self.classifier = classifier;
		self
	}

	#[must_use]
	pub fn with_options(mut self, options: ProjectorOptions) -> Self {
		self.options = options;
		self
	}

	pub const fn lister(&self) -> &L {
		&self.lister
	}

	pub const fn options(&self) -> &ProjectorOptions {
		&self.options
	}

	pub async fn get_directory_view(
		&self,
		path: &VirtualPath,
	) -> Result<DirectoryView, ListingError> {
		self.get_directory_view_with_cancel(path, CancellationToken::new())
			.await
	}

	pub async fn get_directory_view_with_cancel(
		&self,
		path: &VirtualPath,
		cancel: CancellationToken,
	) -> Result<DirectoryView, ListingError> {
		let prefix = path.to_storage_prefix();

		let listing = PaginationCursor::new(&self.lister)
			.with_options(self.options.cursor)
			.with_cancellation(cancel)
			.collect(&prefix)
			.await?;

		Ok(self.project(path, listing))
	}

	/// Builds the view of `path` from an already merged listing of its prefix.
	pub fn project(&self, path: &VirtualPath, listing: Listing) -> DirectoryView {
		let prefix = path.to_storage_prefix();
		let visible = |name: &str| self.options.show_hidden || !name.starts_with('.');

		let mut folder_names = HashSet::new();
		let mut folders = Vec::new();

		for common_prefix in &listing.common_prefixes {
			let Some(rest) = common_prefix.strip_prefix(prefix.as_str()) else {
				trace!(%prefix, %common_prefix, "Discarding common prefix from another level");
				continue;
			};

			let name = rest.split(DELIMITER).next().unwrap_or_default();
			if name.is_empty() || !visible(name) {
				continue;
			}

			if folder_names.insert(name.to_string()) {
				folders.push(FileNode::folder(&prefix, name));
			}
		}

		let mut files = Vec::new();

		for entry in listing.entries {
			let Some(rest) = entry.key.strip_prefix(prefix.as_str()) else {
				trace!(%prefix, key = %entry.key, "Discarding key from another level");
				continue;
			};

			// the directory's own marker, or a marker for a folder already shown
			if rest.is_empty()
				|| rest
					.strip_suffix(DELIMITER)
					.is_some_and(|folder| folder_names.contains(folder))
			{
				continue;
			}

			if rest.contains(DELIMITER) || !visible(rest) {
				continue;
			}

			let type_info = self
				.classifier
				.classify(rest, entry.content_type.as_deref());

			files.push(FileNode {
				name: rest.to_string(),
				full_key: entry.key.clone(),
				is_folder: false,
				size: entry.size,
				last_modified: entry.last_modified,
				type_info: Some(type_info),
			});
		}

		debug!(
			%path,
			folders = folders.len(),
			files = files.len(),
			pages = listing.pages,
			"Projected directory view"
		);

		DirectoryView {
			breadcrumbs: path.breadcrumbs(&self.options.root_label),
			path: path.clone(),
			folders,
			files,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{lister::ObjectEntry, memory::MemoryLister};

	use bv_file_ext::Category;

	fn listing(prefix: &str, keys: &[&str], common_prefixes: &[&str]) -> Listing {
		Listing {
			prefix: prefix.to_string(),
			entries: keys.iter().map(|key| ObjectEntry::new(*key)).collect(),
			common_prefixes: common_prefixes.iter().map(ToString::to_string).collect(),
			pages: 1,
		}
	}

	fn names(nodes: &[FileNode]) -> Vec<&str> {
		nodes.iter().map(|node| node.name.as_str()).collect()
	}

	#[test]
	fn root_with_one_folder_and_one_file() {
		let projector = NamespaceProjector::new(MemoryLister::new());
		let view = projector.project(
			&VirtualPath::root(),
			listing("", &["a.txt"], &["folder1/"]),
		);

		assert_eq!(names(&view.folders), ["folder1"]);
		assert_eq!(view.folders[0].full_key, "folder1/");
		assert!(view.folders[0].is_folder);
		assert_eq!(view.folders[0].type_info, None);

		assert_eq!(names(&view.files), ["a.txt"]);
		assert_eq!(view.files[0].full_key, "a.txt");
		assert_eq!(
			view.files[0].type_info.as_ref().map(|info| info.category),
			Some(Category::Text)
		);
		assert_eq!(view.breadcrumbs.len(), 1);
	}

	#[test]
	fn markers_and_foreign_keys_are_dropped() {
		let projector = NamespaceProjector::new(MemoryLister::new());
		let path = VirtualPath::parse("docs").unwrap();
		let view = projector.project(
			&path,
			listing(
				"docs/",
				&[
					"docs/",
					"docs/2024/",
					"docs/report.pdf",
					"docs/2024/q1.pdf",
					"other/stray.txt",
				],
				&["docs/2024/", "docs/2024/", "other/", "docs/"],
			),
		);

		assert_eq!(names(&view.folders), ["2024"]);
		assert_eq!(view.folders[0].full_key, "docs/2024/");
		assert_eq!(names(&view.files), ["report.pdf"]);
		assert_eq!(view.files[0].full_key, "docs/report.pdf");
	}

	#[test]
	fn hidden_names_follow_the_option() {
		let keys = listing("", &[".env", "main.rs"], &[".git/", "src/"]);

		let shown = NamespaceProjector::new(MemoryLister::new())
			.project(&VirtualPath::root(), keys.clone());
		assert_eq!(names(&shown.folders), [".git", "src"]);
		assert_eq!(names(&shown.files), [".env", "main.rs"]);

		let hidden = NamespaceProjector::new(MemoryLister::new())
			.with_options(ProjectorOptions {
				show_hidden: false,
				..Default::default()
			})
			.project(&VirtualPath::root(), keys);
		assert_eq!(names(&hidden.folders), ["src"]);
		assert_eq!(names(&hidden.files), ["main.rs"]);
	}

	#[test]
	fn stored_content_type_reaches_the_classifier() {
		let projector = NamespaceProjector::new(MemoryLister::new());
		let mut keys = listing("", &[], &[]);
		keys.entries
			.push(ObjectEntry::new("upload-7f3a").with_content_type("video/mp4"));

		let view = projector.project(&VirtualPath::root(), keys);
		assert_eq!(
			view.files[0].type_info.as_ref().map(|info| info.category),
			Some(Category::Video)
		);
	}
}
