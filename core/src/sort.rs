use crate::projector::{DirectoryView, FileNode};

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use specta::Type;
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
	Debug,
	Clone,
	Copy,
	Default,
	PartialEq,
	Eq,
	Hash,
	Serialize,
	Deserialize,
	Type,
	Display,
	EnumString,
	EnumIter,
	AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortField {
	#[default]
	Name,
	Modified,
	Size,
	Type,
}

#[derive(
	Debug,
	Clone,
	Copy,
	Default,
	PartialEq,
	Eq,
	Hash,
	Serialize,
	Deserialize,
	Type,
	Display,
	EnumString,
	EnumIter,
	AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
	#[default]
	Asc,
	Desc,
}

impl SortDirection {
	const fn apply(self, ordering: Ordering) -> Ordering {
		match self {
			Self::Asc => ordering,
			Self::Desc => ordering.reverse(),
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
pub struct SortOrder {
	pub field: SortField,
	pub direction: SortDirection,
}

impl SortOrder {
	pub const fn new(field: SortField, direction: SortDirection) -> Self {
		Self { field, direction }
	}
}

/// Folders first, then files, each group ordered by `field`.
///
/// Missing sizes and timestamps always go last, whatever the direction. Equal
/// keys fall back to the case-insensitive name and then the exact name, so the
/// output never depends on the order the lister returned things in.
pub fn sort(
	mut folders: Vec<FileNode>,
	mut files: Vec<FileNode>,
	field: SortField,
	direction: SortDirection,
) -> Vec<FileNode> {
	let by = |a: &FileNode, b: &FileNode| compare(a, b, field, direction);

	folders.sort_by(by);
	files.sort_by(by);

	folders.extend(files);
	folders
}

/// Sorts a copy of the view's nodes.
pub fn sort_view(view: &DirectoryView, order: SortOrder) -> Vec<FileNode> {
	sort(
		view.folders.clone(),
		view.files.clone(),
		order.field,
		order.direction,
	)
}

fn compare(a: &FileNode, b: &FileNode, field: SortField, direction: SortDirection) -> Ordering {
	let primary = match field {
		SortField::Name => Ordering::Equal,
		SortField::Modified => missing_last(a.last_modified, b.last_modified, direction),
		SortField::Size => missing_last(a.size, b.size, direction),
		SortField::Type => direction.apply(compare_types(a, b)),
	};

	primary.then_with(|| {
		direction.apply(
			caseless(&a.name, &b.name).then_with(|| a.name.cmp(&b.name)),
		)
	})
}

fn missing_last<T: Ord>(a: Option<T>, b: Option<T>, direction: SortDirection) -> Ordering {
	match (a, b) {
		(Some(a), Some(b)) => direction.apply(a.cmp(&b)),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => Ordering::Equal,
	}
}

fn compare_types(a: &FileNode, b: &FileNode) -> Ordering {
	match (&a.type_info, &b.type_info) {
		(Some(a), Some(b)) => a
			.category
			.as_str()
			.cmp(b.category.as_str())
			.then_with(|| a.display_name.cmp(&b.display_name)),
		_ => Ordering::Equal,
	}
}

fn caseless(a: &str, b: &str) -> Ordering {
	a.chars()
		.flat_map(char::to_lowercase)
		.cmp(b.chars().flat_map(char::to_lowercase))
}
