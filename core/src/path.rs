//! Virtual directory paths and their storage prefix form.
//!
//! A [`VirtualPath`] is a validated list of segments. The storage layer sees the
//! same location as a prefix string: no leading separator, a trailing separator
//! when non-empty, and `""` for the root.

use std::{fmt, str::FromStr};

use serde::Serialize;
use specta::Type;
use thiserror::Error;

pub const SEPARATOR: char = '/';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
	#[error("path contains an empty segment")]
	EmptySegment,
	#[error("path segment contains a separator: <segment='{0}'>")]
	EmbeddedSeparator(String),
	#[error("relative segments are not allowed: <segment='{0}'>")]
	RelativeSegment(String),
	#[error("storage prefix starts with a separator: <prefix='{0}'>")]
	LeadingSeparator(String),
	#[error("storage prefix is missing its trailing separator: <prefix='{0}'>")]
	MissingTrailingSeparator(String),
}

fn check_segment(segment: &str) -> Result<(), PathError> {
	if segment.is_empty() {
		Err(PathError::EmptySegment)
	} else if segment.contains(SEPARATOR) {
		Err(PathError::EmbeddedSeparator(segment.to_string()))
	} else if segment == "." || segment == ".." {
		Err(PathError::RelativeSegment(segment.to_string()))
	} else {
		Ok(())
	}
}

/// A rooted location inside a bucket. The root is the empty segment list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Type)]
#[serde(transparent)]
pub struct VirtualPath {
	segments: Vec<String>,
}

impl VirtualPath {
	pub const fn root() -> Self {
		Self {
			segments: Vec::new(),
		}
	}

	pub fn is_root(&self) -> bool {
		self.segments.is_empty()
	}

	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	/// Last segment, `None` for the root.
	pub fn name(&self) -> Option<&str> {
		self.segments.last().map(String::as_str)
	}

	pub fn parent(&self) -> Option<Self> {
		let (_, ancestors) = self.segments.split_last()?;
		Some(Self {
			segments: ancestors.to_vec(),
		})
	}

	/// Builds a path from segments, validating each one.
	pub fn from_segments<I, S>(segments: I) -> Result<Self, PathError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		segments
			.into_iter()
			.map(Into::into)
			.map(|segment: String| check_segment(&segment).map(|()| segment))
			.collect::<Result<Vec<_>, _>>()
			.map(|segments| Self { segments })
	}

	/// Accepts user input such as `"/"`, `"/folder1/"` or `"folder1/sub"`.
	///
	/// One leading and one trailing separator are tolerated; anything else has to
	/// satisfy the segment rules, so `"a//b"` is rejected rather than collapsed.
	pub fn parse(input: &str) -> Result<Self, PathError> {
		let trimmed = input.strip_prefix(SEPARATOR).unwrap_or(input);
		let trimmed = trimmed.strip_suffix(SEPARATOR).unwrap_or(trimmed);

		if trimmed.is_empty() {
			return Ok(Self::root());
		}

		Self::from_segments(trimmed.split(SEPARATOR))
	}

	/// Inverse of [`VirtualPath::to_storage_prefix`].
	pub fn from_prefix(prefix: &str) -> Result<Self, PathError> {
		if prefix.is_empty() {
			return Ok(Self::root());
		}

		if prefix.starts_with(SEPARATOR) {
			return Err(PathError::LeadingSeparator(prefix.to_string()));
		}

		let Some(inner) = prefix.strip_suffix(SEPARATOR) else {
			return Err(PathError::MissingTrailingSeparator(prefix.to_string()));
		};

		Self::from_segments(inner.split(SEPARATOR))
	}

	pub fn to_storage_prefix(&self) -> String {
		let mut prefix = String::with_capacity(
			self.segments.iter().map(|segment| segment.len() + 1).sum(),
		);

		for segment in &self.segments {
			prefix.push_str(segment);
			prefix.push(SEPARATOR);
		}

		prefix
	}

	pub fn child(&self, name: &str) -> Result<Self, PathError> {
		check_segment(name)?;

		let mut segments = self.segments.clone();
		segments.push(name.to_string());

		Ok(Self { segments })
	}

	/// Root crumb labelled `root_label`, then one crumb per ancestor down to `self`.
	pub fn breadcrumbs(&self, root_label: &str) -> Vec<Breadcrumb> {
		let mut crumbs = Vec::with_capacity(self.segments.len() + 1);
		crumbs.push(Breadcrumb {
			name: root_label.to_string(),
			path: Self::root(),
		});

		for depth in 1..=self.segments.len() {
			crumbs.push(Breadcrumb {
				name: self.segments[depth - 1].clone(),
				path: Self {
					segments: self.segments[..depth].to_vec(),
				},
			});
		}

		crumbs
	}

	/// Key of the zero-byte object that materializes this folder. The root has none.
	pub fn folder_marker_key(&self) -> Option<String> {
		(!self.is_root()).then(|| self.to_storage_prefix())
	}
}

impl fmt::Display for VirtualPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{SEPARATOR}{}", self.to_storage_prefix())
	}
}

impl FromStr for VirtualPath {
	type Err = PathError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Type)]
pub struct Breadcrumb {
	pub name: String,
	pub path: VirtualPath,
}
