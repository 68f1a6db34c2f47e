//! In-process [`ObjectLister`] over a key snapshot.

use crate::{
	lister::{ListPage, ListRequest, ListerError, ObjectEntry, ObjectLister},
	path::VirtualPath,
};

use std::{collections::BTreeMap, ops::Bound};

use async_trait::async_trait;
use tracing::trace;

/// Lists a sorted set of objects with the same delimiter folding and paging an
/// S3 `ListObjectsV2` call performs. Continuation tokens are the last key or
/// common prefix handed out.
#[derive(Debug, Clone, Default)]
pub struct MemoryLister {
	objects: BTreeMap<String, ObjectEntry>,
}

impl MemoryLister {
	pub fn new() -> Self {
		Self::default()
	}

	/// Zero-byte entries for each key.
	pub fn from_keys<I, S>(keys: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		keys.into_iter().map(ObjectEntry::new).collect()
	}

	pub fn insert(&mut self, entry: ObjectEntry) -> Option<ObjectEntry> {
		self.objects.insert(entry.key.clone(), entry)
	}

	/// Writes the folder marker object for `path`, making it visible while empty.
	pub fn create_folder(&mut self, path: &VirtualPath) -> bool {
		path.folder_marker_key().map_or(false, |key| {
			self.insert(ObjectEntry::new(key).with_size(0));
			true
		})
	}

	pub fn len(&self) -> usize {
		self.objects.len()
	}

	pub fn is_empty(&self) -> bool {
		self.objects.is_empty()
	}

	fn page(&self, request: &ListRequest<'_>) -> ListPage {
		let ListRequest {
			prefix,
			delimiter,
			max_keys,
			continuation_token,
		} = *request;
		let max_keys = max_keys.max(1) as usize;

		let start = continuation_token.map_or_else(
			|| Bound::Included(prefix.to_string()),
			|token| Bound::Excluded(token.to_string()),
		);
		// resuming after a common prefix skips everything folded into it
		let skip_under = continuation_token.filter(|token| {
			!delimiter.is_empty() && *token != prefix && token.ends_with(delimiter)
		});

		let mut page = ListPage::default();
		let mut returned = 0;
		let mut last = None::<String>;

		for (key, entry) in self.objects.range((start, Bound::Unbounded)) {
			if !key.starts_with(prefix) {
				break;
			}
			if skip_under.is_some_and(|token| key.starts_with(token)) {
				continue;
			}

			let rest = &key[prefix.len()..];
			let folded = if delimiter.is_empty() {
				None
			} else {
				rest.find(delimiter)
					.map(|at| format!("{prefix}{}", &rest[..at + delimiter.len()]))
			};

			if let Some(common_prefix) = &folded {
				if page.common_prefixes.last() == Some(common_prefix) {
					continue;
				}
			}

			if returned == max_keys {
				page.is_truncated = true;
				page.continuation_token = last;
				break;
			}
			returned += 1;

			match folded {
				Some(common_prefix) => {
					last = Some(common_prefix.clone());
					page.common_prefixes.push(common_prefix);
				}
				None => {
					last = Some(key.clone());
					page.entries.push(entry.clone());
				}
			}
		}

		page
	}
}

impl FromIterator<ObjectEntry> for MemoryLister {
	fn from_iter<T: IntoIterator<Item = ObjectEntry>>(iter: T) -> Self {
		Self {
			objects: iter
				.into_iter()
				.map(|entry| (entry.key.clone(), entry))
				.collect(),
		}
	}
}

#[async_trait]
impl ObjectLister for MemoryLister {
	async fn list(&self, request: ListRequest<'_>) -> Result<ListPage, ListerError> {
		let page = self.page(&request);

		trace!(
			prefix = request.prefix,
			token = ?request.continuation_token,
			entries = page.entries.len(),
			common_prefixes = page.common_prefixes.len(),
			is_truncated = page.is_truncated,
			"Served in-memory listing page"
		);

		Ok(page)
	}
}
