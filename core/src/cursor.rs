use crate::lister::{ListRequest, ListerError, ObjectEntry, ObjectLister, DELIMITER};

use std::collections::HashSet;

use futures::FutureExt;
use futures_concurrency::future::Race;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

pub const DEFAULT_MAX_KEYS: u32 = 1000;
pub const DEFAULT_MAX_PAGES: u32 = 10_000;

#[derive(Debug, Error)]
pub enum ListingError {
	#[error("listing failed: {0}")]
	Failed(#[from] ListerError),
	#[error(transparent)]
	Inconsistent(#[from] Inconsistency),
	#[error("listing did not finish within {limit} pages")]
	TooManyPages { limit: u32 },
	#[error("listing was cancelled")]
	Cancelled,
}

/// Ways a lister can break the paging contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Inconsistency {
	#[error("key listed twice: <key='{key}', page={page}>")]
	DuplicateKey { key: String, page: u32 },
	#[error("page is truncated but has no continuation token: <page={page}>")]
	MissingContinuationToken { page: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorOptions {
	pub max_keys: u32,
	pub max_pages: u32,
}

impl Default for CursorOptions {
	fn default() -> Self {
		Self {
			max_keys: DEFAULT_MAX_KEYS,
			max_pages: DEFAULT_MAX_PAGES,
		}
	}
}

/// Every page of one prefix, merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
	pub prefix: String,
	pub entries: Vec<ObjectEntry>,
	pub common_prefixes: Vec<String>,
	pub pages: u32,
}

enum RaceOutput<T> {
	Page(T),
	Cancelled,
}

/// Walks continuation tokens for one prefix until the lister reports the last page.
///
/// Pages are only merged when none of their keys was seen before, so the result
/// is all or nothing: any contract violation fails the whole listing.
pub struct PaginationCursor<'a, L: ?Sized> {
	lister: &'a L,
	options: CursorOptions,
	cancel: CancellationToken,
}

impl<'a, L: ObjectLister + ?Sized> PaginationCursor<'a, L> {
	pub fn new(lister: &'a L) -> Self {
		Self {
			lister,
			options: CursorOptions::default(),
			cancel: CancellationToken::new(),
		}
	}

	#[must_use]
	pub const fn with_options(mut self, options: CursorOptions) -> Self {
		self.options = options;
		self
	}

	/// Once `cancel` fires no further page is requested, and a request already in
	/// flight is abandoned.
	#[must_use]
	pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
		self.cancel = cancel;
		self
	}

	pub async fn collect(&self, prefix: &str) -> Result<Listing, ListingError> {
		let mut listing = Listing {
			prefix: prefix.to_string(),
			..Default::default()
		};
		let mut seen_keys = HashSet::new();
		let mut seen_prefixes = HashSet::new();
		let mut continuation_token = None::<String>;

		loop {
			if self.cancel.is_cancelled() {
				debug!(%prefix, pages = listing.pages, "Listing cancelled before next page");
				return Err(ListingError::Cancelled);
			}

			if listing.pages >= self.options.max_pages {
				warn!(
					%prefix,
					limit = self.options.max_pages,
					"Listing exceeded the page ceiling"
				);
				return Err(ListingError::TooManyPages {
					limit: self.options.max_pages,
				});
			}

			let request = ListRequest {
				prefix,
				delimiter: DELIMITER,
				max_keys: self.options.max_keys,
				continuation_token: continuation_token.as_deref(),
			};

			let page = match (
				self.lister.list(request).map(RaceOutput::Page),
				self.cancel
					.cancelled()
					.map(|()| RaceOutput::Cancelled),
			)
				.race()
				.await
			{
				RaceOutput::Page(page) => page?,
				RaceOutput::Cancelled => {
					debug!(%prefix, pages = listing.pages, "Listing cancelled mid-request");
					return Err(ListingError::Cancelled);
				}
			};

			listing.pages += 1;
			let page_number = listing.pages;

			trace!(
				%prefix,
				page = page_number,
				entries = page.entries.len(),
				common_prefixes = page.common_prefixes.len(),
				is_truncated = page.is_truncated,
				"Received listing page"
			);

			{
				let mut page_keys = HashSet::with_capacity(page.entries.len());
				if let Some(duplicate) = page.entries.iter().find(|entry| {
					seen_keys.contains(entry.key.as_str()) || !page_keys.insert(entry.key.as_str())
				}) {
					warn!(%prefix, key = %duplicate.key, page = page_number, "Duplicate key in listing");
					return Err(Inconsistency::DuplicateKey {
						key: duplicate.key.clone(),
						page: page_number,
					}
					.into());
				}
			}

			seen_keys.extend(page.entries.iter().map(|entry| entry.key.clone()));
			listing.entries.extend(page.entries);

			for common_prefix in page.common_prefixes {
				if seen_prefixes.insert(common_prefix.clone()) {
					listing.common_prefixes.push(common_prefix);
				}
			}

			if !page.is_truncated {
				break;
			}

			match page.continuation_token {
				Some(token) => continuation_token = Some(token),
				None => {
					warn!(%prefix, page = page_number, "Truncated page without a continuation token");
					return Err(Inconsistency::MissingContinuationToken { page: page_number }.into());
				}
			}
		}

		debug!(
			%prefix,
			pages = listing.pages,
			entries = listing.entries.len(),
			common_prefixes = listing.common_prefixes.len(),
			"Listing complete"
		);

		Ok(listing)
	}
}
