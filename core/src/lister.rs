//! The listing capability the explorer is driven by.
//!
//! Implementations wrap whatever transport reaches the bucket. They must fold keys
//! with a further delimiter past the prefix into `common_prefixes`, and must
//! return `is_truncated == false` without a continuation token on the last page.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use specta::Type;
use thiserror::Error;

pub const DELIMITER: &str = "/";

/// Failures reported by a lister, grouped the way object stores report them.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, Type)]
pub enum ListerError {
	#[error("invalid credentials: {0}")]
	InvalidCredentials(String),
	#[error("bucket not found: {0}")]
	BucketNotFound(String),
	#[error("object not found: {0}")]
	ObjectNotFound(String),
	#[error("permission denied: {0}")]
	PermissionDenied(String),
	#[error("network error: {0}")]
	Network(String),
	#[error("configuration error: {0}")]
	Configuration(String),
	#[error("unknown error: {0}")]
	Unknown(String),
}

impl ListerError {
	/// Buckets a raw service error by the S3 error codes and transport hints it mentions.
	pub fn from_service_message(message: impl Into<String>) -> Self {
		let message = message.into();
		let lowercase = message.to_lowercase();

		if message.contains("AccessDenied") {
			Self::PermissionDenied(message)
		} else if message.contains("InvalidAccessKeyId") || message.contains("SignatureDoesNotMatch")
		{
			Self::InvalidCredentials(message)
		} else if message.contains("NoSuchBucket") {
			Self::BucketNotFound(message)
		} else if message.contains("NoSuchKey") {
			Self::ObjectNotFound(message)
		} else if message.contains("Invalid URI") {
			Self::Configuration(message)
		} else if [
			"networkerror",
			"timeout",
			"connection",
			"dns",
			"resolve",
			"tls",
			"ssl",
			"hyper",
		]
		.iter()
		.any(|hint| lowercase.contains(hint))
		{
			Self::Network(message)
		} else {
			Self::Unknown(message)
		}
	}

	/// Whether repeating the same request could succeed. The explorer never retries
	/// on its own; this is for callers deciding on a retry policy.
	pub const fn is_transient(&self) -> bool {
		matches!(self, Self::Network(_))
	}
}

/// One stored object as reported by a listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Type)]
pub struct ObjectEntry {
	pub key: String,
	pub size: Option<u64>,
	pub last_modified: Option<DateTime<Utc>>,
	pub etag: Option<String>,
	pub content_type: Option<String>,
	pub storage_class: Option<String>,
}

impl ObjectEntry {
	pub fn new(key: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			..Default::default()
		}
	}

	#[must_use]
	pub const fn with_size(mut self, size: u64) -> Self {
		self.size = Some(size);
		self
	}

	#[must_use]
	pub const fn with_last_modified(mut self, last_modified: DateTime<Utc>) -> Self {
		self.last_modified = Some(last_modified);
		self
	}

	#[must_use]
	pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
		self.content_type = Some(content_type.into());
		self
	}

	/// Zero-byte object whose key ends in the delimiter.
	pub fn is_folder_marker(&self) -> bool {
		self.key.ends_with(DELIMITER)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest<'a> {
	pub prefix: &'a str,
	pub delimiter: &'a str,
	pub max_keys: u32,
	pub continuation_token: Option<&'a str>,
}

/// One raw page as returned by a lister.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Type)]
pub struct ListPage {
	pub entries: Vec<ObjectEntry>,
	pub common_prefixes: Vec<String>,
	pub is_truncated: bool,
	pub continuation_token: Option<String>,
}

#[async_trait]
pub trait ObjectLister: Send + Sync {
	async fn list(&self, request: ListRequest<'_>) -> Result<ListPage, ListerError>;
}

#[async_trait]
impl<T: ObjectLister + ?Sized> ObjectLister for std::sync::Arc<T> {
	async fn list(&self, request: ListRequest<'_>) -> Result<ListPage, ListerError> {
		(**self).list(request).await
	}
}
