#![allow(dead_code)]

use bv_core::{ListPage, ListRequest, ListerError, ObjectEntry, ObjectLister};

use std::{
	collections::VecDeque,
	sync::{Mutex, PoisonError},
};

use async_trait::async_trait;

pub enum Step {
	Page(ListPage),
	Fail(ListerError),
	/// Never answers; only cancellation gets the caller out.
	Stall,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
	pub prefix: String,
	pub max_keys: u32,
	pub continuation_token: Option<String>,
}

/// Answers requests from a fixed script, one step per call.
#[derive(Default)]
pub struct ScriptedLister {
	steps: Mutex<VecDeque<Step>>,
	requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedLister {
	pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
		Self {
			steps: Mutex::new(steps.into_iter().collect()),
			requests: Mutex::default(),
		}
	}

	pub fn pages(pages: impl IntoIterator<Item = ListPage>) -> Self {
		Self::new(pages.into_iter().map(Step::Page))
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.requests
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
	}

	pub fn request_count(&self) -> usize {
		self.requests
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.len()
	}
}

#[async_trait]
impl ObjectLister for ScriptedLister {
	async fn list(&self, request: ListRequest<'_>) -> Result<ListPage, ListerError> {
		self.requests
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.push(RecordedRequest {
				prefix: request.prefix.to_string(),
				max_keys: request.max_keys,
				continuation_token: request.continuation_token.map(str::to_string),
			});

		let step = self
			.steps
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.pop_front();

		match step {
			Some(Step::Page(page)) => Ok(page),
			Some(Step::Fail(e)) => Err(e),
			Some(Step::Stall) => futures::future::pending().await,
			None => Err(ListerError::Unknown("script exhausted".to_string())),
		}
	}
}

/// A page with zero-byte entries for `keys`. A token marks it truncated.
pub fn page(keys: &[&str], common_prefixes: &[&str], token: Option<&str>) -> ListPage {
	ListPage {
		entries: keys.iter().map(|key| ObjectEntry::new(*key)).collect(),
		common_prefixes: common_prefixes.iter().map(ToString::to_string).collect(),
		is_truncated: token.is_some(),
		continuation_token: token.map(ToString::to_string),
	}
}

pub fn keys(entries: &[ObjectEntry]) -> Vec<&str> {
	entries.iter().map(|entry| entry.key.as_str()).collect()
}
