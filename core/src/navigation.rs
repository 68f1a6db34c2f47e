//! Last-request-wins navigation.
//!
//! Every navigation takes a new generation from an atomic counter and its own
//! cancellation token. Starting a navigation cancels the token of the one before
//! it, so a listing still paging stops asking for pages, and a listing that
//! already finished is recognised as stale by its generation.

use crate::{
	auxiliary,
	config::ExplorerConfig,
	error::Error,
	lister::ObjectLister,
	path::VirtualPath,
	projector::{DirectoryView, FileNode, NamespaceProjector},
	sort::{sort_view, SortOrder},
};

use std::{
	future::Future,
	sync::{
		atomic::{AtomicU64, Ordering},
		Mutex, PoisonError,
	},
};

use bv_file_ext::Classifier;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// A started navigation.
#[derive(Debug, Clone)]
pub struct Navigation {
	generation: u64,
	cancel: CancellationToken,
}

impl Navigation {
	pub const fn generation(&self) -> u64 {
		self.generation
	}

	pub const fn cancel_token(&self) -> &CancellationToken {
		&self.cancel
	}

	pub fn is_cancelled(&self) -> bool {
		self.cancel.is_cancelled()
	}
}

#[derive(Debug, Default)]
pub struct NavigationTracker {
	generation: AtomicU64,
	current: Mutex<CancellationToken>,
}

impl NavigationTracker {
	pub fn new() -> Self {
		Self::default()
	}

	/// Supersedes whatever navigation was in flight.
	pub fn begin(&self) -> Navigation {
		let cancel = CancellationToken::new();

		let (generation, previous) = {
			let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
			let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
			(generation, std::mem::replace(&mut *current, cancel.clone()))
		};

		previous.cancel();

		Navigation { generation, cancel }
	}

	pub fn is_current(&self, navigation: &Navigation) -> bool {
		self.generation.load(Ordering::Acquire) == navigation.generation
	}

	pub fn latest_generation(&self) -> u64 {
		self.generation.load(Ordering::Acquire)
	}

	/// Cancels the running navigation without starting a new one.
	pub fn cancel_current(&self) {
		self.current
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.cancel();
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
	Current(DirectoryView),
	/// The listing finished, but a newer navigation had already started.
	Superseded { generation: u64, latest: u64 },
}

impl NavigationOutcome {
	pub fn into_current(self) -> Option<DirectoryView> {
		match self {
			Self::Current(view) => Some(view),
			Self::Superseded { .. } => None,
		}
	}
}

/// Directory browsing over one bucket.
pub struct Explorer<L> {
	projector: NamespaceProjector<L>,
	tracker: NavigationTracker,
	default_sort: SortOrder,
	aux_concurrency: usize,
}

impl<L: ObjectLister> Explorer<L> {
	pub fn new(lister: L) -> Self {
		Self::with_config(lister, &ExplorerConfig::default())
	}

	pub fn with_config(lister: L, config: &ExplorerConfig) -> Self {
		Self {
			projector: NamespaceProjector::new(lister).with_options(config.projector_options()),
			tracker: NavigationTracker::new(),
			default_sort: config.default_sort,
			aux_concurrency: config.aux_concurrency,
		}
	}

	#[must_use]
	pub fn with_classifier(mut self, classifier: Classifier) -> Self {
		self.projector = self.projector.with_classifier(classifier);
		self
	}

	pub const fn projector(&self) -> &NamespaceProjector<L> {
		&self.projector
	}

	pub const fn tracker(&self) -> &NavigationTracker {
		&self.tracker
	}

	/// Parses a user supplied path and navigates to it. A malformed path fails
	/// right away and leaves the navigation in flight untouched.
	pub async fn navigate(&self, path: &str) -> Result<NavigationOutcome, Error> {
		let path = VirtualPath::parse(path)?;
		self.navigate_to(&path).await
	}

	pub async fn navigate_to(&self, path: &VirtualPath) -> Result<NavigationOutcome, Error> {
		let navigation = self.tracker.begin();
		debug!(%path, generation = navigation.generation(), "Navigating");

		let view = self
			.projector
			.get_directory_view_with_cancel(path, navigation.cancel_token().clone())
			.await?;

		if self.tracker.is_current(&navigation) {
			Ok(NavigationOutcome::Current(view))
		} else {
			let latest = self.tracker.latest_generation();
			debug!(
				%path,
				generation = navigation.generation(),
				latest,
				"Discarding superseded directory view"
			);
			Ok(NavigationOutcome::Superseded {
				generation: navigation.generation(),
				latest,
			})
		}
	}

	/// Nodes of `view` in the configured default order.
	pub fn sorted(&self, view: &DirectoryView) -> Vec<FileNode> {
		sort_view(view, self.default_sort)
	}

	/// Runs `op` for every file of `view` with the configured worker limit.
	pub async fn for_each_file<'a, F, Fut, R, E>(
		&self,
		view: &'a DirectoryView,
		op: F,
	) -> Vec<Result<R, E>>
	where
		F: Fn(&'a FileNode) -> Fut,
		Fut: Future<Output = Result<R, E>>,
		E: std::fmt::Display,
	{
		auxiliary::run_bounded(&view.files, self.aux_concurrency, op).await
	}
}
