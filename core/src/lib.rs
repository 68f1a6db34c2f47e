//! Browse a flat object store key space as a folder tree.
//!
//! [`NamespaceProjector`] drives a [`PaginationCursor`] over an [`ObjectLister`]
//! and folds the merged pages into a [`DirectoryView`] for one [`VirtualPath`],
//! annotating files through [`bv_file_ext::Classifier`]. [`Explorer`] adds
//! last-request-wins navigation on top.

#![warn(
	clippy::all,
	clippy::pedantic,
	clippy::correctness,
	clippy::perf,
	clippy::style,
	clippy::suspicious,
	clippy::complexity,
	clippy::nursery,
	clippy::unwrap_used,
	unused_qualifications,
	rust_2018_idioms,
	trivial_casts,
	trivial_numeric_casts,
	unused_allocation,
	clippy::unnecessary_cast,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_possible_wrap,
	clippy::cast_precision_loss,
	clippy::cast_sign_loss,
	clippy::dbg_macro,
	clippy::deprecated_cfg_attr,
	clippy::separated_literal_suffix,
	deprecated
)]
#![forbid(deprecated_in_future)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod auxiliary;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lister;
pub mod logging;
pub mod memory;
pub mod navigation;
pub mod path;
pub mod projector;
pub mod sort;

pub use auxiliary::run_bounded;
pub use config::ExplorerConfig;
pub use cursor::{CursorOptions, Inconsistency, Listing, ListingError, PaginationCursor};
pub use error::Error;
pub use lister::{ListPage, ListRequest, ListerError, ObjectEntry, ObjectLister, DELIMITER};
pub use memory::MemoryLister;
pub use navigation::{Explorer, Navigation, NavigationOutcome, NavigationTracker};
pub use path::{Breadcrumb, PathError, VirtualPath};
pub use projector::{DirectoryView, FileNode, NamespaceProjector, ProjectorOptions};
pub use sort::{sort, sort_view, SortDirection, SortField, SortOrder};

pub use bv_file_ext::{classify, Category, Classifier, Overrides, TypeInfo};
