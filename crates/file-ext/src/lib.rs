//! Object type classification.
//!
//! Maps an object name, and optionally the content type stored alongside it, to a
//! [`TypeInfo`]: a [`Category`], a display name and an icon. Lookups only touch
//! static tables, so [`classify`] can be called from any number of tasks at once.
//!
//! ```
//! use bv_file_ext::{classify, Category};
//!
//! let info = classify("backups/2024.tar.gz", None);
//! assert_eq!(info.category, Category::Archive);
//! assert_eq!(info.display_name, "Gzip Archive");
//! ```

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

mod table;

mod classifier;
pub mod extensions;
pub mod kind;
pub mod mime;
pub mod special;

pub use classifier::{classify, Classifier, Overrides, TypeInfo, DEFAULT_MIME_TYPE};
pub use kind::Category;
pub use table::TypeEntry;
