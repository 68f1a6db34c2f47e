//! Static type table building blocks

use crate::kind::Category;

/// One resolved row of a type table. Rows are copied verbatim into the
/// [`TypeInfo`](crate::TypeInfo) handed back to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeEntry {
	pub category: Category,
	pub mime_type: &'static str,
	pub display_name: &'static str,
	pub icon: &'static str,
}

impl TypeEntry {
	pub const fn new(
		category: Category,
		mime_type: &'static str,
		display_name: &'static str,
		icon: &'static str,
	) -> Self {
		Self {
			category,
			mime_type,
			display_name,
			icon,
		}
	}
}

/// Declares a static `&[(&str, TypeEntry)]` table.
///
/// Rows without an explicit icon use the category default.
macro_rules! type_table {
	(@icon $category:ident, $icon:literal) => {
		$icon
	};
	(@icon Image) => { "file-image" };
	(@icon Document) => { "file-document" };
	(@icon Code) => { "file-code" };
	(@icon Text) => { "file-text" };
	(@icon Audio) => { "file-audio" };
	(@icon Video) => { "file-video" };
	(@icon Archive) => { "file-archive" };
	(@icon Font) => { "file-font" };
	(@icon Executable) => { "file-executable" };
	(@icon Data) => { "file-data" };
	(@icon Unknown) => { "file" };
	($(#[$meta:meta])* $vis:vis $name:ident {
		$($key:literal => $category:ident, $mime:literal, $display:literal $(, $icon:literal)?;)*
	}) => {
		$(#[$meta])*
		$vis static $name: &[(&str, $crate::table::TypeEntry)] = &[
			$((
				$key,
				$crate::table::TypeEntry::new(
					$crate::kind::Category::$category,
					$mime,
					$display,
					$crate::table::type_table!(@icon $category $(, $icon)?),
				),
			),)*
		];
	};
}

pub(crate) use type_table;
