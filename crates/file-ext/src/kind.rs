use serde::{Deserialize, Serialize};
use specta::Type;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Broad kind of object, shown and sorted by its name
#[derive(
	Debug,
	Clone,
	Copy,
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
	IntoStaticStr,
)]
pub enum Category {
	// A raster or vector picture
	Image,
	// Office documents, PDFs, e-books
	Document,
	// Editable source code or markup
	Code,
	// Human-readable prose or plain text
	Text,
	// An audio file
	Audio,
	// A video file
	Video,
	// A compressed archive of data
	Archive,
	// A typeface
	Font,
	// An executable, program, installer or shared library
	Executable,
	// Structured data, configuration or databases
	Data,
	// A file that can not be identified
	Unknown,
}

impl Category {
	/// The name this category is displayed and sorted by (e.g. `"Archive"`)
	pub fn as_str(&self) -> &'static str {
		(*self).into()
	}

	/// Icon used when an entry does not carry a more specific one
	pub fn default_icon(&self) -> &'static str {
		match self {
			Self::Image => "file-image",
			Self::Document => "file-document",
			Self::Code => "file-code",
			Self::Text => "file-text",
			Self::Audio => "file-audio",
			Self::Video => "file-video",
			Self::Archive => "file-archive",
			Self::Font => "file-font",
			Self::Executable => "file-executable",
			Self::Data => "file-data",
			Self::Unknown => "file",
		}
	}
}
