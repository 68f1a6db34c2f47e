//! Stored content-type fallback, consulted only when no filename rule matched.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::table::{type_table, TypeEntry};

type_table! {
	MIME_TYPES {
		"application/pdf" => Document, "application/pdf", "PDF Document", "file-pdf";
		"application/msword" => Document, "application/msword", "Word Document";
		"application/vnd.openxmlformats-officedocument.wordprocessingml.document" => Document, "application/vnd.openxmlformats-officedocument.wordprocessingml.document", "Word Document";
		"application/vnd.ms-excel" => Document, "application/vnd.ms-excel", "Excel Spreadsheet", "file-spreadsheet";
		"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => Document, "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet", "Excel Spreadsheet", "file-spreadsheet";
		"application/vnd.ms-powerpoint" => Document, "application/vnd.ms-powerpoint", "PowerPoint Presentation", "file-presentation";
		"application/vnd.openxmlformats-officedocument.presentationml.presentation" => Document, "application/vnd.openxmlformats-officedocument.presentationml.presentation", "PowerPoint Presentation", "file-presentation";
		"application/epub+zip" => Document, "application/epub+zip", "EPUB E-book";
		"application/rtf" => Document, "application/rtf", "Rich Text Document";
		"application/zip" => Archive, "application/zip", "ZIP Archive";
		"application/gzip" => Archive, "application/gzip", "Gzip Compressed File";
		"application/x-gzip" => Archive, "application/gzip", "Gzip Compressed File";
		"application/x-tar" => Archive, "application/x-tar", "Tar Archive";
		"application/x-7z-compressed" => Archive, "application/x-7z-compressed", "7-Zip Archive";
		"application/vnd.rar" => Archive, "application/vnd.rar", "RAR Archive";
		"application/x-rar-compressed" => Archive, "application/vnd.rar", "RAR Archive";
		"application/x-bzip2" => Archive, "application/x-bzip2", "Bzip2 Compressed File";
		"application/zstd" => Archive, "application/zstd", "Zstandard Compressed File";
		"application/json" => Data, "application/json", "JSON File", "file-json";
		"application/xml" => Data, "application/xml", "XML Document";
		"application/yaml" => Data, "application/yaml", "YAML File";
		"application/toml" => Data, "application/toml", "TOML File";
		"application/vnd.sqlite3" => Data, "application/vnd.sqlite3", "SQLite Database", "database";
		"application/x-sqlite3" => Data, "application/vnd.sqlite3", "SQLite Database", "database";
		"application/javascript" => Code, "text/javascript", "JavaScript";
		"application/typescript" => Code, "application/typescript", "TypeScript";
		"application/x-sh" => Code, "application/x-sh", "Shell Script", "file-terminal";
		"application/sql" => Code, "application/sql", "SQL Script";
		"application/wasm" => Executable, "application/wasm", "WebAssembly Module";
		"application/x-msdownload" => Executable, "application/x-msdownload", "Windows Executable";
		"application/vnd.microsoft.portable-executable" => Executable, "application/vnd.microsoft.portable-executable", "Windows Executable";
		"application/vnd.android.package-archive" => Executable, "application/vnd.android.package-archive", "Android Package";
		"application/java-archive" => Executable, "application/java-archive", "Java Archive";
		"text/html" => Code, "text/html", "HTML Document";
		"text/css" => Code, "text/css", "CSS Stylesheet";
		"text/javascript" => Code, "text/javascript", "JavaScript";
		"text/markdown" => Text, "text/markdown", "Markdown Document", "file-markdown";
		"text/csv" => Data, "text/csv", "CSV Spreadsheet", "file-spreadsheet";
		"text/xml" => Data, "application/xml", "XML Document";
		"text/calendar" => Document, "text/calendar", "Calendar File";
		"image/svg+xml" => Image, "image/svg+xml", "SVG Vector Image";
	}
}

type_table! {
	/// Generic rows keyed by the top-level media type, used when the full type is unknown.
	TOP_LEVEL_TYPES {
		"image" => Image, "image/*", "Image";
		"audio" => Audio, "audio/*", "Audio";
		"video" => Video, "video/*", "Video";
		"text" => Text, "text/plain", "Text Document";
		"font" => Font, "font/*", "Font";
	}
}

static BY_MIME: Lazy<HashMap<&'static str, &'static TypeEntry>> = Lazy::new(|| {
	let mut map = HashMap::new();
	for (mime, entry) in MIME_TYPES {
		map.entry(*mime).or_insert(entry);
	}
	map
});

/// Lowercases a stored content type and drops any parameters (`; charset=utf-8`).
///
/// Returns `None` for blank values and for `application/octet-stream`, which says
/// nothing about the object.
pub fn normalize(content_type: &str) -> Option<String> {
	let essence = content_type
		.split(';')
		.next()
		.unwrap_or_default()
		.trim()
		.to_ascii_lowercase();

	if essence.is_empty() || essence == "application/octet-stream" || !essence.contains('/') {
		None
	} else {
		Some(essence)
	}
}

/// Resolves a normalized content type. The returned pair carries the entry and the
/// MIME string to report, which is always the stored one for top-level matches.
pub fn from_mime(essence: &str) -> Option<(&'static TypeEntry, Option<&'static str>)> {
	if let Some(&entry) = BY_MIME.get(essence) {
		return Some((entry, Some(entry.mime_type)));
	}

	let (top_level, _) = essence.split_once('/')?;
	TOP_LEVEL_TYPES
		.iter()
		.find(|(name, _)| *name == top_level)
		.map(|(_, entry)| (entry, None))
}
