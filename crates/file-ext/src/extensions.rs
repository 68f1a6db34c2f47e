///
/// Extension tables, keyed by lowercase extension without the leading dot.
///
/// References:
/// https://www.iana.org/assignments/media-types/media-types.xhtml
/// https://developer.mozilla.org/en-US/docs/Web/HTTP/Basics_of_HTTP/MIME_types/Common_types
///
use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::table::{type_table, TypeEntry};

// image extensions
type_table! {
	IMAGE_EXTENSIONS {
		"png" => Image, "image/png", "PNG Image";
		"jpg" => Image, "image/jpeg", "JPEG Image";
		"jpeg" => Image, "image/jpeg", "JPEG Image";
		"gif" => Image, "image/gif", "GIF Image";
		"bmp" => Image, "image/bmp", "Bitmap Image";
		"tif" => Image, "image/tiff", "TIFF Image";
		"tiff" => Image, "image/tiff", "TIFF Image";
		"webp" => Image, "image/webp", "WebP Image";
		"svg" => Image, "image/svg+xml", "SVG Vector Image";
		"ico" => Image, "image/vnd.microsoft.icon", "Icon";
		"heic" => Image, "image/heic", "HEIC Image";
		"heif" => Image, "image/heif", "HEIF Image";
		"avif" => Image, "image/avif", "AVIF Image";
		"raw" => Image, "image/x-raw", "RAW Image";
		"dng" => Image, "image/x-adobe-dng", "Digital Negative";
		"cr2" => Image, "image/x-canon-cr2", "Canon RAW Image";
		"nef" => Image, "image/x-nikon-nef", "Nikon RAW Image";
		"psd" => Image, "image/vnd.adobe.photoshop", "Photoshop Document";
		"ai" => Image, "application/postscript", "Illustrator Artwork";
		"eps" => Image, "application/postscript", "Encapsulated PostScript";
	}
}

// document extensions
type_table! {
	DOCUMENT_EXTENSIONS {
		"pdf" => Document, "application/pdf", "PDF Document", "file-pdf";
		"doc" => Document, "application/msword", "Word Document";
		"docx" => Document, "application/vnd.openxmlformats-officedocument.wordprocessingml.document", "Word Document";
		"xls" => Document, "application/vnd.ms-excel", "Excel Spreadsheet", "file-spreadsheet";
		"xlsx" => Document, "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet", "Excel Spreadsheet", "file-spreadsheet";
		"ppt" => Document, "application/vnd.ms-powerpoint", "PowerPoint Presentation", "file-presentation";
		"pptx" => Document, "application/vnd.openxmlformats-officedocument.presentationml.presentation", "PowerPoint Presentation", "file-presentation";
		"odt" => Document, "application/vnd.oasis.opendocument.text", "OpenDocument Text";
		"ods" => Document, "application/vnd.oasis.opendocument.spreadsheet", "OpenDocument Spreadsheet", "file-spreadsheet";
		"odp" => Document, "application/vnd.oasis.opendocument.presentation", "OpenDocument Presentation", "file-presentation";
		"rtf" => Document, "application/rtf", "Rich Text Document";
		"pages" => Document, "application/vnd.apple.pages", "Pages Document";
		"numbers" => Document, "application/vnd.apple.numbers", "Numbers Spreadsheet", "file-spreadsheet";
		"key" => Document, "application/vnd.apple.keynote", "Keynote Presentation", "file-presentation";
		"epub" => Document, "application/epub+zip", "EPUB E-book";
		"ics" => Document, "text/calendar", "Calendar File";
	}
}

// text file extensions
type_table! {
	TEXT_EXTENSIONS {
		"txt" => Text, "text/plain", "Plain Text";
		"md" => Text, "text/markdown", "Markdown Document", "file-markdown";
		"markdown" => Text, "text/markdown", "Markdown Document", "file-markdown";
		"log" => Text, "text/plain", "Log File";
		"rst" => Text, "text/x-rst", "reStructuredText Document";
		"tex" => Text, "application/x-tex", "LaTeX Document";
		"nfo" => Text, "text/plain", "Info File";
		"srt" => Text, "application/x-subrip", "SubRip Subtitles";
		"vtt" => Text, "text/vtt", "WebVTT Subtitles";
	}
}

// code extensions
type_table! {
	CODE_EXTENSIONS {
		"rs" => Code, "text/x-rust", "Rust Source";
		"js" => Code, "text/javascript", "JavaScript";
		"mjs" => Code, "text/javascript", "JavaScript Module";
		"cjs" => Code, "text/javascript", "CommonJS Module";
		"jsx" => Code, "text/jsx", "JavaScript JSX";
		"ts" => Code, "application/typescript", "TypeScript";
		"tsx" => Code, "text/tsx", "TypeScript JSX";
		"py" => Code, "text/x-python", "Python Script";
		"rb" => Code, "text/x-ruby", "Ruby Script";
		"php" => Code, "application/x-httpd-php", "PHP Script";
		"java" => Code, "text/x-java-source", "Java Source";
		"kt" => Code, "text/x-kotlin", "Kotlin Source";
		"kts" => Code, "text/x-kotlin", "Kotlin Script";
		"scala" => Code, "text/x-scala", "Scala Source";
		"go" => Code, "text/x-go", "Go Source";
		"c" => Code, "text/x-c", "C Source";
		"h" => Code, "text/x-c", "C Header";
		"cpp" => Code, "text/x-c++src", "C++ Source";
		"cc" => Code, "text/x-c++src", "C++ Source";
		"hpp" => Code, "text/x-c++hdr", "C++ Header";
		"cs" => Code, "text/x-csharp", "C# Source";
		"swift" => Code, "text/x-swift", "Swift Source";
		"dart" => Code, "application/dart", "Dart Source";
		"lua" => Code, "text/x-lua", "Lua Script";
		"pl" => Code, "text/x-perl", "Perl Script";
		"r" => Code, "text/x-r", "R Script";
		"sh" => Code, "application/x-sh", "Shell Script", "file-terminal";
		"bash" => Code, "application/x-sh", "Bash Script", "file-terminal";
		"zsh" => Code, "application/x-sh", "Zsh Script", "file-terminal";
		"fish" => Code, "application/x-sh", "Fish Script", "file-terminal";
		"ps1" => Code, "text/plain", "PowerShell Script", "file-terminal";
		"html" => Code, "text/html", "HTML Document";
		"htm" => Code, "text/html", "HTML Document";
		"css" => Code, "text/css", "CSS Stylesheet";
		"scss" => Code, "text/x-scss", "Sass Stylesheet";
		"sass" => Code, "text/x-sass", "Sass Stylesheet";
		"less" => Code, "text/x-less", "Less Stylesheet";
		"vue" => Code, "text/x-vue", "Vue Component";
		"svelte" => Code, "text/x-svelte", "Svelte Component";
		"astro" => Code, "text/x-astro", "Astro Component";
		"mdx" => Code, "text/mdx", "MDX Document";
		"sql" => Code, "application/sql", "SQL Script";
		"graphql" => Code, "application/graphql", "GraphQL Schema";
		"asm" => Code, "text/x-asm", "Assembly Source";
		"hs" => Code, "text/x-haskell", "Haskell Source";
		"ex" => Code, "text/x-elixir", "Elixir Source";
		"exs" => Code, "text/x-elixir", "Elixir Script";
		"erl" => Code, "text/x-erlang", "Erlang Source";
		"clj" => Code, "text/x-clojure", "Clojure Source";
		"zig" => Code, "text/x-zig", "Zig Source";
	}
}

// structured data and configuration extensions
type_table! {
	DATA_EXTENSIONS {
		"json" => Data, "application/json", "JSON File", "file-json";
		"jsonl" => Data, "application/jsonl", "JSON Lines File", "file-json";
		"ndjson" => Data, "application/x-ndjson", "Newline Delimited JSON", "file-json";
		"yaml" => Data, "application/yaml", "YAML File";
		"yml" => Data, "application/yaml", "YAML File";
		"toml" => Data, "application/toml", "TOML File";
		"xml" => Data, "application/xml", "XML Document";
		"csv" => Data, "text/csv", "CSV Spreadsheet", "file-spreadsheet";
		"tsv" => Data, "text/tab-separated-values", "TSV Spreadsheet", "file-spreadsheet";
		"ini" => Data, "text/plain", "Configuration File", "file-settings";
		"cfg" => Data, "text/plain", "Configuration File", "file-settings";
		"conf" => Data, "text/plain", "Configuration File", "file-settings";
		"plist" => Data, "application/x-plist", "Property List", "file-settings";
		"lock" => Data, "text/plain", "Lock File", "file-lock";
		"sqlite" => Data, "application/vnd.sqlite3", "SQLite Database", "database";
		"db" => Data, "application/octet-stream", "Database File", "database";
		"parquet" => Data, "application/vnd.apache.parquet", "Parquet Dataset", "database";
		"avro" => Data, "application/avro", "Avro Dataset", "database";
		"proto" => Data, "text/plain", "Protocol Buffers Schema";
	}
}

// audio extensions
type_table! {
	AUDIO_EXTENSIONS {
		"mp3" => Audio, "audio/mpeg", "MP3 Audio";
		"wav" => Audio, "audio/wav", "WAV Audio";
		"flac" => Audio, "audio/flac", "FLAC Audio";
		"aac" => Audio, "audio/aac", "AAC Audio";
		"ogg" => Audio, "audio/ogg", "Ogg Audio";
		"oga" => Audio, "audio/ogg", "Ogg Audio";
		"opus" => Audio, "audio/opus", "Opus Audio";
		"m4a" => Audio, "audio/mp4", "MPEG-4 Audio";
		"wma" => Audio, "audio/x-ms-wma", "Windows Media Audio";
		"aiff" => Audio, "audio/aiff", "AIFF Audio";
		"aif" => Audio, "audio/aiff", "AIFF Audio";
		"mid" => Audio, "audio/midi", "MIDI Sequence";
		"midi" => Audio, "audio/midi", "MIDI Sequence";
		"amr" => Audio, "audio/amr", "AMR Audio";
	}
}

// video extensions
type_table! {
	VIDEO_EXTENSIONS {
		"mp4" => Video, "video/mp4", "MPEG-4 Video";
		"m4v" => Video, "video/x-m4v", "MPEG-4 Video";
		"mov" => Video, "video/quicktime", "QuickTime Movie";
		"avi" => Video, "video/x-msvideo", "AVI Video";
		"mkv" => Video, "video/x-matroska", "Matroska Video";
		"webm" => Video, "video/webm", "WebM Video";
		"wmv" => Video, "video/x-ms-wmv", "Windows Media Video";
		"flv" => Video, "video/x-flv", "Flash Video";
		"mpg" => Video, "video/mpeg", "MPEG Video";
		"mpeg" => Video, "video/mpeg", "MPEG Video";
		"3gp" => Video, "video/3gpp", "3GPP Video";
		"m2ts" => Video, "video/mp2t", "MPEG-2 Transport Stream";
		"mts" => Video, "video/mp2t", "AVCHD Video";
		"ogv" => Video, "video/ogg", "Ogg Video";
		"vob" => Video, "video/dvd", "DVD Video Object";
	}
}

// archive extensions
type_table! {
	ARCHIVE_EXTENSIONS {
		"zip" => Archive, "application/zip", "ZIP Archive";
		"rar" => Archive, "application/vnd.rar", "RAR Archive";
		"7z" => Archive, "application/x-7z-compressed", "7-Zip Archive";
		"tar" => Archive, "application/x-tar", "Tar Archive";
		"gz" => Archive, "application/gzip", "Gzip Compressed File";
		"tgz" => Archive, "application/gzip", "Gzip Archive";
		"bz2" => Archive, "application/x-bzip2", "Bzip2 Compressed File";
		"tbz2" => Archive, "application/x-bzip2", "Bzip2 Archive";
		"xz" => Archive, "application/x-xz", "XZ Compressed File";
		"txz" => Archive, "application/x-xz", "XZ Archive";
		"zst" => Archive, "application/zstd", "Zstandard Compressed File";
		"lz" => Archive, "application/x-lzip", "Lzip Compressed File";
		"lzma" => Archive, "application/x-lzma", "LZMA Compressed File";
		"z" => Archive, "application/x-compress", "Unix Compressed File";
		"cab" => Archive, "application/vnd.ms-cab-compressed", "Cabinet Archive";
		"iso" => Archive, "application/x-iso9660-image", "Disk Image";
	}
}

// font extensions
type_table! {
	FONT_EXTENSIONS {
		"ttf" => Font, "font/ttf", "TrueType Font";
		"otf" => Font, "font/otf", "OpenType Font";
		"woff" => Font, "font/woff", "Web Open Font";
		"woff2" => Font, "font/woff2", "Web Open Font 2";
		"eot" => Font, "application/vnd.ms-fontobject", "Embedded OpenType Font";
	}
}

// executable extensions
type_table! {
	EXECUTABLE_EXTENSIONS {
		"exe" => Executable, "application/vnd.microsoft.portable-executable", "Windows Executable";
		"msi" => Executable, "application/x-msi", "Windows Installer";
		"bat" => Executable, "application/x-bat", "Batch File";
		"com" => Executable, "application/x-msdownload", "DOS Executable";
		"dll" => Executable, "application/x-msdownload", "Dynamic Link Library";
		"so" => Executable, "application/x-sharedlib", "Shared Library";
		"dylib" => Executable, "application/x-mach-binary", "Dynamic Library";
		"app" => Executable, "application/octet-stream", "Application Bundle";
		"apk" => Executable, "application/vnd.android.package-archive", "Android Package";
		"deb" => Executable, "application/vnd.debian.binary-package", "Debian Package";
		"rpm" => Executable, "application/x-rpm", "RPM Package";
		"dmg" => Executable, "application/x-apple-diskimage", "Apple Disk Image";
		"pkg" => Executable, "application/octet-stream", "Installer Package";
		"jar" => Executable, "application/java-archive", "Java Archive";
		"appimage" => Executable, "application/vnd.appimage", "AppImage";
		"wasm" => Executable, "application/wasm", "WebAssembly Module";
		"bin" => Executable, "application/octet-stream", "Binary File";
	}
}

type_table! {
	/// Multi-segment suffixes, matched before single extensions. Longest match wins,
	/// equal lengths fall back to declaration order.
	pub COMPOUND_EXTENSIONS {
		".tar.gz" => Archive, "application/gzip", "Gzip Archive";
		".tar.bz2" => Archive, "application/x-bzip2", "Bzip2 Archive";
		".tar.xz" => Archive, "application/x-xz", "XZ Archive";
		".tar.zst" => Archive, "application/zstd", "Zstandard Archive";
		".min.js" => Code, "text/javascript", "JavaScript (minified)";
		".min.css" => Code, "text/css", "CSS (minified)";
		".spec.js" => Code, "text/javascript", "JavaScript Test Spec", "file-test";
		".spec.ts" => Code, "application/typescript", "TypeScript Test Spec", "file-test";
		".test.js" => Code, "text/javascript", "JavaScript Test", "file-test";
		".test.ts" => Code, "application/typescript", "TypeScript Test", "file-test";
		".config.js" => Code, "text/javascript", "JavaScript Config", "file-settings";
		".config.mjs" => Code, "text/javascript", "JavaScript Config", "file-settings";
		".config.ts" => Code, "application/typescript", "TypeScript Config", "file-settings";
		".d.ts" => Code, "application/typescript", "TypeScript Declaration";
		".js.map" => Data, "application/json", "Source Map", "file-json";
		".css.map" => Data, "application/json", "Source Map", "file-json";
		".module.css" => Code, "text/css", "CSS Module";
		".blade.php" => Code, "application/x-httpd-php", "Blade Template";
	}
}

/// Every single-extension category table, in lookup order.
pub static ALL_EXTENSION_TABLES: &[&[(&str, TypeEntry)]] = &[
	IMAGE_EXTENSIONS,
	DOCUMENT_EXTENSIONS,
	TEXT_EXTENSIONS,
	CODE_EXTENSIONS,
	DATA_EXTENSIONS,
	AUDIO_EXTENSIONS,
	VIDEO_EXTENSIONS,
	ARCHIVE_EXTENSIONS,
	FONT_EXTENSIONS,
	EXECUTABLE_EXTENSIONS,
];

static EXTENSIONS: Lazy<HashMap<&'static str, &'static TypeEntry>> = Lazy::new(|| {
	let mut map = HashMap::new();
	for (extension, entry) in ALL_EXTENSION_TABLES.iter().flat_map(|table| table.iter()) {
		// first declaration wins
		map.entry(*extension).or_insert(entry);
	}
	map
});

/// Looks up a single extension (without the dot). Matching is ASCII case-insensitive.
pub fn from_extension(extension: &str) -> Option<&'static TypeEntry> {
	if extension.bytes().any(|b| b.is_ascii_uppercase()) {
		EXTENSIONS.get(extension.to_ascii_lowercase().as_str()).copied()
	} else {
		EXTENSIONS.get(extension).copied()
	}
}

/// Finds the longest compound suffix `lowercase_name` ends with, leaving a non-empty stem.
pub fn longest_compound(lowercase_name: &str) -> Option<&'static TypeEntry> {
	let mut best: Option<(usize, &'static TypeEntry)> = None;

	for (suffix, entry) in COMPOUND_EXTENSIONS {
		if lowercase_name.len() > suffix.len()
			&& lowercase_name.ends_with(suffix)
			&& best.map_or(true, |(len, _)| suffix.len() > len)
		{
			best = Some((suffix.len(), entry));
		}
	}

	best.map(|(_, entry)| entry)
}
