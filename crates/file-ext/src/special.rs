//! Dotfiles and well-known extension-less names, matched on the exact basename.

use crate::table::{type_table, TypeEntry};

type_table! {
	pub SPECIAL_FILES {
		".gitignore" => Text, "text/plain", "Git ignore file", "git";
		".gitattributes" => Text, "text/plain", "Git attributes file", "git";
		".gitmodules" => Text, "text/plain", "Git submodules file", "git";
		".gitkeep" => Text, "text/plain", "Git placeholder file", "git";
		".dockerignore" => Text, "text/plain", "Docker ignore file", "docker";
		".npmignore" => Text, "text/plain", "npm ignore file";
		".env" => Data, "text/plain", "Environment file", "file-settings";
		".env.local" => Data, "text/plain", "Environment file (local)", "file-settings";
		".env.example" => Data, "text/plain", "Environment file (example)", "file-settings";
		".env.production" => Data, "text/plain", "Environment file (production)", "file-settings";
		".env.development" => Data, "text/plain", "Environment file (development)", "file-settings";
		".bashrc" => Code, "application/x-sh", "Bash configuration", "file-terminal";
		".bash_profile" => Code, "application/x-sh", "Bash profile", "file-terminal";
		".zshrc" => Code, "application/x-sh", "Zsh configuration", "file-terminal";
		".profile" => Code, "application/x-sh", "Shell profile", "file-terminal";
		".vimrc" => Data, "text/plain", "Vim configuration", "file-settings";
		".editorconfig" => Data, "text/plain", "EditorConfig file", "file-settings";
		".npmrc" => Data, "text/plain", "npm configuration", "file-settings";
		".nvmrc" => Data, "text/plain", "Node version file", "file-settings";
		".prettierrc" => Data, "application/json", "Prettier configuration", "file-settings";
		".eslintrc" => Data, "application/json", "ESLint configuration", "file-settings";
		".babelrc" => Data, "application/json", "Babel configuration", "file-settings";
		".htaccess" => Data, "text/plain", "Apache configuration", "file-settings";
		".DS_Store" => Data, "application/octet-stream", "Finder metadata";
		"Dockerfile" => Code, "text/x-dockerfile", "Dockerfile", "docker";
		"Containerfile" => Code, "text/x-dockerfile", "Containerfile", "docker";
		"Makefile" => Code, "text/x-makefile", "Makefile";
		"GNUmakefile" => Code, "text/x-makefile", "Makefile";
		"CMakeLists.txt" => Code, "text/x-cmake", "CMake build file";
		"Jenkinsfile" => Code, "text/x-groovy", "Jenkins pipeline";
		"Vagrantfile" => Code, "text/x-ruby", "Vagrant configuration";
		"Gemfile" => Code, "text/x-ruby", "Ruby Gemfile";
		"Rakefile" => Code, "text/x-ruby", "Ruby Rakefile";
		"Procfile" => Data, "text/plain", "Procfile", "file-settings";
		"README" => Text, "text/plain", "Readme", "file-info";
		"LICENSE" => Text, "text/plain", "License", "file-license";
		"LICENCE" => Text, "text/plain", "License", "file-license";
		"COPYING" => Text, "text/plain", "License", "file-license";
		"CHANGELOG" => Text, "text/plain", "Changelog";
		"AUTHORS" => Text, "text/plain", "Authors file";
		"go.mod" => Data, "text/plain", "Go module file";
		"go.sum" => Data, "text/plain", "Go checksum file", "file-lock";
		"Cargo.lock" => Data, "text/plain", "Cargo lockfile", "file-lock";
		"package-lock.json" => Data, "application/json", "npm lockfile", "file-lock";
		"yarn.lock" => Data, "text/plain", "Yarn lockfile", "file-lock";
	}
}

/// Case-sensitive lookup on the full basename.
pub fn from_basename(name: &str) -> Option<&'static TypeEntry> {
	SPECIAL_FILES
		.iter()
		.find(|(basename, _)| *basename == name)
		.map(|(_, entry)| entry)
}
