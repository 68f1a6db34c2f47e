use bv_core::{
	Category, Classifier, Error, Explorer, ExplorerConfig, Inconsistency, ListingError,
	MemoryLister, NavigationOutcome, ObjectEntry, Overrides, PathError, SortDirection, SortField,
	SortOrder, TypeInfo, VirtualPath,
};

use std::{sync::Arc, time::Duration};

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

mod common;

use common::{page, ScriptedLister, Step};

fn bucket() -> MemoryLister {
	let mut lister = MemoryLister::from_keys([
		"a.txt",
		"folder1/",
		"folder1/notes.md",
		"folder1/sub/deep.bin",
		"folder2/archive.tar.gz",
		"script.min.js",
		".gitignore",
	]);
	lister.insert(
		ObjectEntry::new("report")
			.with_content_type("application/pdf; charset=binary")
			.with_size(2048)
			.with_last_modified(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
	);
	lister
}

fn names<'a>(nodes: impl IntoIterator<Item = &'a bv_core::FileNode>) -> Vec<&'a str> {
	nodes.into_iter().map(|node| node.name.as_str()).collect()
}

#[tokio::test]
#[traced_test]
async fn root_view_separates_folders_and_files() {
	let explorer = Explorer::new(bucket());

	let view = explorer.navigate("/").await.unwrap().into_current().unwrap();

	assert!(view.path.is_root());
	assert_eq!(names(&view.folders), ["folder1", "folder2"]);
	assert_eq!(
		names(&view.files),
		[".gitignore", "a.txt", "report", "script.min.js"]
	);
	assert!(view.folders.iter().all(|node| node.type_info.is_none()));

	let info = |name: &str| {
		view.files
			.iter()
			.find(|node| node.name == name)
			.and_then(|node| node.type_info.clone())
			.unwrap()
	};
	assert_eq!(info(".gitignore").display_name, "Git ignore file");
	assert_eq!(info("script.min.js").display_name, "JavaScript (minified)");
	assert_eq!(info("report").category, Category::Document);

	let report = view.files.iter().find(|node| node.name == "report").unwrap();
	assert_eq!(report.size, Some(2048));
	assert!(report.last_modified.is_some());
}

#[tokio::test]
async fn nested_view_hides_own_marker_and_deeper_keys() {
	let explorer = Explorer::new(bucket());

	let view = explorer
		.navigate("/folder1/")
		.await
		.unwrap()
		.into_current()
		.unwrap();

	assert_eq!(names(&view.folders), ["sub"]);
	assert_eq!(view.folders[0].full_key, "folder1/sub/");
	assert_eq!(names(&view.files), ["notes.md"]);
	assert_eq!(view.files[0].full_key, "folder1/notes.md");
}

#[tokio::test]
async fn breadcrumb_leads_back_to_root() {
	let explorer = Explorer::new(bucket());

	let view = explorer
		.navigate("/folder1/")
		.await
		.unwrap()
		.into_current()
		.unwrap();

	assert_eq!(
		view.breadcrumbs
			.iter()
			.map(|crumb| crumb.name.as_str())
			.collect::<Vec<_>>(),
		["Root", "folder1"]
	);

	let root = &view.breadcrumbs[0].path;
	assert_eq!(root.to_storage_prefix(), "");

	let back = explorer.navigate_to(root).await.unwrap().into_current().unwrap();
	assert_eq!(names(&back.folders), ["folder1", "folder2"]);
}

#[tokio::test]
async fn malformed_path_fails_without_listing() {
	let lister = Arc::new(ScriptedLister::pages([page(&[], &[], None)]));
	let explorer = Explorer::new(Arc::clone(&lister));

	let err = explorer.navigate("/a/../b").await.unwrap_err();

	assert!(matches!(
		err,
		Error::InvalidPath(PathError::RelativeSegment(_))
	));
	assert_eq!(lister.request_count(), 0);
	assert_eq!(explorer.tracker().latest_generation(), 0);
}

#[tokio::test]
async fn inconsistent_listing_returns_no_view() {
	let lister = ScriptedLister::pages([
		page(&["a.txt"], &[], Some("t1")),
		page(&["a.txt"], &[], None),
	]);
	let explorer = Explorer::new(lister);

	let err = explorer.navigate("/").await.unwrap_err();

	assert!(matches!(
		err,
		Error::Listing(ListingError::Inconsistent(Inconsistency::DuplicateKey { .. }))
	));
}

#[tokio::test]
#[traced_test]
async fn newer_navigation_cancels_the_older_one() {
	let lister = Arc::new(ScriptedLister::new([
		Step::Page(page(&["slow/1.txt"], &[], Some("t1"))),
		Step::Stall,
		Step::Page(page(&["fast.txt"], &[], None)),
	]));
	let explorer = Arc::new(Explorer::new(Arc::clone(&lister)));

	let slow = tokio::spawn({
		let explorer = Arc::clone(&explorer);
		async move { explorer.navigate("/slow/").await }
	});

	while lister.request_count() < 2 {
		tokio::time::sleep(Duration::from_millis(5)).await;
	}

	let fast = explorer.navigate("/").await.unwrap();
	let view = match fast {
		NavigationOutcome::Current(view) => view,
		other => panic!("expected the newest navigation to win, got {other:?}"),
	};
	assert_eq!(names(&view.files), ["fast.txt"]);

	let err = slow.await.unwrap().unwrap_err();
	assert!(err.is_cancelled());
	assert_eq!(lister.request_count(), 3);
	assert_eq!(explorer.tracker().latest_generation(), 2);
}

#[tokio::test]
async fn config_drives_projection_and_default_sort() {
	let config = ExplorerConfig {
		show_hidden: false,
		root_label: "my-bucket".to_string(),
		default_sort: SortOrder::new(SortField::Size, SortDirection::Desc),
		..Default::default()
	};

	let mut lister = bucket();
	lister.insert(ObjectEntry::new("big.iso").with_size(1 << 30));
	let explorer = Explorer::with_config(lister, &config);

	let view = explorer.navigate("/").await.unwrap().into_current().unwrap();
	assert!(view.files.iter().all(|node| !node.name.starts_with('.')));
	assert_eq!(view.breadcrumbs[0].name, "my-bucket");

	let sorted = explorer.sorted(&view);
	assert_eq!(
		names(&sorted),
		[
			"folder2",
			"folder1",
			"big.iso",
			"report",
			"script.min.js",
			"a.txt"
		]
	);
}

#[tokio::test]
async fn overrides_apply_to_listed_files() {
	let explorer = Explorer::new(bucket()).with_classifier(Classifier::with_overrides(
		Overrides::new().basename(
			"a.txt",
			TypeInfo::new(Category::Data, "text/plain", "Fixture", "beaker"),
		),
	));

	let view = explorer.navigate("/").await.unwrap().into_current().unwrap();
	let a = view.files.iter().find(|node| node.name == "a.txt").unwrap();
	assert_eq!(a.type_info.as_ref().unwrap().display_name, "Fixture");
}

#[tokio::test]
async fn empty_folder_marker_shows_an_empty_directory() {
	let mut lister = MemoryLister::new();
	let path = VirtualPath::parse("/empty/").unwrap();
	assert!(lister.create_folder(&path));
	let explorer = Explorer::new(lister);

	let root = explorer.navigate("/").await.unwrap().into_current().unwrap();
	assert_eq!(names(&root.folders), ["empty"]);
	assert!(root.files.is_empty());

	let inside = explorer.navigate_to(&path).await.unwrap().into_current().unwrap();
	assert!(inside.folders.is_empty());
	assert!(inside.files.is_empty());
}
