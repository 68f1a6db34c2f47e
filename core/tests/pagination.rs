use bv_core::{
	CursorOptions, Inconsistency, ListPage, ListRequest, ListerError, ListingError, MemoryLister,
	ObjectLister, PaginationCursor, DELIMITER,
};

use std::{collections::BTreeSet, sync::Arc, time::Duration};

use pretty_assertions::assert_eq;
use tokio_util::sync::CancellationToken;
use tracing_test::traced_test;

mod common;

use common::{keys, page, ScriptedLister, Step};

#[tokio::test]
#[traced_test]
async fn two_pages_merge_into_three_entries() {
	let lister = ScriptedLister::pages([
		page(&["a.txt", "b.txt"], &["photos/"], Some("t1")),
		page(&["c.txt"], &[], None),
	]);

	let listing = PaginationCursor::new(&lister).collect("").await.unwrap();

	assert_eq!(keys(&listing.entries), ["a.txt", "b.txt", "c.txt"]);
	assert_eq!(listing.common_prefixes, ["photos/"]);
	assert_eq!(listing.pages, 2);

	let requests = lister.requests();
	assert_eq!(requests.len(), 2);
	assert_eq!(requests[0].continuation_token, None);
	assert_eq!(requests[1].continuation_token.as_deref(), Some("t1"));
	assert_eq!(requests[0].max_keys, 1000);
}

#[tokio::test]
async fn max_keys_is_forwarded() {
	let lister = ScriptedLister::pages([page(&[], &[], None)]);

	PaginationCursor::new(&lister)
		.with_options(CursorOptions {
			max_keys: 2,
			..Default::default()
		})
		.collect("docs/")
		.await
		.unwrap();

	let requests = lister.requests();
	assert_eq!(requests[0].max_keys, 2);
	assert_eq!(requests[0].prefix, "docs/");
}

#[tokio::test]
#[traced_test]
async fn duplicate_key_across_pages_is_inconsistent() {
	let lister = ScriptedLister::pages([
		page(&["a.txt", "b.txt"], &[], Some("t1")),
		page(&["b.txt"], &[], None),
	]);

	let err = PaginationCursor::new(&lister).collect("").await.unwrap_err();

	assert!(matches!(
		err,
		ListingError::Inconsistent(Inconsistency::DuplicateKey { ref key, page: 2 }) if key == "b.txt"
	));
}

#[tokio::test]
async fn duplicate_key_within_a_page_is_inconsistent() {
	let lister = ScriptedLister::pages([page(&["a.txt", "a.txt"], &[], None)]);

	let err = PaginationCursor::new(&lister).collect("").await.unwrap_err();

	assert!(matches!(
		err,
		ListingError::Inconsistent(Inconsistency::DuplicateKey { page: 1, .. })
	));
}

#[tokio::test]
async fn repeated_common_prefixes_collapse() {
	let lister = ScriptedLister::pages([
		page(&[], &["a/", "b/"], Some("t1")),
		page(&[], &["b/", "c/"], None),
	]);

	let listing = PaginationCursor::new(&lister).collect("").await.unwrap();

	assert_eq!(listing.common_prefixes, ["a/", "b/", "c/"]);
}

#[tokio::test]
async fn truncated_page_without_token_is_inconsistent() {
	let lister = ScriptedLister::pages([ListPage {
		is_truncated: true,
		..page(&["a.txt"], &[], None)
	}]);

	let err = PaginationCursor::new(&lister).collect("").await.unwrap_err();

	assert!(matches!(
		err,
		ListingError::Inconsistent(Inconsistency::MissingContinuationToken { page: 1 })
	));
}

#[tokio::test]
#[traced_test]
async fn page_ceiling_stops_endless_listings() {
	let lister = ScriptedLister::pages((0..10).map(|i| {
		let key = format!("k{i}");
		page(&[key.as_str()], &[], Some(&format!("t{i}")))
	}));

	let err = PaginationCursor::new(&lister)
		.with_options(CursorOptions {
			max_pages: 3,
			..Default::default()
		})
		.collect("")
		.await
		.unwrap_err();

	assert!(matches!(err, ListingError::TooManyPages { limit: 3 }));
	assert_eq!(lister.request_count(), 3);
	assert!(logs_contain("page ceiling"));
}

#[tokio::test]
async fn lister_failure_passes_through_without_retry() {
	let lister = ScriptedLister::new([
		Step::Page(page(&["a.txt"], &[], Some("t1"))),
		Step::Fail(ListerError::PermissionDenied("AccessDenied".to_string())),
		Step::Page(page(&["b.txt"], &[], None)),
	]);

	let err = PaginationCursor::new(&lister).collect("").await.unwrap_err();

	assert!(matches!(
		err,
		ListingError::Failed(ListerError::PermissionDenied(ref cause)) if cause == "AccessDenied"
	));
	assert_eq!(lister.request_count(), 2);
}

#[tokio::test]
async fn cancelled_before_start_issues_no_request() {
	let lister = ScriptedLister::pages([page(&["a.txt"], &[], None)]);
	let cancel = CancellationToken::new();
	cancel.cancel();

	let err = PaginationCursor::new(&lister)
		.with_cancellation(cancel)
		.collect("")
		.await
		.unwrap_err();

	assert!(matches!(err, ListingError::Cancelled));
	assert_eq!(lister.request_count(), 0);
}

#[tokio::test]
#[traced_test]
async fn cancellation_abandons_the_request_in_flight() {
	let lister = Arc::new(ScriptedLister::new([
		Step::Page(page(&["a.txt"], &[], Some("t1"))),
		Step::Stall,
		Step::Page(page(&["b.txt"], &[], None)),
	]));
	let cancel = CancellationToken::new();

	let handle = tokio::spawn({
		let lister = Arc::clone(&lister);
		let cancel = cancel.clone();
		async move {
			PaginationCursor::new(&lister)
				.with_cancellation(cancel)
				.collect("")
				.await
		}
	});

	while lister.request_count() < 2 {
		tokio::time::sleep(Duration::from_millis(5)).await;
	}
	cancel.cancel();

	let err = handle.await.unwrap().unwrap_err();
	assert!(matches!(err, ListingError::Cancelled));
	assert_eq!(lister.request_count(), 2);
}

/// Every page size must yield the same merged listing as one unpaginated call.
#[tokio::test]
async fn any_page_split_is_complete() {
	let lister = MemoryLister::from_keys([
		"a.txt",
		"b/1.txt",
		"b/2/deep.txt",
		"c.bin",
		"d/",
		"e.md",
		"f/x",
		"f/y",
		"g.tar.gz",
		"h/",
		"h/inner.txt",
	]);

	let single = lister
		.list(ListRequest {
			prefix: "",
			delimiter: DELIMITER,
			max_keys: 1000,
			continuation_token: None,
		})
		.await
		.unwrap();
	assert!(!single.is_truncated);

	let expected_keys = single
		.entries
		.iter()
		.map(|entry| entry.key.clone())
		.collect::<BTreeSet<_>>();
	let expected_prefixes = single
		.common_prefixes
		.iter()
		.cloned()
		.collect::<BTreeSet<_>>();
	assert_eq!(expected_keys.len(), 4);
	assert_eq!(expected_prefixes.len(), 4);

	for max_keys in 1..=9 {
		let listing = PaginationCursor::new(&lister)
			.with_options(CursorOptions {
				max_keys,
				..Default::default()
			})
			.collect("")
			.await
			.unwrap();

		assert_eq!(listing.entries.len(), expected_keys.len(), "max_keys={max_keys}");
		assert_eq!(
			listing
				.entries
				.iter()
				.map(|entry| entry.key.clone())
				.collect::<BTreeSet<_>>(),
			expected_keys
		);
		assert_eq!(
			listing.common_prefixes.iter().cloned().collect::<BTreeSet<_>>(),
			expected_prefixes
		);
	}
}
