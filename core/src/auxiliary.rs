use std::{fmt::Display, future::Future};

use futures::{stream, FutureExt, StreamExt};
use tracing::{trace, warn};

pub const DEFAULT_AUX_CONCURRENCY: usize = 4;

/// Runs `op` once per item with at most `limit` calls in flight.
///
/// The returned results line up with `items`. A failed call is logged and kept
/// as its own `Err`, the remaining items still run.
pub async fn run_bounded<'a, T, F, Fut, R, E>(
	items: &'a [T],
	limit: usize,
	op: F,
) -> Vec<Result<R, E>>
where
	F: Fn(&'a T) -> Fut,
	Fut: Future<Output = Result<R, E>>,
	E: Display,
{
	let limit = limit.max(1);
	trace!(items = items.len(), limit, "Running bounded auxiliary work");

	let mut results = stream::iter(items.iter().enumerate())
		.map(|(index, item)| op(item).map(move |result| (index, result)))
		.buffer_unordered(limit)
		.collect::<Vec<_>>()
		.await;

	results.sort_unstable_by_key(|(index, _)| *index);

	results
		.into_iter()
		.map(|(index, result)| {
			if let Err(e) = &result {
				warn!(index, "Auxiliary operation failed: {e}");
			}
			result
		})
		.collect()
}
