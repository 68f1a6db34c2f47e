use crate::{cursor::ListingError, lister::ListerError, path::PathError};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("invalid path: {0}")]
	InvalidPath(#[from] PathError),
	#[error(transparent)]
	Listing(#[from] ListingError),
}

impl From<ListerError> for Error {
	fn from(e: ListerError) -> Self {
		Self::Listing(e.into())
	}
}

impl Error {
	/// A newer navigation took over before this one finished.
	pub const fn is_cancelled(&self) -> bool {
		matches!(self, Self::Listing(ListingError::Cancelled))
	}
}
