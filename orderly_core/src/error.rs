//! Error type shared by collections and cursors.
//!
//! Only two things can go wrong in this crate: removing a value that is not stored, and reading
//! through a cursor that already sits at the end of its sequence. Both are reported as values of
//! [`Error`] and never leave a partial effect behind.

use std::fmt::{Display, Formatter};

/// A type alias for `std::result::Result` that uses [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error raised by a collection or a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
	/// `Collection::remove` found zero occurrences of the value.
	NotFound,
	/// A cursor was dereferenced at its end position.
	OutOfRange,
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "element not found in collection"),
			Error::OutOfRange => write!(f, "cannot dereference a cursor at the end of its sequence"),
		}
	}
}

impl std::error::Error for Error {}
