//! Forward-only cursors over a fixed sequence.
//!
//! A [`Cursor`] is a position inside exactly one sequence together with that sequence's end,
//! which is used for bounds checking. Dereferencing a cursor at the end position fails with
//! [`Error::OutOfRange`] instead of reading past the data.
//!
//! Every sequence that hands out cursors is tagged with a [`SequenceId`]. Cursors remember the id
//! of their owner, so two cursors from different sequences never compare equal, even when they
//! happen to point at the same index.
//!
//! # Examples
//!
//! ```rust
//! use orderly_core::{Collection, Error};
//!
//! let collection: Collection<i32> = [7, 15].into_iter().collect();
//! let mut cursor = collection.begin();
//! assert_eq!(cursor.get(), Ok(&7));
//! cursor.advance().advance();
//! assert!(cursor == collection.end());
//! assert_eq!(cursor.get(), Err(Error::OutOfRange));
//! ```

use crate::{Error, Result};
use std::{
	fmt::Debug,
	iter::FusedIterator,
	sync::atomic::{AtomicU64, Ordering},
};

static NEXT_SEQUENCE_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique tag of a sequence that hands out cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SequenceId(u64);

impl SequenceId {
	/// Allocates a new, never before returned id.
	pub fn fresh() -> Self {
		SequenceId(NEXT_SEQUENCE_ID.fetch_add(1, Ordering::Relaxed))
	}
}

/// A position within one sequence.
pub struct Cursor<'a, T> {
	sequence: &'a [T],
	position: usize,
	owner: SequenceId,
}

impl<'a, T> Cursor<'a, T> {
	/// Creates a cursor at `position`. Positions past the end are clamped to the end.
	pub fn new(sequence: &'a [T], position: usize, owner: SequenceId) -> Self {
		Cursor {
			sequence,
			position: position.min(sequence.len()),
			owner,
		}
	}

	/// Cursor at the first element, equal to [`Cursor::end`] for an empty sequence.
	pub fn begin(sequence: &'a [T], owner: SequenceId) -> Self {
		Cursor::new(sequence, 0, owner)
	}

	/// Cursor one past the last element.
	pub fn end(sequence: &'a [T], owner: SequenceId) -> Self {
		Cursor::new(sequence, sequence.len(), owner)
	}

	/// Returns the element under the cursor.
	///
	/// # Errors
	/// Returns [`Error::OutOfRange`] if the cursor is at the end.
	pub fn get(&self) -> Result<&'a T> {
		self.sequence.get(self.position).ok_or(Error::OutOfRange)
	}

	/// Applies `f` to the element under the cursor, the member access form of [`Cursor::get`].
	///
	/// # Errors
	/// Returns [`Error::OutOfRange`] if the cursor is at the end.
	pub fn map_ref<R>(&self, f: impl FnOnce(&'a T) -> R) -> Result<R> {
		self.get().map(f)
	}

	/// Moves one position forward and returns the moved cursor.
	///
	/// A cursor at the end stays at the end.
	pub fn advance(&mut self) -> &mut Self {
		if self.position < self.sequence.len() {
			self.position += 1;
		}
		self
	}

	/// Moves one position forward and returns the cursor as it was before moving.
	pub fn post_advance(&mut self) -> Self {
		let previous = *self;
		self.advance();
		previous
	}

	pub fn is_end(&self) -> bool {
		self.position == self.sequence.len()
	}

	pub fn position(&self) -> usize {
		self.position
	}

	pub fn owner(&self) -> SequenceId {
		self.owner
	}

	/// Number of elements between this cursor and the end.
	pub fn remaining(&self) -> usize {
		self.sequence.len() - self.position
	}
}

impl<T> Clone for Cursor<'_, T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Cursor<'_, T> {}

/// Cursors compare their owner and position only, the end marker is ignored.
impl<T> PartialEq for Cursor<'_, T> {
	fn eq(&self, other: &Self) -> bool {
		self.owner == other.owner && self.position == other.position
	}
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> Debug for Cursor<'_, T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Cursor")
			.field("position", &self.position)
			.field("len", &self.sequence.len())
			.field("owner", &self.owner)
			.finish()
	}
}

/// Iterator driven by a pair of cursors, yielding every element from `begin` up to `end`.
pub struct Iter<'a, T> {
	cursor: Cursor<'a, T>,
	end: Cursor<'a, T>,
}

impl<'a, T> Iter<'a, T> {
	pub fn new(begin: Cursor<'a, T>, end: Cursor<'a, T>) -> Self {
		debug_assert_eq!(begin.owner(), end.owner(), "cursors belong to different sequences");
		Iter { cursor: begin, end }
	}
}

impl<'a, T> Iterator for Iter<'a, T> {
	type Item = &'a T;

	fn next(&mut self) -> Option<&'a T> {
		if self.cursor == self.end {
			return None;
		}
		let item = self.cursor.get().ok()?;
		self.cursor.advance();
		Some(item)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.end.position().saturating_sub(self.cursor.position());
		(len, Some(len))
	}
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
	fn clone(&self) -> Self {
		Iter {
			cursor: self.cursor,
			end: self.end,
		}
	}
}

impl<T> Debug for Iter<'_, T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Iter")
			.field("position", &self.cursor.position())
			.field("end", &self.end.position())
			.finish()
	}
}
