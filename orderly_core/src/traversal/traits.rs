use crate::{Cursor, Iter, SequenceId};

/// A read-only ordering of a collection's elements.
///
/// Implementors own their working sequence, computed once when they are built. Only
/// [`Traversal::sequence`] and [`Traversal::id`] need to be provided, cursors and iteration come
/// for free.
pub trait Traversal<T> {
	/// The reordered working sequence.
	fn sequence(&self) -> &[T];

	/// Tag carried by every cursor of this traversal.
	fn id(&self) -> SequenceId;

	fn begin(&self) -> Cursor<'_, T> {
		Cursor::begin(self.sequence(), self.id())
	}

	fn end(&self) -> Cursor<'_, T> {
		Cursor::end(self.sequence(), self.id())
	}

	fn iter(&self) -> Iter<'_, T> {
		Iter::new(self.begin(), self.end())
	}

	fn len(&self) -> usize {
		self.sequence().len()
	}

	fn is_empty(&self) -> bool {
		self.sequence().is_empty()
	}
}

/// Implements [`Traversal`], `IntoIterator for &_` and `Debug` for a strategy struct with the
/// fields `data: Vec<T>` and `id: SequenceId`.
macro_rules! impl_traversal {
	($name:ident) => {
		impl<T> $crate::traversal::Traversal<T> for $name<T> {
			fn sequence(&self) -> &[T] {
				&self.data
			}

			fn id(&self) -> $crate::SequenceId {
				self.id
			}
		}

		impl<'a, T> IntoIterator for &'a $name<T> {
			type Item = &'a T;
			type IntoIter = $crate::Iter<'a, T>;

			fn into_iter(self) -> Self::IntoIter {
				$crate::traversal::Traversal::iter(self)
			}
		}

		impl<T: std::fmt::Debug> std::fmt::Debug for $name<T> {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.debug_tuple(stringify!($name)).field(&self.data).finish()
			}
		}
	};
}

pub(crate) use impl_traversal;
