//! Runtime selection of a traversal strategy.
//!
//! [`TraversalOrder`] names the six strategies so that callers (for example a command line
//! front end) can pick them at runtime, collect them in an [`EnumSet`] and arrange a collection
//! without naming the concrete strategy type.

use super::{
	AscendingOrder, DescendingOrder, MiddleOutOrder, MiddleOutTieBreak, Order, ReverseOrder, SideCrossOrder,
	Traversal,
};
use crate::Collection;
#[cfg(feature = "cli")]
use clap::ValueEnum;
use enumset::{EnumSet, EnumSetType};
use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

/// The six ways a collection can be traversed.
///
/// * **`Insertion`** – the order the elements were added in.
/// * **`Ascending`** – smallest to largest.
/// * **`Descending`** – largest to smallest.
/// * **`Reverse`** – the insertion order backwards.
/// * **`SideCross`** – smallest, largest, second smallest, second largest, …
/// * **`MiddleOut`** – the middle element, then alternating outwards.
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(EnumSetType, Debug, Hash)]
pub enum TraversalOrder {
	Insertion,
	Ascending,
	Descending,
	Reverse,
	SideCross,
	MiddleOut,
}

impl TraversalOrder {
	/// Every variant, iterated in declaration order.
	pub fn all() -> EnumSet<TraversalOrder> {
		EnumSet::all()
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			TraversalOrder::Insertion => "insertion",
			TraversalOrder::Ascending => "ascending",
			TraversalOrder::Descending => "descending",
			TraversalOrder::Reverse => "reverse",
			TraversalOrder::SideCross => "side-cross",
			TraversalOrder::MiddleOut => "middle-out",
		}
	}

	/// Whether the strategy sorts its snapshot before arranging it.
	pub fn is_sorting(&self) -> bool {
		matches!(
			self,
			TraversalOrder::Ascending | TraversalOrder::Descending | TraversalOrder::SideCross
		)
	}

	/// Builds the matching strategy over `collection` and returns its working sequence.
	pub fn arrange<T: Ord + Clone>(&self, collection: &Collection<T>, tie_break: MiddleOutTieBreak) -> Vec<T> {
		match self {
			TraversalOrder::Insertion => collect(&Order::new(collection)),
			TraversalOrder::Ascending => collect(&AscendingOrder::new(collection)),
			TraversalOrder::Descending => collect(&DescendingOrder::new(collection)),
			TraversalOrder::Reverse => collect(&ReverseOrder::new(collection)),
			TraversalOrder::SideCross => collect(&SideCrossOrder::new(collection)),
			TraversalOrder::MiddleOut => collect(&MiddleOutOrder::with_tie_break(collection, tie_break)),
		}
	}
}

fn collect<T: Clone>(traversal: &impl Traversal<T>) -> Vec<T> {
	traversal.iter().cloned().collect()
}

/// Error returned when parsing an unknown order name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOrder(pub String);

impl Display for UnknownOrder {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "unknown traversal order: '{}'", self.0)
	}
}

impl std::error::Error for UnknownOrder {}

/// Parses case-insensitively; `_` and `-` are interchangeable and `order` is accepted as an alias
/// of `insertion`.
impl FromStr for TraversalOrder {
	type Err = UnknownOrder;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		Ok(match value.trim().to_lowercase().replace('_', "-").as_str() {
			"insertion" | "order" => TraversalOrder::Insertion,
			"ascending" => TraversalOrder::Ascending,
			"descending" => TraversalOrder::Descending,
			"reverse" => TraversalOrder::Reverse,
			"side-cross" | "sidecross" => TraversalOrder::SideCross,
			"middle-out" | "middleout" => TraversalOrder::MiddleOut,
			_ => return Err(UnknownOrder(value.to_string())),
		})
	}
}

impl Display for TraversalOrder {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
