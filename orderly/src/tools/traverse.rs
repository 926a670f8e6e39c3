use anyhow::{Context, Result};
use clap::Args;
use enumset::EnumSet;
use orderly_core::{Collection, MiddleOutTieBreak, TraversalOrder};
use std::{fmt::Display, str::FromStr};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// values added to the collection, in insertion order
	#[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
	values: Vec<String>,

	/// treat values as text instead of integers
	#[arg(long, short)]
	text: bool,

	/// orders to print, may be repeated
	/// prints every order if omitted
	#[arg(long, short, value_enum, verbatim_doc_comment)]
	order: Vec<TraversalOrder>,

	/// remove every occurrence of a value before traversing, may be repeated
	/// fails if the value is not in the collection
	#[arg(long, short, allow_negative_numbers = true, verbatim_doc_comment)]
	remove: Vec<String>,

	/// which neighbour middle-out order emits first
	#[arg(long, value_enum, default_value_t = MiddleOutTieBreak::LeftFirst)]
	tie_break: MiddleOutTieBreak,
}

impl Subcommand {
	fn orders(&self) -> EnumSet<TraversalOrder> {
		if self.order.is_empty() {
			TraversalOrder::all()
		} else {
			self.order.iter().copied().collect()
		}
	}
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	for line in render(arguments)? {
		println!("{line}");
	}
	Ok(())
}

/// Renders the collection followed by one line per requested order.
fn render(arguments: &Subcommand) -> Result<Vec<String>> {
	if arguments.text {
		traverse::<String>(arguments)
	} else {
		traverse::<i64>(arguments)
	}
}

fn traverse<T>(arguments: &Subcommand) -> Result<Vec<String>>
where
	T: FromStr + Ord + Clone + Display,
	T::Err: std::error::Error + Send + Sync + 'static,
{
	let mut collection: Collection<T> = parse_all::<T>(&arguments.values)?.into_iter().collect();
	log::debug!("built collection of {} element(s)", collection.size());

	for value in parse_all::<T>(&arguments.remove)? {
		let removed = collection
			.remove(&value)
			.with_context(|| format!("cannot remove '{value}'"))?;
		log::info!("removed {removed} occurrence(s) of '{value}'");
	}

	let mut lines = vec![format!("collection: {collection}")];
	for order in arguments.orders() {
		let arranged = Collection::from(order.arrange(&collection, arguments.tie_break));
		lines.push(format!("{order}: {arranged}"));
	}
	Ok(lines)
}

fn parse_all<T>(values: &[String]) -> Result<Vec<T>>
where
	T: FromStr,
	T::Err: std::error::Error + Send + Sync + 'static,
{
	values
		.iter()
		.map(|value| {
			value
				.trim()
				.parse::<T>()
				.with_context(|| format!("invalid value '{value}', use --text for non-numeric values"))
		})
		.collect()
}
