use anyhow::Result;
use clap::Args;
use orderly_core::{
	AscendingOrder, Collection, DescendingOrder, MiddleOutOrder, Order, ReverseOrder, SideCrossOrder, Traversal,
};
use std::fmt::Display;

#[derive(Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {}

pub fn run(_arguments: &Subcommand) -> Result<()> {
	for line in lines() {
		println!("{line}");
	}
	Ok(())
}

fn lines() -> Vec<String> {
	let mut numbers = Collection::new();
	for value in [7, 15, 6, 1, 2] {
		numbers.add(value);
	}

	let mut words = Collection::new();
	for word in ["apple", "banana", "cherry"] {
		words.add(word.to_string());
	}

	vec![
		format!("collection: {numbers}"),
		walk("insertion", &Order::new(&numbers)),
		walk("ascending", &AscendingOrder::new(&numbers)),
		walk("descending", &DescendingOrder::new(&numbers)),
		walk("reverse", &ReverseOrder::new(&numbers)),
		walk("side-cross", &SideCrossOrder::new(&numbers)),
		walk("middle-out", &MiddleOutOrder::new(&numbers)),
		format!("collection: {words}"),
		walk("insertion", &Order::new(&words)),
	]
}

/// Walks a traversal from begin to end with its cursor.
fn walk<T: Display>(name: &str, traversal: &impl Traversal<T>) -> String {
	let mut line = format!("{name}:");
	let mut cursor = traversal.begin();
	while cursor != traversal.end() {
		if let Ok(value) = cursor.get() {
			line.push_str(&format!(" {value}"));
		}
		cursor.advance();
	}
	line
}
