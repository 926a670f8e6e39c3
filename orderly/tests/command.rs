use predicates::str;
use rstest::rstest;
use test_utilities::*;

#[test]
fn command() {
	orderly_cmd()
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} [OPTIONS] <COMMAND>")));
}

#[rstest]
#[case("traverse", "[OPTIONS] <VALUES>...")]
fn subcommand(#[case] sub_command: &str, #[case] usage: &str) {
	orderly_cmd()
		.args(sub_command.split(' '))
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} {sub_command} {usage}")));
}

#[test]
fn version() {
	orderly_cmd()
		.arg("--version")
		.assert()
		.success()
		.stdout(str::starts_with("orderly "));
}

#[test]
fn unknown_order_is_rejected() {
	orderly_cmd()
		.args(["traverse", "--order", "zigzag", "1"])
		.assert()
		.failure()
		.code(2)
		.stderr(str::contains("invalid value 'zigzag'"));
}
