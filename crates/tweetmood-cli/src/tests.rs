use super::*;

#[test]
fn parses_explicit_query_and_count() {
    let cli = Cli::try_parse_from(["tweetmood", "--query", "office", "--count", "25"])
        .expect("expected valid cli args");

    assert_eq!(cli.query, "office");
    assert_eq!(cli.count, 25);
}

#[test]
fn query_may_contain_spaces() {
    let cli = Cli::try_parse_from(["tweetmood", "--query", "remote work", "--count", "1"])
        .expect("expected valid cli args");

    assert_eq!(cli.query, "remote work");
    assert_eq!(cli.count, 1);
}

#[test]
fn rejects_zero_count() {
    let result = Cli::try_parse_from(["tweetmood", "--count", "0"]);
    assert!(result.is_err(), "count of zero should be rejected");
}

#[test]
fn rejects_non_numeric_count() {
    let result = Cli::try_parse_from(["tweetmood", "--count", "lots"]);
    assert!(result.is_err());
}

#[test]
fn rejects_unknown_flag() {
    let result = Cli::try_parse_from(["tweetmood", "--since", "yesterday"]);
    assert!(result.is_err());
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
