use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["hop"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_analyze_with_defaults() {
    let cli = Cli::try_parse_from(["hop", "analyze", "hotel in paris"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Analyze {
            ref query,
            country: None,
            private: false,
            policy: None,
        }) if query == "hotel in paris"
    ));
}

#[test]
fn parses_analyze_with_user_location() {
    let cli = Cli::try_parse_from([
        "hop",
        "analyze",
        "visit japan",
        "--country",
        "Canada",
        "--private",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Analyze {
            country: Some(ref c),
            private: true,
            ..
        }) if c == "Canada"
    ));
}

#[test]
fn parses_policy_override() {
    let cli = Cli::try_parse_from(["hop", "analyze", "from toronto", "--policy", "word"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Analyze {
            policy: Some(MatchPolicy::WordBoundary),
            ..
        })
    ));
}

#[test]
fn rejects_unknown_policy() {
    let result = Cli::try_parse_from(["hop", "analyze", "paris", "--policy", "fuzzy"]);
    assert!(result.is_err());
}

#[test]
fn analyze_requires_a_query() {
    assert!(Cli::try_parse_from(["hop", "analyze"]).is_err());
}

#[test]
fn parses_countries() {
    let cli = Cli::try_parse_from(["hop", "countries"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Countries)));
}

#[test]
fn parses_eval_with_misses() {
    let cli = Cli::try_parse_from(["hop", "eval", "--misses"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Eval {
            misses: true,
            policy: None
        })
    ));
}

#[test]
fn parses_locate() {
    let cli = Cli::try_parse_from(["hop", "locate", "8.8.8.8"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Locate { ref ip }) if ip == "8.8.8.8"
    ));
}

#[test]
fn with_policy_keeps_configured_policy_when_unset() {
    let analyzer = with_policy(SmartSearchAnalyzer::builtin(), None);
    assert_eq!(analyzer.policy(), MatchPolicy::Substring);
    let analyzer = with_policy(analyzer, Some(MatchPolicy::WordBoundary));
    assert_eq!(analyzer.policy(), MatchPolicy::WordBoundary);
}
