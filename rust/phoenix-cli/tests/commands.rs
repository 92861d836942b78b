use phoenix_check::RunOptions;
use phoenix_cli::check_cmd::{build_suite, run_checks};
use phoenix_cli::sort_cmd::{sort_values, Order};
use phoenix_cli::CliError;
use phoenix_core::{PhoenixConfig, SortAlgorithm};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn every_algorithm_agrees() {
    let values = strings(&["7", "-3", "12", "0", "7"]);
    for algorithm in SortAlgorithm::ALL {
        let sorted = sort_values(
            &values,
            Some(algorithm),
            Order::Ascending,
            &PhoenixConfig::default(),
        )
        .unwrap();
        assert_eq!(sorted.to_string(), "{-3, 0, 7, 7, 12}", "{}", algorithm);
    }
}

#[test]
fn parse_errors_name_the_value() {
    let err = sort_values(
        &strings(&["3", "4.5"]),
        None,
        Order::Descending,
        &PhoenixConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, CliError::InvalidValue { .. }));
    assert!(err.to_string().starts_with("'4.5' is not an integer"));
}

#[test]
fn unmatched_filter_runs_nothing() {
    let options = RunOptions {
        filter: Some("no-such-check".to_string()),
        color: false,
    };
    let mut sink = Vec::new();
    let summary = run_checks(&mut sink, &options).unwrap();
    assert_eq!(summary.total, 0);
    assert!(summary.is_success());
    assert!(String::from_utf8(sink).unwrap().contains("Running 0 checks (phoenix)"));
}

#[test]
fn suites_register_under_module_prefixes() {
    let suite = build_suite();
    assert_eq!(suite.name(), "phoenix");
    assert_eq!(suite.len(), 16);
}
