//! Classifier command handlers.

use hop_search::{
    corpus::{Expected, Miss},
    evaluate, AnalysisResult, EvaluationReport, SmartSearchAnalyzer, UserLocation,
};

pub(crate) fn run_analyze(
    analyzer: &SmartSearchAnalyzer,
    query: &str,
    country: Option<String>,
    private: bool,
) -> anyhow::Result<()> {
    let user_location = country.map(|country| UserLocation {
        country,
        is_private: private,
    });
    let result = analyzer.analyze(query, user_location.as_ref())?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

pub(crate) fn run_countries(analyzer: &SmartSearchAnalyzer) {
    let countries = analyzer.all_countries();
    for place in &countries {
        println!("{}  {:<22} {}", place.iso_code, place.name, place.continent);
    }
    println!("{} destinations", countries.len());
}

pub(crate) fn run_eval(analyzer: &SmartSearchAnalyzer, show_misses: bool) {
    let report = evaluate(analyzer);
    println!("{}", format_summary(&report, &analyzer.policy().to_string()));
    for query in &report.rejected {
        println!("! rejected {query:?}");
    }
    if show_misses {
        for miss in &report.misses {
            println!("{}", format_miss(miss));
        }
    }
}

fn format_summary(report: &EvaluationReport, policy: &str) -> String {
    format!(
        "policy={policy} total={} intent={} ({:.1}%) exact={} ({:.1}%)",
        report.total,
        report.intent_matches,
        report.intent_accuracy() * 100.0,
        report.exact_matches,
        report.exact_accuracy() * 100.0,
    )
}

fn format_miss(miss: &Miss) -> String {
    let marker = if miss.intent_matched() { "~" } else { "x" };
    format!(
        "{marker} {:?}\n    expected {}\n    got      {}",
        miss.query,
        describe_expected(&miss.expected),
        describe_actual(&miss.actual),
    )
}

fn describe_expected(expected: &Expected) -> String {
    match expected {
        Expected::Trip { from, to } => {
            format!("trip {} -> {}", from.unwrap_or("?"), to.unwrap_or("?"))
        }
        Expected::Hotel {
            location,
            hotel_name,
        } => format!("hotel {location} ({})", hotel_name.unwrap_or("-")),
    }
}

fn describe_actual(actual: &AnalysisResult) -> String {
    match actual {
        AnalysisResult::Trip(trip) => format!(
            "trip {} -> {}",
            trip.from.as_deref().unwrap_or("?"),
            trip.to.as_deref().unwrap_or("?")
        ),
        AnalysisResult::Hotel(hotel) => format!(
            "hotel {} ({})",
            hotel.location,
            hotel.hotel_name.as_deref().unwrap_or("-")
        ),
    }
}

#[cfg(test)]
mod tests {
    use hop_search::corpus::{evaluate_queries, LabelledQuery};

    use super::*;

    #[test]
    fn summary_includes_counts_and_percentages() {
        let report = EvaluationReport {
            total: 4,
            intent_matches: 3,
            exact_matches: 2,
            misses: Vec::new(),
            rejected: Vec::new(),
        };
        assert_eq!(
            format_summary(&report, "substring"),
            "policy=substring total=4 intent=3 (75.0%) exact=2 (50.0%)"
        );
    }

    #[test]
    fn miss_lines_show_expected_and_actual() {
        let labelled = [LabelledQuery {
            query: "where to sleep in Barcelona",
            expected: Expected::Hotel {
                location: "Spain",
                hotel_name: None,
            },
        }];
        let report = evaluate_queries(&SmartSearchAnalyzer::builtin(), &labelled);
        let line = format_miss(&report.misses[0]);
        assert!(line.starts_with("x \"where to sleep in Barcelona\""), "{line}");
        assert!(line.contains("expected hotel Spain (-)"), "{line}");
        assert!(line.contains("got      trip"), "{line}");
    }
}
