use std::io::{self, Write};

use serde::{Serialize, Serializer};

use crate::analytics::StatusCounters;

/// Only the literal `500` code passes this prefix, since codes are three digits.
pub const ERROR_CODE_PREFIX: &str = "500";

const RULE_WIDTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub label: String,
    pub count: usize,
    #[serde(serialize_with = "one_decimal")]
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub total: usize,
    pub classes: Vec<ReportRow>,
    pub error_codes: Vec<ReportRow>,
}

impl Report {
    pub fn new(counters: &StatusCounters) -> Self {
        let total = counters.total();
        let row = |label: String, count: usize| ReportRow {
            label,
            count,
            percent: percentage(count, total),
        };
        Self {
            total,
            classes: counters
                .classes()
                .iter()
                .map(|(class, count)| row(class.to_string(), *count))
                .collect(),
            error_codes: counters
                .codes_with_prefix(ERROR_CODE_PREFIX)
                .map(|(code, count)| row(code.to_string(), count))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "No HTTP traffic found in the specified time period.");
        }

        writeln!(out, "\nStatus Code Groups:")?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        for row in &self.classes {
            write_row(out, row)?;
        }

        if !self.error_codes.is_empty() {
            writeln!(out, "\nDetailed Error Codes:")?;
            writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
            for row in &self.error_codes {
                write_row(out, row)?;
            }
        }

        writeln!(out, "\nTotal Requests: {}", self.total)
    }
}

fn write_row<W: Write>(out: &mut W, row: &ReportRow) -> io::Result<()> {
    writeln!(out, "{}: {} ({:.1}%)", row.label, row.count, row.percent)
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

// Same digits as the text report's `{:.1}`.
fn one_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let rounded = format!("{value:.1}").parse().unwrap_or(*value);
    serializer.serialize_f64(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;

    fn counters_of(codes: &[&str]) -> StatusCounters {
        let mut counters = StatusCounters::default();
        for c in codes {
            counters.record(c.parse().unwrap());
        }
        counters
    }

    fn render(report: &Report) -> String {
        let mut out = Vec::new();
        report.write_text(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_report_layout() {
        let report = Report::new(&counters_of(&["200", "200", "500", "404", "503", "301"]));

        let expected = "\nStatus Code Groups:\n\
            ------------------------------\n\
            2xx: 2 (33.3%)\n\
            3xx: 1 (16.7%)\n\
            4xx: 1 (16.7%)\n\
            5xx: 2 (33.3%)\n\
            \nDetailed Error Codes:\n\
            ------------------------------\n\
            500: 1 (16.7%)\n\
            \nTotal Requests: 6\n";
        assert_that!(render(&report)).is_equal_to(expected.to_string());
    }

    #[test]
    fn error_section_omitted_without_500() {
        let report = Report::new(&counters_of(&["200", "503"]));
        let text = render(&report);
        assert_that!(text.contains("Detailed Error Codes")).is_false();
        assert_that!(text.contains("5xx: 1 (50.0%)")).is_true();
    }

    #[test]
    fn empty_report_has_no_percentages() {
        let report = Report::new(&StatusCounters::default());
        assert_that!(report.is_empty()).is_true();
        assert_that!(render(&report)).is_equal_to(
            "No HTTP traffic found in the specified time period.\n".to_string(),
        );
    }

    #[test]
    fn large_counts_print_as_plain_integers() {
        let codes = vec!["200"; 1500];
        let report = Report::new(&counters_of(&codes));
        let text = render(&report);
        assert_that!(text.contains("2xx: 1500 (100.0%)")).is_true();
        assert_that!(text.contains("Total Requests: 1500")).is_true();
    }

    #[test]
    fn json_rounds_percentages() {
        let report = Report::new(&counters_of(&["200", "500", "500"]));
        let json = serde_json::to_value(&report).unwrap();

        assert_that!(json["total"].as_u64()).is_equal_to(Some(3));
        assert_that!(json["classes"][0]["label"].as_str()).is_equal_to(Some("2xx"));
        assert_that!(json["classes"][0]["percent"].as_f64()).is_equal_to(Some(33.3));
        assert_that!(json["error_codes"][0]["count"].as_u64()).is_equal_to(Some(2));
        assert_that!(json["error_codes"][0]["percent"].as_f64()).is_equal_to(Some(66.7));
    }

    #[test]
    fn json_and_text_round_the_same_way() {
        let mut codes = vec!["200"; 49];
        codes.extend(vec!["404"; 351]);
        let report = Report::new(&counters_of(&codes));

        let text = render(&report);
        let json = serde_json::to_value(&report).unwrap();

        assert_that!(text.contains("2xx: 49 (12.2%)")).is_true();
        assert_that!(json["classes"][0]["percent"].as_f64()).is_equal_to(Some(12.2));
    }
}
