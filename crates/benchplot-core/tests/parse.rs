// File: crates/benchplot-core/tests/parse.rs
// Purpose: Table parser behavior over well-formed and malformed inputs.

use benchplot_core::{BenchTable, ParseError};

const SAMPLE: &str = "\
All times are milliseconds
Filtering random std::vector<float>
TABLE:
      Window        NthElement   LowerBoundDeque
           3               233               355
           5               251               338
           9               270               368
";

#[test]
fn parses_minimal_input() {
    let table = BenchTable::parse("preamble\nTABLE\nWindow A B\n1 10 20\n3 15 25\n".lines())
        .expect("valid input");
    assert_eq!(table.x_axis, vec![1, 3]);
    assert_eq!(table.stats["A"], vec![10, 15]);
    assert_eq!(table.stats["B"], vec![20, 25]);
}

#[test]
fn parses_realistic_benchmark_output() {
    let table = BenchTable::parse(SAMPLE.lines()).expect("valid input");
    assert_eq!(table.x_axis, vec![3, 5, 9]);
    assert_eq!(
        table.series_names().collect::<Vec<_>>(),
        vec!["NthElement", "LowerBoundDeque"]
    );
    assert_eq!(table.stats["NthElement"], vec![233, 251, 270]);
    assert_eq!(table.stats["LowerBoundDeque"], vec![355, 338, 368]);
}

#[test]
fn every_series_matches_x_axis_length() {
    let table = BenchTable::parse(SAMPLE.lines()).expect("valid input");
    for (_, values) in &table.stats {
        assert_eq!(values.len(), table.x_axis.len());
    }
}

#[test]
fn parsing_is_idempotent() {
    let a = BenchTable::parse(SAMPLE.lines()).expect("first parse");
    let b = BenchTable::parse(SAMPLE.lines()).expect("second parse");
    assert_eq!(a, b);
}

#[test]
fn column_order_populates_series_in_header_order() {
    let input = "TABLE\nWindow A B C\n1 11 12 13\n2 21 22 23\n";
    let table = BenchTable::parse(input.lines()).expect("valid input");
    let keys: Vec<&str> = table.series_names().collect();
    assert_eq!(keys, vec!["A", "B", "C"]);
    // stats[keys[j]][i] equals the (j+1)-th integer token of data row i
    assert_eq!(table.stats["A"], vec![11, 21]);
    assert_eq!(table.stats["B"], vec![12, 22]);
    assert_eq!(table.stats["C"], vec![13, 23]);
}

#[test]
fn blank_trailing_lines_are_skipped() {
    let input = "TABLE\nWindow A\n1 10\n\n   \n";
    let table = BenchTable::parse(input.lines()).expect("valid input");
    assert_eq!(table.x_axis, vec![1]);
    assert_eq!(table.stats["A"], vec![10]);
}

#[test]
fn marker_may_be_embedded_in_a_longer_line() {
    // The original benchmark prints "TABLE:" with a trailing colon.
    let input = "TABLE:\nWindow A\n7 70\n";
    let table = BenchTable::parse(input.lines()).expect("valid input");
    assert_eq!(table.x_axis, vec![7]);
}

#[test]
fn missing_marker_fails() {
    let err = BenchTable::parse("no table here\n".lines()).unwrap_err();
    assert_eq!(err, ParseError::MissingTableMarker);
}

#[test]
fn wrong_first_header_token_fails() {
    let err = BenchTable::parse("TABLE\nSize A B\n1 2 3\n".lines()).unwrap_err();
    assert!(matches!(err, ParseError::MalformedHeader { line: 2, .. }));
}

#[test]
fn missing_header_line_fails() {
    let err = BenchTable::parse("TABLE\n".lines()).unwrap_err();
    assert!(matches!(err, ParseError::MalformedHeader { .. }));
}

#[test]
fn duplicate_series_name_fails() {
    let err = BenchTable::parse("TABLE\nWindow A A\n1 2 3\n".lines()).unwrap_err();
    assert!(matches!(err, ParseError::MalformedHeader { line: 2, .. }));
}

#[test]
fn short_row_fails() {
    let err = BenchTable::parse("TABLE\nWindow A B\n1 10\n".lines()).unwrap_err();
    assert!(matches!(err, ParseError::MalformedRow { line: 3, .. }));
}

#[test]
fn overlong_row_fails() {
    let err = BenchTable::parse("TABLE\nWindow A\n1 10 99\n".lines()).unwrap_err();
    assert!(matches!(err, ParseError::MalformedRow { line: 3, .. }));
}

#[test]
fn non_integer_token_fails() {
    let err = BenchTable::parse("TABLE\nWindow A\n1 ten\n".lines()).unwrap_err();
    assert!(matches!(err, ParseError::MalformedRow { line: 3, .. }));
}

#[test]
fn remove_series_leaves_the_rest_untouched() {
    let mut table = BenchTable::parse(SAMPLE.lines()).expect("valid input");
    let removed = table.remove_series("NthElement").expect("present");
    assert_eq!(removed, vec![233, 251, 270]);
    assert_eq!(table.x_axis, vec![3, 5, 9]);
    assert_eq!(table.series_names().collect::<Vec<_>>(), vec!["LowerBoundDeque"]);
    assert_eq!(table.stats["LowerBoundDeque"], vec![355, 338, 368]);
}

#[test]
fn remove_absent_series_fails() {
    let mut table = BenchTable::parse(SAMPLE.lines()).expect("valid input");
    let err = table.remove_series("NoSuchSeries").unwrap_err();
    assert_eq!(err, ParseError::MissingSeriesKey("NoSuchSeries".to_string()));
}
