// File: crates/benchplot-core/src/table.rs
// Summary: Parser turning raw benchmark stdout into an ordered series table.

use indexmap::IndexMap;

use crate::error::ParseError;

/// Substring that delimits the preamble from the table region.
pub const TABLE_MARKER: &str = "TABLE";

/// Required first column name of the header row.
pub const X_AXIS_LABEL: &str = "Window";

/// Parsed benchmark table: one swept parameter column plus one measurement
/// column per algorithm.
///
/// Invariant: every series in `stats` has exactly `x_axis.len()` entries, and
/// `stats` iterates in header column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchTable {
    pub x_axis: Vec<i64>,
    pub stats: IndexMap<String, Vec<i64>>,
}

impl BenchTable {
    /// Parse benchmark stdout lines.
    ///
    /// Scans for the first line containing [`TABLE_MARKER`], reads the next
    /// line as a whitespace-delimited header (`Window` + series names), and
    /// every following non-blank line as a row of integers with exactly one
    /// token per header column. Any malformed line aborts the parse.
    pub fn parse<I, S>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = lines.into_iter().enumerate();

        let marker_line = loop {
            match lines.next() {
                Some((idx, line)) if line.as_ref().contains(TABLE_MARKER) => break idx + 1,
                Some(_) => continue,
                None => return Err(ParseError::MissingTableMarker),
            }
        };

        let (header_idx, header) = lines.next().ok_or_else(|| ParseError::MalformedHeader {
            line: marker_line + 1,
            reason: "missing header line after table marker".to_string(),
        })?;
        let header_line = header_idx + 1;

        let mut tokens = header.as_ref().split_whitespace();
        match tokens.next() {
            Some(X_AXIS_LABEL) => {}
            Some(other) => {
                return Err(ParseError::MalformedHeader {
                    line: header_line,
                    reason: format!("first column is `{other}`, expected `{X_AXIS_LABEL}`"),
                })
            }
            None => {
                return Err(ParseError::MalformedHeader {
                    line: header_line,
                    reason: "header line is empty".to_string(),
                })
            }
        }
        let keys: Vec<String> = tokens.map(str::to_owned).collect();

        // A duplicate name would silently fold two columns into one series
        // and break row alignment, so it is rejected up front.
        for (i, key) in keys.iter().enumerate() {
            if keys[..i].contains(key) {
                return Err(ParseError::MalformedHeader {
                    line: header_line,
                    reason: format!("duplicate series name `{key}`"),
                });
            }
        }

        let mut x_axis = Vec::new();
        let mut stats: IndexMap<String, Vec<i64>> = IndexMap::with_capacity(keys.len());

        for (idx, line) in lines {
            let lineno = idx + 1;
            let tokens: Vec<&str> = line.as_ref().split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }
            if tokens.len() != keys.len() + 1 {
                return Err(ParseError::MalformedRow {
                    line: lineno,
                    reason: format!(
                        "expected {} columns, found {}",
                        keys.len() + 1,
                        tokens.len()
                    ),
                });
            }
            x_axis.push(parse_int(tokens[0], lineno)?);
            for (j, key) in keys.iter().enumerate() {
                let value = parse_int(tokens[j + 1], lineno)?;
                stats.entry(key.clone()).or_default().push(value);
            }
        }

        Ok(Self { x_axis, stats })
    }

    /// Number of data rows.
    pub fn rows(&self) -> usize {
        self.x_axis.len()
    }

    /// Series names in header column order.
    pub fn series_names(&self) -> impl Iterator<Item = &str> {
        self.stats.keys().map(String::as_str)
    }

    /// Remove one named series, preserving the order of the rest.
    ///
    /// The x axis and every other series are left untouched. Removing an
    /// absent key is an error, not a no-op.
    pub fn remove_series(&mut self, name: &str) -> Result<Vec<i64>, ParseError> {
        self.stats
            .shift_remove(name)
            .ok_or_else(|| ParseError::MissingSeriesKey(name.to_string()))
    }
}

fn parse_int(token: &str, line: usize) -> Result<i64, ParseError> {
    token.parse().map_err(|_| ParseError::MalformedRow {
        line,
        reason: format!("`{token}` is not an integer"),
    })
}
