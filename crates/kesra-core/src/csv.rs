//! Minimal headered CSV reader.
//!
//! The dataset is a small flat file, so this is a plain RFC 4180-ish parser:
//! comma separated, double-quote escaping, CRLF tolerant. Every record must
//! have the same arity as the header.

use thiserror::Error;

/// Errors produced while parsing CSV text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CsvError {
    /// A quoted field was never closed.
    #[error("line {line}: unterminated quoted field")]
    UnterminatedQuote {
        /// 1-based line where the field started.
        line: usize,
    },
    /// A record's field count differs from the header's.
    #[error("line {line}: expected {expected} fields, found {found}")]
    RaggedRecord {
        /// 1-based line of the offending record.
        line: usize,
        /// Field count of the header.
        expected: usize,
        /// Field count actually seen.
        found: usize,
    },
    /// The input had no header line.
    #[error("input is empty")]
    Empty,
}

/// A parsed CSV table: one header record plus zero or more data records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column names from the first record.
    pub headers: Vec<String>,
    /// Data records, each with `headers.len()` fields.
    pub records: Vec<Vec<String>>,
}

impl Table {
    /// Index of a column by exact name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Parse CSV text into a [`Table`].
///
/// # Errors
///
/// Returns [`CsvError`] on an empty input, an unterminated quote, or a
/// record whose arity differs from the header.
pub fn parse(input: &str) -> Result<Table, CsvError> {
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quote_line = 0;
    let mut line = 1;
    // True whenever at least one character belongs to the current record.
    let mut pending = false;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => {
                in_quotes = true;
                quote_line = line;
                pending = true;
            }
            ',' => {
                record.push(std::mem::take(&mut field));
                pending = true;
            }
            '\r' => {
                // Swallow the CR of a CRLF pair; a lone CR ends the record.
                if chars.peek() != Some(&'\n') {
                    flush_record(&mut records, &mut record, &mut field, &mut pending, line)?;
                    line += 1;
                }
            }
            '\n' => {
                flush_record(&mut records, &mut record, &mut field, &mut pending, line)?;
                line += 1;
            }
            _ => {
                field.push(c);
                pending = true;
            }
        }
    }
    if in_quotes {
        return Err(CsvError::UnterminatedQuote { line: quote_line });
    }
    flush_record(&mut records, &mut record, &mut field, &mut pending, line)?;

    let mut iter = records.into_iter();
    let headers = iter.next().ok_or(CsvError::Empty)?;
    Ok(Table {
        headers,
        records: iter.collect(),
    })
}

fn flush_record(
    records: &mut Vec<Vec<String>>,
    record: &mut Vec<String>,
    field: &mut String,
    pending: &mut bool,
    line: usize,
) -> Result<(), CsvError> {
    if !*pending && record.is_empty() {
        return Ok(()); // blank line
    }
    record.push(std::mem::take(field));
    let finished = std::mem::take(record);
    *pending = false;
    if let Some(first) = records.first() {
        if finished.len() != first.len() {
            return Err(CsvError::RaggedRecord {
                line,
                expected: first.len(),
                found: finished.len(),
            });
        }
    }
    records.push(finished);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let table = parse("a,b\n1,2\n3,4\n").unwrap();
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.records, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn test_parse_no_trailing_newline() {
        let table = parse("a,b\n1,2").unwrap();
        assert_eq!(table.records.len(), 1);
    }

    #[test]
    fn test_parse_crlf() {
        let table = parse("a,b\r\n1,2\r\n").unwrap();
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.records, vec![vec!["1", "2"]]);
    }

    #[test]
    fn test_parse_quoted_field() {
        let table = parse("name,value\n\"Kota, Besar\",1\n").unwrap();
        assert_eq!(table.records[0][0], "Kota, Besar");
    }

    #[test]
    fn test_parse_escaped_quote() {
        let table = parse("a\n\"say \"\"hi\"\"\"\n").unwrap();
        assert_eq!(table.records[0][0], "say \"hi\"");
    }

    #[test]
    fn test_parse_quoted_newline() {
        let table = parse("a,b\n\"two\nlines\",x\n").unwrap();
        assert_eq!(table.records[0][0], "two\nlines");
        assert_eq!(table.records[0][1], "x");
    }

    #[test]
    fn test_parse_blank_lines_skipped() {
        let table = parse("a,b\n\n1,2\n\n").unwrap();
        assert_eq!(table.records.len(), 1);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse(""), Err(CsvError::Empty));
    }

    #[test]
    fn test_parse_ragged_record() {
        let err = parse("a,b\n1,2,3\n").unwrap_err();
        assert_eq!(
            err,
            CsvError::RaggedRecord {
                line: 2,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_parse_unterminated_quote() {
        let err = parse("a\n\"open\n").unwrap_err();
        assert!(matches!(err, CsvError::UnterminatedQuote { line: 2 }));
    }

    #[test]
    fn test_parse_empty_fields() {
        let table = parse("a,b,c\n,,\n").unwrap();
        assert_eq!(table.records[0], vec!["", "", ""]);
    }

    #[test]
    fn test_column_lookup() {
        let table = parse("x,y\n1,2\n").unwrap();
        assert_eq!(table.column("y"), Some(1));
        assert_eq!(table.column("z"), None);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_parse_never_panics(input in ".{0,200}") {
                let _ = parse(&input);
            }

            #[test]
            fn prop_rectangular_output(rows in 1usize..6, cols in 1usize..5) {
                let mut text = String::new();
                for r in 0..rows {
                    let cells: Vec<String> =
                        (0..cols).map(|c| format!("r{r}c{c}")).collect();
                    text.push_str(&cells.join(","));
                    text.push('\n');
                }
                let table = parse(&text).unwrap();
                prop_assert_eq!(table.headers.len(), cols);
                for record in &table.records {
                    prop_assert_eq!(record.len(), cols);
                }
            }
        }
    }
}
