//! Minimal CSV reading/writing for the flat cache tables.
//!
//! Quote-aware and CRLF tolerant. Player names are the only fields that can
//! carry commas or quotes, but the codec handles the general case.

use std::io::{self, Write};
use std::mem::take;

/// Parse delimited text into rows of fields. Blank lines are dropped.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush a trailing row without a final newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Serialize a header plus data rows into one CSV document.
pub fn table_to_string(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut buf: Vec<u8> = Vec::new();

    let _ = write_row(&mut buf, header);
    for row in rows {
        let _ = write_row(&mut buf, row);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_rows() {
        let rows = parse_rows("a,b,c\n1,2,3\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["a", "b", "c"]);
        assert_eq!(rows[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn test_parse_quoted_fields() {
        let rows = parse_rows("\"Smith, John\",\"said \"\"hi\"\"\"\n");
        assert_eq!(rows, vec![vec!["Smith, John", "said \"hi\""]]);
    }

    #[test]
    fn test_parse_tolerates_crlf_and_blank_lines() {
        let rows = parse_rows("a,b\r\n\r\nc,d");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_write_row_escapes() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["plain", "with,comma", "with\"quote"]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "plain,\"with,comma\",\"with\"\"quote\"\n"
        );
    }

    #[test]
    fn test_table_round_trip() {
        let rows = vec![
            vec!["2015-16".to_string(), "league".to_string(), "7".to_string()],
            vec!["2016-17".to_string(), "DeMar, DeRozan".to_string(), "9".to_string()],
        ];
        let text = table_to_string(&["SEASON", "ENTITY", "N"], &rows);

        let parsed = parse_rows(&text);
        assert_eq!(parsed[0], vec!["SEASON", "ENTITY", "N"]);
        assert_eq!(parsed[1..], rows[..]);
    }
}
