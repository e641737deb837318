/*!
# CSV Reader

Line-oriented CSV parser. Fields are split on unquoted commas; `"` toggles
quoted mode and `""` inside quotes is a literal quote.

Quoted fields cannot span physical lines: the in-quotes flag is reset at
every line start, so a newline inside quotes ends the row.
*/

use crate::core::{read_text_file, Result};
use std::path::Path;
use tracing::debug;

/// One parsed line, one string per field
pub type Row = Vec<String>;

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// CSV reader over a whole in-memory text
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvReader;

impl CsvReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads and parses a file. The BOM, if any, is dropped first.
    pub fn read_file(&self, path: &Path) -> Result<Vec<Row>> {
        let content = read_text_file(path)?;
        let rows = self.parse_str(&content);
        debug!(path = %path.display(), rows = rows.len(), "CSV parsed");
        Ok(rows)
    }

    /// Parses every line of `input` into a row.
    ///
    /// `\n` and `\r\n` both end a line; a trailing terminator does not
    /// produce an extra row.
    pub fn parse_str(&self, input: &str) -> Vec<Row> {
        input.lines().map(|line| self.parse_line(line)).collect()
    }

    /// Parses a single line. The last cell is always emitted, even if empty.
    pub fn parse_line(&self, line: &str) -> Row {
        let mut row = Vec::new();
        let mut cell = String::new();
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                QUOTE if in_quotes && chars.peek() == Some(&QUOTE) => {
                    cell.push(QUOTE);
                    chars.next();
                }
                QUOTE => in_quotes = !in_quotes,
                DELIMITER if !in_quotes => row.push(std::mem::take(&mut cell)),
                _ => cell.push(c),
            }
        }
        row.push(cell);

        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(line: &str) -> Row {
        CsvReader::new().parse_line(line)
    }

    #[test]
    fn test_plain_fields() {
        assert_eq!(parse("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_quoted_comma_is_one_cell() {
        assert_eq!(
            parse(r#"1,"hello, world",x"#),
            vec!["1", "hello, world", "x"]
        );
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(parse(r#""say ""hi""""#), vec![r#"say "hi""#]);
    }

    #[test]
    fn test_trailing_empty_cell_is_kept() {
        assert_eq!(parse("a,b,"), vec!["a", "b", ""]);
        assert_eq!(parse(""), vec![""]);
    }

    #[test]
    fn test_quote_in_the_middle_toggles() {
        // Quotes are not required to wrap the whole cell
        assert_eq!(parse(r#"ab"c,d"e,f"#), vec!["abc,de", "f"]);
    }

    #[test]
    fn test_unterminated_quote_ends_with_line() {
        let rows = CsvReader::new().parse_str("\"open,still\nnext,row");
        assert_eq!(rows, vec![vec!["open,still"], vec!["next", "row"]]);
    }

    #[test]
    fn test_crlf_lines() {
        let rows = CsvReader::new().parse_str("name,age\r\nTaro,20\r\n");
        assert_eq!(rows, vec![vec!["name", "age"], vec!["Taro", "20"]]);
    }

    #[test]
    fn test_read_file_strips_bom() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBFname,city\nTaro,Tokyo\n").unwrap();

        let rows = CsvReader::new().read_file(file.path()).unwrap();
        assert_eq!(rows[0][0], "name");
        assert_eq!(rows.len(), 2);
    }
}
