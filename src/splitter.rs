use crate::scan::CommentKind;

/// The conventional statement delimiter.
pub const DEFAULT_DELIMITER: char = ';';

/// Lazy iterator over the individual statements of a multi-statement SQL text.
///
/// Statements are yielded trimmed and in input order; empty statements
/// produced by consecutive or trailing delimiters are discarded. Delimiters
/// inside quoted strings or comments never split. The scan is a permissive
/// best-effort pass, not a validating parse: an unterminated quote or comment
/// simply swallows the rest of the input into the last statement.
#[derive(Debug, Clone)]
pub struct StatementSplitter<'a> {
    rest: &'a str,
    delimiter: char,
}

impl<'a> StatementSplitter<'a> {
    /// Splits `sql` on the conventional `;` delimiter.
    #[must_use]
    pub fn new(sql: &'a str) -> Self {
        Self::with_delimiter(sql, DEFAULT_DELIMITER)
    }

    /// Splits `sql` on a caller-provided delimiter.
    ///
    /// The delimiter comparison is case-insensitive.
    #[must_use]
    pub fn with_delimiter(sql: &'a str, delimiter: char) -> Self {
        Self {
            rest: sql,
            delimiter,
        }
    }
}

impl<'a> Iterator for StatementSplitter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.rest.trim().is_empty() {
            match next_boundary(self.rest, self.delimiter) {
                Some((pos, len)) => {
                    let statement = self.rest[..pos].trim();
                    self.rest = &self.rest[pos + len..];

                    if !statement.is_empty() {
                        return Some(statement);
                    }
                }
                None => {
                    let statement = self.rest.trim();
                    self.rest = "";
                    return Some(statement);
                }
            }
        }

        None
    }
}

/// Transient scanner state, local to one [`next_boundary`] call.
#[derive(Debug, Default)]
struct ScanState {
    /// The quote character of the currently open string literal, if any.
    string_char: Option<char>,
    /// Whether the open string literal was opened by a triple-quote sequence.
    triple_quoted: bool,
    /// The currently open comment, if any.
    comment: Option<CommentKind>,
}

/// Finds the first top-level occurrence of `delimiter` in `sql`, skipping
/// quoted strings and comments.
///
/// Returns the byte position of the delimiter and its encoded length, or
/// `None` when the whole text is a single statement.
fn next_boundary(sql: &str, delimiter: char) -> Option<(usize, usize)> {
    let chars: Vec<(usize, char)> = sql.char_indices().collect();
    let mut state = ScanState::default();
    let mut index = 0;

    while index < chars.len() {
        let (pos, ch) = chars[index];
        let prev = index.checked_sub(1).map(|i| chars[i].1);
        let next = chars.get(index + 1).map(|&(_, c)| c);

        // String literal opener. A quote preceded by a backslash neither
        // opens nor closes a literal.
        if state.string_char.is_none()
            && state.comment.is_none()
            && prev != Some('\\')
            && matches!(ch, '\'' | '"' | '`')
        {
            state.string_char = Some(ch);

            if next == Some(ch) && chars.get(index + 2).map(|&(_, c)| c) == Some(ch) {
                state.triple_quoted = true;
                index += 2;
            }

            index += 1;
            continue;
        }

        // Comment opener, suppressed inside string literals.
        if state.string_char.is_none() && state.comment.is_none() {
            if let Some(kind) = CommentKind::opening(ch, next) {
                state.comment = Some(kind);
                index += 1;
                continue;
            }
        }

        // Inside a comment nothing but the terminator matters.
        if let Some(kind) = state.comment {
            if kind.closes(ch, next) {
                state.comment = None;

                if kind == CommentKind::Block {
                    index += 1;
                }
            }

            index += 1;
            continue;
        }

        // Inside a string literal, watch for the closing quote. A triple
        // quoted literal only closes on a matching triple sequence.
        if let Some(quote) = state.string_char {
            if prev != Some('\\') && ch == quote {
                if state.triple_quoted {
                    if next == Some(quote) && chars.get(index + 2).map(|&(_, c)| c) == Some(quote) {
                        state.triple_quoted = false;
                        state.string_char = None;
                        index += 3;
                        continue;
                    }
                } else {
                    state.string_char = None;
                }
            }

            index += 1;
            continue;
        }

        if ch.to_lowercase().eq(delimiter.to_lowercase()) {
            return Some((pos, ch.len_utf8()));
        }

        index += 1;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(sql: &str) -> Vec<&str> {
        StatementSplitter::new(sql).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(split("").is_empty());
        assert!(split("   \n\t  ").is_empty());
    }

    #[test]
    fn test_single_statement_without_delimiter() {
        assert_eq!(split("SELECT 1"), ["SELECT 1"]);
        assert_eq!(split("  SELECT 1  \n"), ["SELECT 1"]);
    }

    #[test]
    fn test_multiple_statements() {
        assert_eq!(split("SELECT 1; SELECT 2"), ["SELECT 1", "SELECT 2"]);
        assert_eq!(split("A;B;C"), ["A", "B", "C"]);
    }

    #[test]
    fn test_trailing_and_consecutive_delimiters_discarded() {
        assert_eq!(split("SELECT 1;"), ["SELECT 1"]);
        assert_eq!(split("SELECT 1;;;SELECT 2;"), ["SELECT 1", "SELECT 2"]);
        assert!(split(";;;").is_empty());
    }

    #[test]
    fn test_delimiter_inside_single_quotes() {
        assert_eq!(split("SELECT ';' FROM t;"), ["SELECT ';' FROM t"]);
    }

    #[test]
    fn test_delimiter_inside_double_quotes_and_backticks() {
        assert_eq!(
            split("SELECT \"a;b\" FROM t; SELECT 2"),
            ["SELECT \"a;b\" FROM t", "SELECT 2"]
        );
        assert_eq!(
            split("SELECT `a;b` FROM t; SELECT 2"),
            ["SELECT `a;b` FROM t", "SELECT 2"]
        );
    }

    #[test]
    fn test_escaped_quote_does_not_close_string() {
        // The \' stays inside the literal, so the first ; is still quoted.
        assert_eq!(split(r"SELECT 'a\';b' FROM t; SELECT 2").len(), 2);
        assert_eq!(
            split(r"SELECT 'a\';b' FROM t; SELECT 2"),
            [r"SELECT 'a\';b' FROM t", "SELECT 2"]
        );
    }

    #[test]
    fn test_escaped_quote_does_not_open_string() {
        assert_eq!(split(r"SELECT a \' b; SELECT 2"), [r"SELECT a \' b", "SELECT 2"]);
    }

    #[test]
    fn test_triple_quoted_string() {
        assert_eq!(
            split("SELECT '''a;b''' FROM t; SELECT 2"),
            ["SELECT '''a;b''' FROM t", "SELECT 2"]
        );
    }

    #[test]
    fn test_single_quote_inside_triple_quoted_string() {
        // A lone quote inside a triple-quoted literal does not close it.
        assert_eq!(
            split("SELECT '''a'b;c''' FROM t; SELECT 2"),
            ["SELECT '''a'b;c''' FROM t", "SELECT 2"]
        );
    }

    #[test]
    fn test_two_quotes_do_not_enter_triple_mode() {
        // '' is an empty literal followed by a regular one, not a triple quote.
        assert_eq!(split("SELECT ''; SELECT 2"), ["SELECT ''", "SELECT 2"]);
    }

    #[test]
    fn test_delimiter_inside_line_comment() {
        assert_eq!(
            split("SELECT 1 -- one; two\n; SELECT 2"),
            ["SELECT 1 -- one; two", "SELECT 2"]
        );
        assert_eq!(
            split("SELECT 1 # one; two\n; SELECT 2"),
            ["SELECT 1 # one; two", "SELECT 2"]
        );
    }

    #[test]
    fn test_hash_without_space_is_not_a_comment() {
        assert_eq!(split("SELECT #tag; SELECT 2"), ["SELECT #tag", "SELECT 2"]);
    }

    #[test]
    fn test_delimiter_inside_block_comment() {
        assert_eq!(
            split("SELECT 1 /* one; two */; SELECT 2"),
            ["SELECT 1 /* one; two */", "SELECT 2"]
        );
    }

    #[test]
    fn test_block_comment_spanning_statements() {
        let sql = "SELECT 1 /* hidden;\nboundary; */ + 2; SELECT 3";
        assert_eq!(split(sql), ["SELECT 1 /* hidden;\nboundary; */ + 2", "SELECT 3"]);
    }

    #[test]
    fn test_unterminated_quote_swallows_remainder() {
        assert_eq!(split("SELECT 'a; SELECT 2"), ["SELECT 'a; SELECT 2"]);
    }

    #[test]
    fn test_unterminated_block_comment_swallows_remainder() {
        assert_eq!(split("SELECT 1 /* a; b"), ["SELECT 1 /* a; b"]);
    }

    #[test]
    fn test_comment_only_statement_is_kept() {
        // The boundary after the comment still produces a non-empty chunk.
        assert_eq!(split("-- lead\n; SELECT 1"), ["-- lead", "SELECT 1"]);
    }

    #[test]
    fn test_custom_delimiter_is_case_insensitive() {
        assert_eq!(
            StatementSplitter::with_delimiter("SELECT 1 g SELECT 2 G SELECT 3", 'g')
                .collect::<Vec<_>>(),
            ["SELECT 1", "SELECT 2", "SELECT 3"]
        );
    }

    #[test]
    fn test_splitter_is_lazy() {
        let mut splitter = StatementSplitter::new("SELECT 1; SELECT 2; SELECT 3");
        assert_eq!(splitter.next(), Some("SELECT 1"));
        assert_eq!(splitter.next(), Some("SELECT 2"));
        assert_eq!(splitter.next(), Some("SELECT 3"));
        assert_eq!(splitter.next(), None);
        assert_eq!(splitter.next(), None);
    }

    #[test]
    fn test_multibyte_content() {
        assert_eq!(
            split("SELECT 'héllo; wörld'; SELECT 'ok'"),
            ["SELECT 'héllo; wörld'", "SELECT 'ok'"]
        );
    }
}
