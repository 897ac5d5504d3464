use std::fmt::{Display, Formatter};

use crate::scan::CommentKind;

/// Enum representing the statement categories a Spanner client dispatches on.
///
/// Queries run on the read path, DML inside a read-write transaction and DDL
/// through a schema update operation, so the category must be decided before
/// the statement is sent anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatementType {
    /// A statement that fits no supported category. Callers are expected to
    /// reject these.
    #[default]
    Unspecified,
    /// A read-only statement (`SELECT`, `WITH`).
    Query,
    /// A data manipulation statement (`INSERT`, `UPDATE`, `DELETE`).
    Dml,
    /// A schema definition statement (`CREATE`, `ALTER`, `DROP`).
    Ddl,
}

impl StatementType {
    const QUERY_KEYWORDS: [&'static str; 2] = ["SELECT", "WITH"];
    const DML_KEYWORDS: [&'static str; 3] = ["INSERT", "UPDATE", "DELETE"];
    const DDL_KEYWORDS: [&'static str; 3] = ["CREATE", "ALTER", "DROP"];

    /// Classifies a single statement by its first keyword, skipping any
    /// leading comments.
    ///
    /// The keyword comparison is case-insensitive and intentionally a prefix
    /// match, not an exact token match.
    #[must_use]
    pub fn of(statement: &str) -> Self {
        let keyword = first_keyword_outside_comments(statement).to_ascii_uppercase();

        if Self::QUERY_KEYWORDS.iter().any(|k| keyword.starts_with(k)) {
            return Self::Query;
        }

        if Self::DML_KEYWORDS.iter().any(|k| keyword.starts_with(k)) {
            return Self::Dml;
        }

        if Self::DDL_KEYWORDS.iter().any(|k| keyword.starts_with(k)) {
            return Self::Ddl;
        }

        Self::Unspecified
    }
}

impl AsRef<str> for StatementType {
    fn as_ref(&self) -> &str {
        match self {
            StatementType::Unspecified => "unspecified",
            StatementType::Query => "query",
            StatementType::Dml => "dml",
            StatementType::Ddl => "ddl",
        }
    }
}

impl Display for StatementType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// Accumulates the first whitespace-terminated word of `statement`, skipping
/// comments along the way.
fn first_keyword_outside_comments(statement: &str) -> String {
    let chars: Vec<char> = statement.chars().collect();
    let mut comment: Option<CommentKind> = None;
    let mut keyword = String::new();
    let mut index = 0;

    while index < chars.len() {
        let ch = chars[index];
        let next = chars.get(index + 1).copied();

        if comment.is_none() {
            if let Some(kind) = CommentKind::opening(ch, next) {
                comment = Some(kind);
                index += 1;
                continue;
            }
        }

        if let Some(kind) = comment {
            if kind.closes(ch, next) {
                if kind == CommentKind::Block {
                    index += 1;
                }

                comment = None;
            }

            index += 1;
            continue;
        }

        if ch.is_whitespace() {
            if keyword.is_empty() {
                index += 1;
                continue;
            }

            return keyword;
        }

        keyword.push(ch);
        index += 1;
    }

    keyword
}
