//! Low-level scanning primitives shared by the statement splitter and the
//! statement classifier.

/// Comment flavors recognized while scanning SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommentKind {
    /// `# ` up to the end of the line. The trailing space is required to
    /// distinguish the comment marker from other uses of `#`.
    Hash,
    /// `--` up to the end of the line.
    Dash,
    /// `/* ... */`, possibly spanning multiple lines and statements.
    Block,
}

impl CommentKind {
    /// Returns the comment opened by `ch` when followed by `next`, if any.
    pub(crate) fn opening(ch: char, next: Option<char>) -> Option<Self> {
        match (ch, next) {
            ('#', Some(' ')) => Some(Self::Hash),
            ('-', Some('-')) => Some(Self::Dash),
            ('/', Some('*')) => Some(Self::Block),
            _ => None,
        }
    }

    /// Whether `ch` (followed by `next`) terminates this comment.
    ///
    /// For [`CommentKind::Block`] the terminator is two characters wide; the
    /// caller is expected to consume the extra `/`.
    pub(crate) fn closes(self, ch: char, next: Option<char>) -> bool {
        match self {
            Self::Hash | Self::Dash => ch == '\n',
            Self::Block => ch == '*' && next == Some('/'),
        }
    }
}
