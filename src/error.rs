use thiserror::Error as ThisError;

/// Enum representing statement dispatch errors.
///
/// The splitter and classifier themselves never fail; errors only arise at
/// the dispatch boundary, where an unclassifiable statement has nowhere to go.
#[derive(Debug, ThisError)]
pub enum StatementError {
    #[error("unsupported statement: {0}")]
    Unsupported(String),
}
