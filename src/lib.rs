#![cfg_attr(not(test), warn(unused_crate_dependencies))]
//! SQL statement splitting and classification for Cloud Spanner clients.
//!
//! A multi-statement SQL text is split on top-level delimiters by
//! [`StatementSplitter`], which tracks quoted strings (including
//! triple-quoted literals) and comments so delimiters inside them never
//! split. Each statement is then bucketed by [`StatementType::of`] so a
//! driver can route it to the right executor: queries to the read path, DML
//! to a read-write transaction, DDL to a schema update.
//!
//! ```
//! use spanner_query_parser::{StatementSplitter, StatementType};
//!
//! let statements: Vec<&str> = StatementSplitter::new("SELECT 1; SELECT 2").collect();
//! assert_eq!(statements, ["SELECT 1", "SELECT 2"]);
//! assert_eq!(StatementType::of(statements[0]), StatementType::Query);
//! ```

mod error;
mod executor;
mod scan;
mod splitter;
mod statement_type;

pub use error::StatementError;
pub use executor::{StatementExecutor, execute_all};
pub use splitter::{DEFAULT_DELIMITER, StatementSplitter};
pub use statement_type::StatementType;
