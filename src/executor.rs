use crate::{StatementError, StatementSplitter, StatementType};

/// Execution backend for parsed statements, one entry point per category.
///
/// Spanner runs queries on the read path, DML inside a read-write transaction
/// and DDL through a schema update operation, hence the three-way split.
pub trait StatementExecutor {
    /// Result of executing a single statement.
    type Output;
    /// Error type of the backend; dispatch errors must convert into it.
    type Error: From<StatementError>;

    fn execute_query(&mut self, sql: &str) -> Result<Self::Output, Self::Error>;

    fn execute_dml(&mut self, sql: &str) -> Result<Self::Output, Self::Error>;

    fn execute_ddl(&mut self, sql: &str) -> Result<Self::Output, Self::Error>;
}

/// Splits `sql` into statements and runs each one on `executor`, in input
/// order, collecting the per-statement outputs.
///
/// A statement that classifies as [`StatementType::Unspecified`] aborts the
/// run with [`StatementError::Unsupported`] naming the offending statement.
pub fn execute_all<E>(executor: &mut E, sql: &str) -> Result<Vec<E::Output>, E::Error>
where
    E: StatementExecutor,
{
    let mut results = Vec::new();

    for statement in StatementSplitter::new(sql) {
        let statement_type = StatementType::of(statement);
        tracing::trace!("executing {statement_type} statement:\n{statement}");

        let result = match statement_type {
            StatementType::Query => executor.execute_query(statement)?,
            StatementType::Dml => executor.execute_dml(statement)?,
            StatementType::Ddl => executor.execute_ddl(statement)?,
            StatementType::Unspecified => {
                Err(StatementError::Unsupported(statement.to_owned()))?
            }
        };

        results.push(result);
    }

    Ok(results)
}
