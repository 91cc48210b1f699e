use super::Error;

/// Error from the underlying database while working a statement through its
/// lifecycle.
///
/// The stage records which native call failed: opening the connection,
/// compiling the statement, binding a parameter, advancing the row cursor, or
/// executing a statement that returns no rows.
#[derive(Debug)]
pub(super) struct StatementError {
    pub(super) stage: Stage,
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Stage {
    Open,
    Prepare,
    Bind,
    Step,
    Execute,
}

impl Stage {
    fn describe(self) -> &'static str {
        match self {
            Stage::Open => "failed to open database",
            Stage::Prepare => "failed to prepare statement",
            Stage::Bind => "failed to bind parameter",
            Stage::Step => "failed to advance row cursor",
            Stage::Execute => "failed to execute statement",
        }
    }
}

impl std::error::Error for StatementError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for StatementError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.stage.describe())?;
        // Display the error and walk its source chain
        write!(f, ": {}", self.inner)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    fn statement(stage: Stage, err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Statement(StatementError {
            stage,
            inner: Box::new(err),
        }))
    }

    fn statement_stage(&self) -> Option<Stage> {
        match self.kind() {
            super::ErrorKind::Statement(err) => Some(err.stage),
            _ => None,
        }
    }

    /// Creates an error for a failed connection open.
    pub fn open(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::statement(Stage::Open, err)
    }

    /// Creates an error for a statement that failed to compile.
    pub fn prepare(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::statement(Stage::Prepare, err)
    }

    /// Creates an error for a parameter that failed to bind.
    pub fn bind(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::statement(Stage::Bind, err)
    }

    /// Creates an error for a row cursor that faulted mid-iteration.
    pub fn step(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::statement(Stage::Step, err)
    }

    /// Creates an error for a non-query statement that failed to run.
    pub fn execute(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::statement(Stage::Execute, err)
    }

    /// Returns `true` if this error came from opening a connection.
    pub fn is_open(&self) -> bool {
        self.statement_stage() == Some(Stage::Open)
    }

    /// Returns `true` if this error came from statement compilation.
    pub fn is_prepare(&self) -> bool {
        self.statement_stage() == Some(Stage::Prepare)
    }

    /// Returns `true` if this error came from parameter binding.
    pub fn is_bind(&self) -> bool {
        self.statement_stage() == Some(Stage::Bind)
    }

    /// Returns `true` if this error came from advancing a row cursor.
    pub fn is_step(&self) -> bool {
        self.statement_stage() == Some(Stage::Step)
    }

    /// Returns `true` if this error came from executing a non-query statement.
    pub fn is_execute(&self) -> bool {
        self.statement_stage() == Some(Stage::Execute)
    }
}
