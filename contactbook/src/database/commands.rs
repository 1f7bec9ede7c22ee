use crate::model::statement::{Statement, StatementResult};

/// Database commands are how we interact with the database. The majority of
/// interactions happen via statements (add, update, get, list), plus a command
/// used to control the database (shutdown).
#[derive(Debug)]
pub enum DatabaseCommand {
    /// Sends a single statement to the database and returns the result
    Statement(Statement),

    /// Performs a safe shutdown of the database, requests before the shutdown
    /// will be run, requests after the shutdown will be ignored
    Shutdown,
}

impl DatabaseCommand {
    /// Prints complex logs in a more readable format
    pub fn log_format(&self) -> String {
        format!("{:?}", self)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DatabaseCommandResponse {
    /// Statement has been applied, returns the statement's result
    StatementResult(StatementResult),
    /// Statement has been rejected, returns a message for why
    StatementError(String),
    /// Successfully performed the control command
    ControlSuccess(String),
}

impl DatabaseCommandResponse {
    pub fn control_success(message: &str) -> Self {
        DatabaseCommandResponse::ControlSuccess(message.to_string())
    }

    pub fn statement_error(message: &str) -> Self {
        DatabaseCommandResponse::StatementError(message.to_string())
    }
}

pub struct DatabaseCommandRequest {
    pub resolver: oneshot::Sender<DatabaseCommandResponse>,
    pub command: DatabaseCommand,
}
