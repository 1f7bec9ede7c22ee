use std::{sync::mpsc::Sender, time::Duration};
use thiserror::Error;

use crate::{
    consts::consts::EntityId,
    model::{
        person::{Person, UpdatePersonData},
        statement::{Statement, StatementResult},
    },
};

use super::commands::{DatabaseCommand, DatabaseCommandRequest, DatabaseCommandResponse};

#[derive(Error, Debug)]
pub enum RequestManagerError {
    #[error("Database took too long to respond to the request")]
    DatabaseTimeout,
    #[error("Statement failed: {0}")]
    StatementFailed(String),
}

/// Goal of the request manager is to provide a simple interface for interacting
/// with the database worker thread
///
/// The request manager provides two APIs, sorted by the easiest to use:
/// 1. CRUD operations on a single person -- these are completely type safe
/// 2. Generic statement based API -- not type safe because you need to know what
///    Statement maps to what StatementResult (e.g. Statement::Add maps -> StatementResult::Single)
#[derive(Clone)]
pub struct RequestManager {
    database_sender: Sender<DatabaseCommandRequest>,
}

impl RequestManager {
    pub fn new(database_sender: Sender<DatabaseCommandRequest>) -> Self {
        Self { database_sender }
    }

    pub fn send_add(&self, person: Person) -> Result<Person, RequestManagerError> {
        let statement_result = self.send_statement(Statement::Add(person))?;
        Ok(statement_result.single())
    }

    pub fn send_update(
        &self,
        id: EntityId,
        person_update: UpdatePersonData,
    ) -> Result<Person, RequestManagerError> {
        let statement_result = self.send_statement(Statement::Update(id, person_update))?;
        Ok(statement_result.single())
    }

    pub fn send_get(&self, id: EntityId) -> Result<Option<Person>, RequestManagerError> {
        let statement_result = self.send_statement(Statement::Get(id))?;
        Ok(statement_result.get_single())
    }

    pub fn send_list(&self) -> Result<Vec<Person>, RequestManagerError> {
        let statement_result = self.send_statement(Statement::List)?;
        Ok(statement_result.list())
    }

    /// Sends a shutdown request to the database and returns the database's response
    pub fn send_shutdown_request(&self) -> Result<String, RequestManagerError> {
        match self.send_command(DatabaseCommand::Shutdown)? {
            DatabaseCommandResponse::ControlSuccess(status) => Ok(status),
            response => panic!("Shutdown should return a control response, got: {:?}", response),
        }
    }

    /// Sends a single statement to the database and returns the statement result
    pub fn send_statement(
        &self,
        statement: Statement,
    ) -> Result<StatementResult, RequestManagerError> {
        match self.send_command(DatabaseCommand::Statement(statement))? {
            DatabaseCommandResponse::StatementResult(statement_result) => Ok(statement_result),
            DatabaseCommandResponse::StatementError(message) => {
                Err(RequestManagerError::StatementFailed(message))
            }
            response => panic!(
                "Statements should return a statement response, got: {:?}",
                response
            ),
        }
    }

    pub fn send_command(
        &self,
        command: DatabaseCommand,
    ) -> Result<DatabaseCommandResponse, RequestManagerError> {
        let (resolver, response_receiver) = oneshot::channel::<DatabaseCommandResponse>();

        let request = DatabaseCommandRequest { resolver, command };

        // Sends the request to the database worker, the worker will respond on
        // the response_receiver once it has finished processing the request
        self.database_sender
            .send(request)
            .expect("Database worker should outlive the request manager");

        match response_receiver.recv_timeout(Duration::from_secs(2)) {
            Ok(response) => Ok(response),
            Err(oneshot::RecvTimeoutError::Timeout) => Err(RequestManagerError::DatabaseTimeout),
            Err(oneshot::RecvTimeoutError::Disconnected) => panic!("Processor exited"),
        }
    }
}

#[cfg(test)]
impl RequestManager {
    /// Lets tests hand-build requests, e.g. one whose response receiver is
    /// already gone
    pub(crate) fn database_sender(&self) -> Sender<DatabaseCommandRequest> {
        self.database_sender.clone()
    }
}
