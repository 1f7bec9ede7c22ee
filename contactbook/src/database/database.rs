use std::{
    sync::mpsc::{self, Receiver},
    thread,
};

use super::{
    commands::{DatabaseCommand, DatabaseCommandRequest, DatabaseCommandResponse},
    request_manager::RequestManager,
    table::PersonTable,
};

pub struct Database {
    person_table: PersonTable,
    database_receiver: Receiver<DatabaseCommandRequest>,
    request_manager: RequestManager,
}

impl Database {
    pub fn new() -> Self {
        let (database_sender, database_receiver) = mpsc::channel::<DatabaseCommandRequest>();

        Self {
            person_table: PersonTable::new(),
            database_receiver,
            request_manager: RequestManager::new(database_sender),
        }
    }

    /// Spawns the database worker thread and returns the handle used to talk to it
    pub fn run(self) -> RequestManager {
        let request_manager = self.request_manager.clone();

        thread::spawn(move || self.process_commands());

        request_manager
    }

    fn process_commands(self) {
        let Database {
            mut person_table,
            database_receiver,
            request_manager,
        } = self;

        // The worker must not keep its own sender alive, otherwise the receive
        // loop would never observe a disconnect once every caller is gone
        drop(request_manager);

        while let Ok(DatabaseCommandRequest { resolver, command }) = database_receiver.recv() {
            if let DatabaseCommand::Statement(statement) = &command {
                if statement.is_mutation() {
                    log::info!("Received command: {}", command.log_format());
                } else {
                    log::debug!("Received command: {}", command.log_format());
                }
            }

            let command_response = match command {
                DatabaseCommand::Statement(statement) => {
                    match person_table.apply(statement) {
                        Ok(statement_result) => {
                            DatabaseCommandResponse::StatementResult(statement_result)
                        }
                        Err(apply_error) => {
                            DatabaseCommandResponse::statement_error(&apply_error.to_string())
                        }
                    }
                }
                DatabaseCommand::Shutdown => {
                    let _ = resolver.send(DatabaseCommandResponse::control_success(
                        "Successfully shutdown database",
                    ));

                    return;
                }
            };

            // Sends the response data back to the caller of the request, i.e. the entity
            // on the other end of the channel. A caller that hit its receive timeout
            // has already dropped the receiver, the worker must outlive it
            if resolver.send(command_response).is_err() {
                log::warn!("Caller dropped the response receiver before the reply was sent");
            }
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Database::new()
    }
}
