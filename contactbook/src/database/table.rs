use std::collections::HashMap;
use thiserror::Error;

use crate::{
    consts::consts::EntityId,
    model::{
        person::{Person, UpdateStatement},
        statement::{Statement, StatementResult},
    },
};

#[derive(Error, Debug)]
pub enum ApplyErrors {
    // CRUD - CREATE
    #[error("Cannot create, record already exists: {0}")]
    CannotCreateWhenAlreadyExists(EntityId),

    // CRUD - UPDATE
    #[error("Cannot update, record does not exist: {0}")]
    CannotUpdateDoesNotExist(EntityId),
}

type RowPrimaryKey = String;

pub struct PersonTable {
    pub person_rows: HashMap<RowPrimaryKey, Person>,
    /// List returns rows oldest first, HashMap iteration order is not stable
    insertion_order: Vec<RowPrimaryKey>,
}

impl PersonTable {
    pub fn new() -> Self {
        Self {
            person_rows: HashMap::<RowPrimaryKey, Person>::new(),
            insertion_order: Vec::<RowPrimaryKey>::new(),
        }
    }

    pub fn apply(&mut self, statement: Statement) -> Result<StatementResult, ApplyErrors> {
        let statement_result = match statement {
            Statement::Add(person) => {
                let key = person.id.to_string();

                if self.person_rows.contains_key(&key) {
                    return Err(ApplyErrors::CannotCreateWhenAlreadyExists(person.id));
                }

                self.person_rows.insert(key.clone(), person.clone());
                self.insertion_order.push(key);

                StatementResult::Single(person)
            }
            Statement::Update(id, update_person) => {
                let person = self
                    .person_rows
                    .get_mut(&id.to_string())
                    .ok_or(ApplyErrors::CannotUpdateDoesNotExist(id.clone()))?;

                if let UpdateStatement::Set(first_name) = update_person.first_name {
                    person.first_name = first_name;
                }

                if let UpdateStatement::Set(last_name) = update_person.last_name {
                    person.last_name = last_name;
                }

                if let UpdateStatement::Set(phone_number) = update_person.phone_number {
                    person.phone_number = phone_number;
                }

                StatementResult::Single(person.clone())
            }
            Statement::Get(id) => {
                StatementResult::GetSingle(self.person_rows.get(&id.to_string()).cloned())
            }
            Statement::List => {
                let people = self
                    .insertion_order
                    .iter()
                    .filter_map(|key| self.person_rows.get(key))
                    .cloned()
                    .collect();

                StatementResult::List(people)
            }
        };

        Ok(statement_result)
    }
}

impl Default for PersonTable {
    fn default() -> Self {
        PersonTable::new()
    }
}
