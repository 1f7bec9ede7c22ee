use serde::{Deserialize, Serialize};

use crate::consts::consts::EntityId;

use super::person::{Person, UpdatePersonData};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum Statement {
    Add(Person),
    Update(EntityId, UpdatePersonData),
    Get(EntityId),
    /// Returns every Person, oldest first
    List,
}

impl Statement {
    pub fn is_mutation(&self) -> bool {
        match self {
            Statement::Add(_) | Statement::Update(_, _) => true,
            Statement::Get(_) | Statement::List => false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum StatementResult {
    Single(Person),
    GetSingle(Option<Person>),
    List(Vec<Person>),
}

impl StatementResult {
    // TODO: Consider removing these methods and localizing them in the request_manager
    pub fn single(self) -> Person {
        if let StatementResult::Single(p) = self {
            p
        } else {
            panic!("Statement result is not of type Single")
        }
    }

    pub fn get_single(self) -> Option<Person> {
        if let StatementResult::GetSingle(p) = self {
            p
        } else {
            panic!("Statement result is not of type GetSingle")
        }
    }

    pub fn list(self) -> Vec<Person> {
        if let StatementResult::List(l) = self {
            l
        } else {
            panic!("Statement result is not of type List")
        }
    }
}
