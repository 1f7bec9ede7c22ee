use serde::{Deserialize, Serialize};

use crate::consts::consts::EntityId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl Person {
    pub fn new(first_name: String, last_name: String, phone_number: String) -> Self {
        Person {
            id: EntityId::new(),
            first_name,
            last_name,
            phone_number,
        }
    }

    pub fn new_test() -> Self {
        Person {
            id: EntityId("1".to_string()),
            first_name: "First Name".to_string(),
            last_name: "Last Name".to_string(),
            phone_number: "Phone Number".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UpdatePersonData {
    pub first_name: UpdateStatement,
    pub last_name: UpdateStatement,
    pub phone_number: UpdateStatement,
}

impl UpdatePersonData {
    /// Replaces every field, the shape produced by submitting the edit form
    pub fn set_all(first_name: String, last_name: String, phone_number: String) -> Self {
        UpdatePersonData {
            first_name: UpdateStatement::Set(first_name),
            last_name: UpdateStatement::Set(last_name),
            phone_number: UpdateStatement::Set(phone_number),
        }
    }
}

/// Every Person field is required, so unlike a nullable column there is no 'Unset'
#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum UpdateStatement {
    Set(String),
    NoChanges,
}
