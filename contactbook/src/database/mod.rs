pub mod commands;
pub mod database;
pub mod request_manager;
pub mod table;
