pub mod consts;
pub mod database;
pub mod listing;
pub mod model;
