//! Filter, map, group and reduce operations over in-memory financial transactions, using exact
//! decimal arithmetic throughout.

pub mod config;
pub mod engine;
pub mod input;
pub mod models;
pub mod reports;
pub mod types;
