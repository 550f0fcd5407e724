pub mod catalog;
pub mod engine;
pub mod script;
pub mod types;
