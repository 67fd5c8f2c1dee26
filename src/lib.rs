pub mod error;
pub mod generator;
pub mod parser;
pub mod schema;
pub mod transpiler;
