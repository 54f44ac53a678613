// Library crate exposing modules for the binary, integration tests and benches

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod scanner;
pub mod util;
