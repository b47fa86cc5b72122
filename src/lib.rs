pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logger;
pub mod sample;
pub mod sizes;

pub use config::GeneratorConfig;
pub use error::{ErrorKind, IconError, Result};
pub use generator::generate;
