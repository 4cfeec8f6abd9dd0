pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::greeter::{greet_stdout, Greeter};
pub use crate::domain::model::{Greeting, GREETING};
pub use crate::utils::error::{GreeterError, Result};
