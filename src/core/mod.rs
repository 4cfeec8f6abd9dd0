pub mod greeter;

pub use crate::domain::model::Greeting;
pub use crate::utils::error::Result;
