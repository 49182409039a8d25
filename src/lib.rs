pub mod config;
pub mod dog;
pub mod model;
pub mod tasks;

pub use dog::Dog;
pub use model::{Error, Result};
