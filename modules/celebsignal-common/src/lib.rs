pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, Credentials};
pub use error::{CelebSignalError, Result};
pub use types::*;
