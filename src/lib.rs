pub mod changelog;
pub mod cli;
pub mod command;
pub mod error;
pub mod forge;
pub mod validator;

pub use error::{ChangelogGuardError, Result};
pub use validator::{ChangelogValidator, Verdict};
