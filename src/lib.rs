pub mod commands;
pub mod reply;
pub mod store;
pub mod utils;
pub mod value;

use thiserror::Error as ThisError;

use crate::value::ValueType;

pub use crate::commands::executable::Executable;
pub use crate::commands::Command;
pub use crate::reply::Reply;
pub use crate::store::Store;
pub use crate::value::Value;

/// Failures a command can run into. None of them are fatal to the store: commands turn them into
/// `Reply::Error` and leave the store untouched.
#[derive(Debug, Clone, ThisError, PartialEq, Eq)]
pub enum Error {
    #[error("WRONGTYPE Operation against a key holding the wrong kind of value")]
    WrongType {
        expected: ValueType,
        actual: ValueType,
    },
    #[error("Cannot increment non-integer")]
    NotAnInteger,
    #[error("increment or decrement would overflow")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, Error>;
