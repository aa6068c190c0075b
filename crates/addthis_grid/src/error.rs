use thiserror::Error;

use crate::authorization::Operation;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("Role not permitted to {operation}")]
    Forbidden { operation: Operation },
    #[error("No row with id {0}")]
    RowNotFound(usize),
}
