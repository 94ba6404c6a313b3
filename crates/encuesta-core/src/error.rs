use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid RUT: {0:?}")]
    InvalidRut(String),
}
