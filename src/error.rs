use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Read error: {0}")]
    ReadError(String),

    #[error("Write error: {0}")]
    WriteError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}
