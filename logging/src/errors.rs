use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LoggingError {
    #[error("failure to configure logging")]
    InternalError,
}
