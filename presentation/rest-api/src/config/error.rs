use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVariable(&'static str),
    #[error("{name} has an invalid value: {value}")]
    InvalidValue { name: &'static str, value: String },
}
