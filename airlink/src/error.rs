use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),

    #[error("'{field}' must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("'{field}' must not be negative, got {value}")]
    NegativeHeight { field: &'static str, value: f64 },
}
