use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ToolsError {
    #[error("HTTP client couldn't be created.")]
    CantCreateClient,
    #[error("Argument has an invalid value [arg: {arg}, value: {value}]")]
    InvalidArgValue { arg: String, value: String },
}
