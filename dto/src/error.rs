use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DtoError {
    #[error("Unknown plan code [code: {0}]")]
    UnknownPlanCode(String),
    #[error("Month should be formatted as YYYY-MM [value: {0}]")]
    InvalidMonthYear(String),
}
