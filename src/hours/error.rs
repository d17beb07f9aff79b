use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum HoursLookupError {
    #[error("The connection to the hours backend failed.")]
    ConnectionFailed,
    #[error("The hours backend refused the credentials.")]
    Unauthorized,
    #[error("No worked hours are recorded for this trainer and month.")]
    NoRecords,
    #[error("The hours backend answered with an unreadable body.")]
    MalformedResponse,
    #[error("The hours backend didn't answer in time.")]
    TimedOut,
}
