use crate::tools::error::ToolsError;
use crate::tools::error::ToolsError::CantCreateClient;
use crate::tools::log_message_and_return;
use reqwest::Client;
use std::time::Duration;

/// Build the HTTP client used to talk to the backend.
/// Requests are aborted once `timeout` is elapsed.
pub fn build_client(timeout: Duration) -> Result<Client, ToolsError> {
    reqwest::ClientBuilder::new()
        .timeout(timeout)
        .build()
        .map_err(log_message_and_return(
            "Can't build HTTP client.",
            CantCreateClient,
        ))
}
