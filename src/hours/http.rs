use crate::hours::configuration::Configuration;
use crate::hours::error::HoursLookupError;
use crate::hours::error::HoursLookupError::{
    ConnectionFailed, MalformedResponse, NoRecords, Unauthorized,
};
use crate::hours::{HoursKey, HoursLookupGateway};
use crate::tools::log_message_and_return;
use dto::worked_hours::WorkedHours;
use reqwest::{Client, RequestBuilder, StatusCode};

/// Ask the backend how many hours a trainer worked in a month.
pub struct HttpHoursGateway {
    client: Client,
    configuration: Configuration,
}

impl HttpHoursGateway {
    pub fn new(client: Client, configuration: Configuration) -> Self {
        Self {
            client,
            configuration,
        }
    }

    fn prepare_request(&self, key: &HoursKey) -> RequestBuilder {
        let url = format!("{}/payrolls/auto-hours", self.configuration.base_url());
        let request = self.client.get(url).query(&[
            ("trainerId", key.trainer_id().to_string()),
            ("month", key.month_year().to_string()),
        ]);

        match self.configuration.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl HoursLookupGateway for HttpHoursGateway {
    async fn worked_hours(&self, key: &HoursKey) -> Result<WorkedHours, HoursLookupError> {
        let response = self
            .prepare_request(key)
            .send()
            .await
            .map_err(log_message_and_return(
                "Can't reach the hours backend.",
                ConnectionFailed,
            ))?;

        let status = response.status();
        match status {
            StatusCode::NOT_FOUND => {
                debug!(
                    "No hours recorded for trainer {} in {}.",
                    key.trainer_id(),
                    key.month_year()
                );
                return Err(NoRecords);
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                error!("The hours backend refused the request with status {status}.");
                return Err(Unauthorized);
            }
            _ if !status.is_success() => {
                error!("Hours lookup failed because of status {status}...");
                return Err(ConnectionFailed);
            }
            _ => {}
        }

        response
            .json::<WorkedHours>()
            .await
            .map_err(log_message_and_return(
                "Can't read the worked hours answered by the backend.",
                MalformedResponse,
            ))
    }
}
