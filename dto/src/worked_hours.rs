use derive_getters::Getters;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours a trainer worked during a month, as answered by the backend.
/// A missing total means the backend holds no record for the trainer.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkedHours {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    total_hours: Option<Decimal>,
}

impl WorkedHours {
    pub fn new(total_hours: Option<Decimal>) -> Self {
        Self { total_hours }
    }
}
