use crate::hours::error::HoursLookupError;
use derive_getters::Getters;
use dto::month_year::MonthYear;
use dto::worked_hours::WorkedHours;
use rust_decimal::Decimal;

pub mod configuration;
pub mod error;
pub mod http;
pub mod schedule;

/// What worked hours are asked for: one trainer, one month.
#[derive(Debug, Getters, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoursKey {
    trainer_id: u32,
    month_year: MonthYear,
}

impl HoursKey {
    pub fn new(trainer_id: u32, month_year: MonthYear) -> Self {
        Self {
            trainer_id,
            month_year,
        }
    }
}

/// Source of the hours a trainer worked during a month.
#[allow(async_fn_in_trait)]
pub trait HoursLookupGateway {
    async fn worked_hours(&self, key: &HoursKey) -> Result<WorkedHours, HoursLookupError>;
}

/// Hours to use for a payroll.
/// When the lookup failed, hours fall back to zero and `warning` tells why.
#[derive(Debug, Getters, Clone, PartialEq, Eq)]
pub struct HoursOutcome {
    total_hours: Decimal,
    warning: Option<HoursLookupError>,
}

impl HoursOutcome {
    pub fn found(total_hours: Decimal) -> Self {
        Self {
            total_hours,
            warning: None,
        }
    }

    pub fn recovered(warning: HoursLookupError) -> Self {
        Self {
            total_hours: Decimal::ZERO,
            warning: Some(warning),
        }
    }
}

/// The answer to a lookup, tagged with the key it was issued for.
#[derive(Debug, Getters, Clone, PartialEq, Eq)]
pub struct HoursLookup {
    key: HoursKey,
    outcome: HoursOutcome,
}

impl HoursLookup {
    pub fn new(key: HoursKey, outcome: HoursOutcome) -> Self {
        Self { key, outcome }
    }
}
