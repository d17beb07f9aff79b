use crate::configuration::DerivationConfiguration;
use crate::date_math::add_days;
use crate::error::Result;
use crate::form::RecomputePolicy;
use crate::hours::error::HoursLookupError::{MalformedResponse, NoRecords, TimedOut};
use crate::hours::{HoursKey, HoursLookup, HoursLookupGateway, HoursOutcome};
use crate::plan::PlanCatalog;
use chrono::NaiveDate;
use derive_getters::Getters;
use dto::plan_code::PlanCode;
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

const DEFAULT_HOURS_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Computes the values forms pre-fill: membership end dates, payment amounts and salaries.
#[derive(Debug, Getters, Clone)]
pub struct DerivationEngine {
    catalog: Arc<PlanCatalog>,
    hours_lookup_timeout: Duration,
    end_date_policy: RecomputePolicy,
}

impl Default for DerivationEngine {
    fn default() -> Self {
        Self::new(Arc::new(PlanCatalog::default()), DEFAULT_HOURS_LOOKUP_TIMEOUT)
    }
}

impl DerivationEngine {
    pub fn new(catalog: Arc<PlanCatalog>, hours_lookup_timeout: Duration) -> Self {
        Self {
            catalog,
            hours_lookup_timeout,
            end_date_policy: RecomputePolicy::default(),
        }
    }

    /// Policy membership forms apply to an end date typed by the user.
    pub fn with_end_date_policy(mut self, end_date_policy: RecomputePolicy) -> Self {
        self.end_date_policy = end_date_policy;
        self
    }

    pub fn from_configuration(
        catalog: Arc<PlanCatalog>,
        configuration: &DerivationConfiguration,
    ) -> Self {
        Self::new(catalog, *configuration.hours_lookup_timeout())
            .with_end_date_policy(*configuration.end_date_policy())
    }

    /// Build an engine configured from the app args.
    pub fn from_args(catalog: Arc<PlanCatalog>) -> Result<Self> {
        let configuration = DerivationConfiguration::from_args()?;
        Ok(Self::from_configuration(catalog, &configuration))
    }

    pub fn derive_membership_end(&self, start_date: NaiveDate, plan_code: PlanCode) -> NaiveDate {
        add_days(start_date, self.catalog.duration_days(plan_code))
    }

    pub fn derive_payment_amount(&self, plan_code: PlanCode) -> Decimal {
        self.catalog.price(plan_code)
    }

    /// `hourly_rate × total_hours`, rounded half-up to the cent.
    pub fn derive_payroll_salary(&self, hourly_rate: Decimal, total_hours: Decimal) -> Decimal {
        let salary = hourly_rate.checked_mul(total_hours).unwrap_or_else(|| {
            warn!("Salary for {total_hours} hours at {hourly_rate} overflows, saturating.");
            Decimal::MAX
        });
        round_to_cent(salary)
    }

    /// Ask the gateway for the hours worked, giving up after the configured timeout.
    /// Never fails: a lookup without usable answer yields zero hours and a warning.
    pub async fn lookup_hours<G: HoursLookupGateway>(
        &self,
        gateway: &G,
        key: HoursKey,
    ) -> HoursLookup {
        debug!(
            "Looking up hours of trainer {} in {}",
            key.trainer_id(),
            key.month_year()
        );

        let outcome = match timeout(self.hours_lookup_timeout, gateway.worked_hours(&key)).await {
            Ok(Ok(worked_hours)) => match *worked_hours.total_hours() {
                Some(total_hours) if total_hours.is_sign_negative() && !total_hours.is_zero() => {
                    warn!("Negative hours [{total_hours}] answered for {key:?}, ignoring.");
                    HoursOutcome::recovered(MalformedResponse)
                }
                Some(total_hours) => HoursOutcome::found(total_hours),
                None => HoursOutcome::recovered(NoRecords),
            },
            Ok(Err(error)) => {
                warn!("Hours lookup failed for {key:?}, falling back to 0 hours: {error}");
                HoursOutcome::recovered(error)
            }
            Err(_) => {
                warn!(
                    "Hours lookup for {key:?} took more than {:?}, falling back to 0 hours.",
                    self.hours_lookup_timeout
                );
                HoursOutcome::recovered(TimedOut)
            }
        };

        HoursLookup::new(key, outcome)
    }
}

fn round_to_cent(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
