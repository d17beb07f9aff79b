use crate::engine::DerivationEngine;
use crate::form::error::FormError;
use crate::form::error::FormError::MissingTrainer;
use crate::form::input::parse_non_negative;
use crate::form::{DerivedField, RecomputePolicy};
use crate::hours::error::HoursLookupError;
use crate::hours::{HoursKey, HoursLookup};
use chrono::NaiveDate;
use dto::month_year::MonthYear;
use dto::payroll::{PaidStatus, PayrollSubmission};
use dto::trainer::Trainer;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayrollEvent {
    SelectTrainer(Option<Trainer>),
    SetMonth(MonthYear),
    EditHours(String),
    EditRate(String),
    EditSalary(String),
    SetPaidStatus(PaidStatus),
}

/// Where the worked hours shown in the form come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoursStatus {
    /// Nothing looked up yet.
    Idle,
    Pending,
    Found,
    /// The lookup gave no usable answer, hours fell back to zero.
    Recovered(HoursLookupError),
    /// Typed by the user.
    Manual,
}

/// State of the payroll create/edit form.
///
/// Choosing a trainer or a month yields the [HoursKey] to look up.
/// The caller resolves it with [DerivationEngine::lookup_hours]
/// and hands the answer back through [PayrollForm::receive_hours].
/// Only the answer to the latest lookup is applied.
#[derive(Debug, Clone)]
pub struct PayrollForm {
    engine: DerivationEngine,
    trainer_id: Option<u32>,
    month_year: MonthYear,
    total_hours: DerivedField<Decimal>,
    hourly_rate: DerivedField<Decimal>,
    total_salary: DerivedField<Decimal>,
    paid_status: PaidStatus,
    pending: Option<HoursKey>,
    hours_status: HoursStatus,
}

impl PayrollForm {
    /// New payroll for the month `today` falls in.
    pub fn create(engine: DerivationEngine, today: NaiveDate) -> Self {
        Self {
            engine,
            trainer_id: None,
            month_year: MonthYear::of(today),
            total_hours: DerivedField::default(),
            hourly_rate: DerivedField::default(),
            total_salary: DerivedField::default(),
            paid_status: PaidStatus::default(),
            pending: None,
            hours_status: HoursStatus::Idle,
        }
    }

    pub fn edit(engine: DerivationEngine, payroll: &PayrollSubmission) -> Self {
        Self {
            engine,
            trainer_id: Some(*payroll.trainer_id()),
            month_year: *payroll.month_year(),
            total_hours: DerivedField::computed(*payroll.total_hours()),
            hourly_rate: DerivedField::computed(*payroll.hourly_rate()),
            total_salary: DerivedField::computed(*payroll.total_salary()),
            paid_status: *payroll.paid_status(),
            pending: None,
            hours_status: HoursStatus::Idle,
        }
    }

    /// Apply a user change.
    /// Returns the hours lookup to issue when the trainer or the month changed.
    pub fn apply(&mut self, event: PayrollEvent) -> Result<Option<HoursKey>, FormError> {
        match event {
            PayrollEvent::SelectTrainer(Some(trainer)) => {
                self.trainer_id = Some(*trainer.trainer_id());
                self.hourly_rate
                    .recompute(trainer.rate_or_zero(), RecomputePolicy::AlwaysRecompute);
                return Ok(self.issue_lookup());
            }
            PayrollEvent::SelectTrainer(None) => {
                self.trainer_id = None;
                self.pending = None;
                self.hours_status = HoursStatus::Idle;
                self.hourly_rate
                    .recompute(Decimal::ZERO, RecomputePolicy::AlwaysRecompute);
                self.derive_salary();
            }
            PayrollEvent::SetMonth(month_year) => {
                self.month_year = month_year;
                return Ok(self.issue_lookup());
            }
            PayrollEvent::EditHours(input) => {
                let total_hours = parse_non_negative(&input)?;
                if let Some(key) = self.pending.take() {
                    debug!("Hours typed by hand, dropping lookup for {key:?}");
                }
                self.total_hours.override_with(total_hours);
                self.hours_status = HoursStatus::Manual;
                self.derive_salary();
            }
            PayrollEvent::EditRate(input) => {
                let hourly_rate = parse_non_negative(&input)?;
                self.hourly_rate.override_with(hourly_rate);
                self.derive_salary();
            }
            PayrollEvent::EditSalary(input) => {
                let total_salary = parse_non_negative(&input)?;
                self.total_salary.override_with(total_salary);
            }
            PayrollEvent::SetPaidStatus(paid_status) => self.paid_status = paid_status,
        }

        Ok(None)
    }

    /// Apply the answer to a lookup.
    /// Answers to any lookup but the latest one are discarded, and false is returned.
    pub fn receive_hours(&mut self, lookup: HoursLookup) -> bool {
        let key = *lookup.key();
        if self.pending != Some(key) || self.current_key() != Some(key) {
            debug!("Discarding stale hours for {key:?}");
            return false;
        }

        self.pending = None;
        let outcome = lookup.outcome();
        self.total_hours
            .recompute(*outcome.total_hours(), RecomputePolicy::AlwaysRecompute);
        self.hours_status = match outcome.warning() {
            Some(warning) => HoursStatus::Recovered(warning.clone()),
            None => HoursStatus::Found,
        };
        self.derive_salary();
        true
    }

    fn current_key(&self) -> Option<HoursKey> {
        self.trainer_id
            .map(|trainer_id| HoursKey::new(trainer_id, self.month_year))
    }

    fn issue_lookup(&mut self) -> Option<HoursKey> {
        self.pending = self.current_key();
        if let Some(key) = self.pending {
            debug!("Hours lookup issued for {key:?}");
            self.hours_status = HoursStatus::Pending;
        }
        self.pending
    }

    /// Salary keeps its last value while hours are being looked up.
    fn derive_salary(&mut self) {
        if self.pending.is_some() {
            return;
        }

        let total_salary = self
            .engine
            .derive_payroll_salary(*self.hourly_rate.value(), *self.total_hours.value());
        self.total_salary
            .recompute(total_salary, RecomputePolicy::AlwaysRecompute);
    }

    pub fn trainer_id(&self) -> Option<u32> {
        self.trainer_id
    }

    pub fn month_year(&self) -> MonthYear {
        self.month_year
    }

    pub fn total_hours(&self) -> &DerivedField<Decimal> {
        &self.total_hours
    }

    pub fn hourly_rate(&self) -> &DerivedField<Decimal> {
        &self.hourly_rate
    }

    pub fn total_salary(&self) -> &DerivedField<Decimal> {
        &self.total_salary
    }

    pub fn paid_status(&self) -> PaidStatus {
        self.paid_status
    }

    pub fn pending(&self) -> Option<HoursKey> {
        self.pending
    }

    pub fn hours_status(&self) -> &HoursStatus {
        &self.hours_status
    }

    pub fn submit(&self) -> Result<PayrollSubmission, FormError> {
        let trainer_id = self.trainer_id.ok_or(MissingTrainer)?;
        Ok(PayrollSubmission::new(
            trainer_id,
            self.month_year,
            *self.total_hours.value(),
            *self.hourly_rate.value(),
            *self.total_salary.value(),
            self.paid_status,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::error::FormError::InvalidNumericInput;
    use crate::hours::HoursOutcome;
    use crate::hours::error::HoursLookupError::ConnectionFailed;
    use crate::hours::schedule::ScheduleHoursGateway;
    use dto::class_session::tests::get_class_session;
    use dto::trainer::tests::{TRAINER_ID, get_trainer};
    use tokio::runtime::Runtime;

    fn march() -> MonthYear {
        MonthYear::new(2024, 3).unwrap()
    }

    fn april() -> MonthYear {
        MonthYear::new(2024, 4).unwrap()
    }

    fn march_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 18).unwrap()
    }

    fn create_form() -> PayrollForm {
        PayrollForm::create(DerivationEngine::default(), march_day())
    }

    fn found(key: HoursKey, total_hours: Decimal) -> HoursLookup {
        HoursLookup::new(key, HoursOutcome::found(total_hours))
    }

    #[test]
    fn should_create_form_with_defaults() {
        let form = create_form();

        assert_eq!(None, form.trainer_id());
        assert_eq!(march(), form.month_year());
        assert_eq!(&Decimal::ZERO, form.total_salary().value());
        assert_eq!(PaidStatus::Unpaid, form.paid_status());
        assert_eq!(&HoursStatus::Idle, form.hours_status());
    }

    #[test]
    fn selecting_trainer_should_issue_lookup_and_derive_rate() {
        let mut form = create_form();

        let key = form
            .apply(PayrollEvent::SelectTrainer(Some(get_trainer())))
            .unwrap();

        assert_eq!(Some(HoursKey::new(TRAINER_ID, march())), key);
        assert_eq!(key, form.pending());
        assert_eq!(&HoursStatus::Pending, form.hours_status());
        assert_eq!(&DerivedField::computed(Decimal::from(15)), form.hourly_rate());
    }

    #[test]
    fn trainer_without_rate_should_have_zero_rate() {
        let mut form = create_form();

        form.apply(PayrollEvent::SelectTrainer(Some(Trainer::new(8, 41, None))))
            .unwrap();

        assert_eq!(&Decimal::ZERO, form.hourly_rate().value());
    }

    #[test]
    fn setting_month_without_trainer_should_not_issue_lookup() {
        let mut form = create_form();

        let key = form.apply(PayrollEvent::SetMonth(april())).unwrap();

        assert_eq!(None, key);
        assert_eq!(&HoursStatus::Idle, form.hours_status());
    }

    #[test]
    fn received_hours_should_derive_salary() {
        let mut form = create_form();
        let key = form
            .apply(PayrollEvent::SelectTrainer(Some(get_trainer())))
            .unwrap()
            .unwrap();

        assert!(form.receive_hours(found(key, Decimal::from(42))));

        assert_eq!(&Decimal::from(42), form.total_hours().value());
        assert_eq!(&Decimal::new(63000, 2), form.total_salary().value());
        assert_eq!(&HoursStatus::Found, form.hours_status());
        assert_eq!(None, form.pending());
    }

    #[test]
    fn salary_should_be_held_while_lookup_is_pending() {
        let mut form = create_form();
        let key = form
            .apply(PayrollEvent::SelectTrainer(Some(get_trainer())))
            .unwrap()
            .unwrap();
        form.receive_hours(found(key, Decimal::from(42)));

        form.apply(PayrollEvent::SetMonth(april())).unwrap();
        form.apply(PayrollEvent::EditRate("20".to_owned())).unwrap();

        assert_eq!(&Decimal::new(63000, 2), form.total_salary().value());
        assert_eq!(&HoursStatus::Pending, form.hours_status());
    }

    #[test]
    fn stale_hours_should_be_discarded() {
        let mut form = create_form();
        let march_key = form
            .apply(PayrollEvent::SelectTrainer(Some(get_trainer())))
            .unwrap()
            .unwrap();
        let april_key = form
            .apply(PayrollEvent::SetMonth(april()))
            .unwrap()
            .unwrap();

        assert!(!form.receive_hours(found(march_key, Decimal::from(42))));
        assert_eq!(&Decimal::ZERO, form.total_hours().value());
        assert_eq!(Some(april_key), form.pending());

        assert!(form.receive_hours(found(april_key, Decimal::from(10))));
        assert_eq!(&Decimal::from(10), form.total_hours().value());
        assert_eq!(&Decimal::new(15000, 2), form.total_salary().value());
    }

    #[test]
    fn stale_hours_arriving_after_fresh_ones_should_be_discarded() {
        let mut form = create_form();
        let march_key = form
            .apply(PayrollEvent::SelectTrainer(Some(get_trainer())))
            .unwrap()
            .unwrap();
        let april_key = form
            .apply(PayrollEvent::SetMonth(april()))
            .unwrap()
            .unwrap();

        assert!(form.receive_hours(found(april_key, Decimal::from(10))));
        assert!(!form.receive_hours(found(march_key, Decimal::from(42))));

        assert_eq!(&Decimal::from(10), form.total_hours().value());
    }

    #[test]
    fn failed_lookup_should_fall_back_to_zero_hours() {
        let mut form = create_form();
        let key = form
            .apply(PayrollEvent::SelectTrainer(Some(get_trainer())))
            .unwrap()
            .unwrap();

        assert!(form.receive_hours(HoursLookup::new(
            key,
            HoursOutcome::recovered(ConnectionFailed)
        )));

        assert_eq!(&Decimal::ZERO, form.total_hours().value());
        assert_eq!(&Decimal::ZERO, form.total_salary().value());
        assert_eq!(&HoursStatus::Recovered(ConnectionFailed), form.hours_status());
    }

    #[test]
    fn manual_hours_should_cancel_pending_lookup() {
        let mut form = create_form();
        let key = form
            .apply(PayrollEvent::SelectTrainer(Some(get_trainer())))
            .unwrap()
            .unwrap();

        form.apply(PayrollEvent::EditHours("12.5".to_owned())).unwrap();

        assert_eq!(None, form.pending());
        assert_eq!(&HoursStatus::Manual, form.hours_status());
        assert_eq!(&Decimal::new(18750, 2), form.total_salary().value());
        assert!(!form.receive_hours(found(key, Decimal::from(42))));
        assert_eq!(&Decimal::new(125, 1), form.total_hours().value());
    }

    #[test]
    fn invalid_hours_should_be_rejected_and_leave_hours_unchanged() {
        let mut form = create_form();
        let key = form
            .apply(PayrollEvent::SelectTrainer(Some(get_trainer())))
            .unwrap()
            .unwrap();
        form.receive_hours(found(key, Decimal::from(42)));

        let result = form.apply(PayrollEvent::EditHours("-3".to_owned()));

        assert_eq!(Err(InvalidNumericInput("-3".to_owned())), result);
        assert_eq!(&DerivedField::computed(Decimal::from(42)), form.total_hours());
    }

    #[test]
    fn rate_change_should_derive_salary() {
        let mut form = create_form();
        let key = form
            .apply(PayrollEvent::SelectTrainer(Some(get_trainer())))
            .unwrap()
            .unwrap();
        form.receive_hours(found(key, Decimal::from(42)));

        form.apply(PayrollEvent::EditRate("12.25".to_owned())).unwrap();

        assert_eq!(&Decimal::new(51450, 2), form.total_salary().value());
    }

    #[test]
    fn manual_salary_should_be_submitted() {
        let mut form = create_form();
        let key = form
            .apply(PayrollEvent::SelectTrainer(Some(get_trainer())))
            .unwrap()
            .unwrap();
        form.receive_hours(found(key, Decimal::from(42)));
        form.apply(PayrollEvent::EditSalary("600".to_owned())).unwrap();
        form.apply(PayrollEvent::SetPaidStatus(PaidStatus::Paid)).unwrap();

        let submission = form.submit().unwrap();

        assert_eq!(
            PayrollSubmission::new(
                TRAINER_ID,
                march(),
                Decimal::from(42),
                Decimal::from(15),
                Decimal::from(600),
                PaidStatus::Paid,
            ),
            submission
        );
    }

    #[test]
    fn unselecting_trainer_should_drop_pending_lookup() {
        let mut form = create_form();
        let key = form
            .apply(PayrollEvent::SelectTrainer(Some(get_trainer())))
            .unwrap()
            .unwrap();

        form.apply(PayrollEvent::SelectTrainer(None)).unwrap();

        assert_eq!(None, form.pending());
        assert!(!form.receive_hours(found(key, Decimal::from(42))));
        assert_eq!(&Decimal::ZERO, form.hourly_rate().value());
        assert_eq!(Err(MissingTrainer), form.submit());
    }

    #[test]
    fn unselecting_trainer_should_reset_rate_and_salary() {
        let mut form = create_form();
        let key = form
            .apply(PayrollEvent::SelectTrainer(Some(get_trainer())))
            .unwrap()
            .unwrap();
        form.receive_hours(found(key, Decimal::from(42)));
        assert_eq!(&Decimal::new(63000, 2), form.total_salary().value());

        form.apply(PayrollEvent::SelectTrainer(None)).unwrap();

        assert_eq!(&DerivedField::computed(Decimal::ZERO), form.hourly_rate());
        assert_eq!(&DerivedField::computed(Decimal::ZERO), form.total_salary());
        assert_eq!(&HoursStatus::Idle, form.hours_status());
    }

    #[test]
    fn should_edit_stored_payroll() {
        let payroll = PayrollSubmission::new(
            TRAINER_ID,
            march(),
            Decimal::from(40),
            Decimal::from(15),
            Decimal::from(600),
            PaidStatus::Paid,
        );

        let mut form = PayrollForm::edit(DerivationEngine::default(), &payroll);
        assert_eq!(payroll, form.submit().unwrap());

        form.apply(PayrollEvent::EditHours("42".to_owned())).unwrap();
        assert_eq!(&Decimal::new(63000, 2), form.total_salary().value());
    }

    #[test]
    fn should_derive_payroll_from_class_schedule() {
        let engine = DerivationEngine::default();
        let gateway = ScheduleHoursGateway::new(vec![
            get_class_session(1, TRAINER_ID, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), (9, 0), (10, 30)),
            get_class_session(2, TRAINER_ID, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(), (18, 0), (20, 0)),
        ]);
        let mut form = PayrollForm::create(engine.clone(), march_day());

        let key = form
            .apply(PayrollEvent::SelectTrainer(Some(get_trainer())))
            .unwrap()
            .unwrap();
        let lookup = Runtime::new()
            .unwrap()
            .block_on(engine.lookup_hours(&gateway, key));

        assert!(form.receive_hours(lookup));
        assert_eq!(&Decimal::new(35, 1), form.total_hours().value());
        assert_eq!(&Decimal::new(5250, 2), form.total_salary().value());
    }
}
