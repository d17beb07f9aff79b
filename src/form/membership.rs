use crate::engine::DerivationEngine;
use crate::form::error::FormError;
use crate::form::error::FormError::MissingMember;
use crate::form::DerivedField;
use chrono::NaiveDate;
use dto::membership::{MembershipRecord, MembershipSubmission};
use dto::membership_status::MembershipStatus;
use dto::plan_code::PlanCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipEvent {
    SelectMember(Option<u32>),
    SelectTrainer(Option<u32>),
    SelectGym(Option<u32>),
    ChoosePlan(PlanCode),
    SetStartDate(NaiveDate),
    EditEndDate(NaiveDate),
    SetStatus(MembershipStatus),
}

/// State of the membership create/edit form.
/// The end date follows the plan and the start date, and stays editable.
/// A typed end date is kept or replaced according to the engine's end date policy.
#[derive(Debug, Clone)]
pub struct MembershipForm {
    engine: DerivationEngine,
    membership_id: Option<u32>,
    user_id: Option<u32>,
    trainer_id: Option<u32>,
    gym_id: Option<u32>,
    plan_type: PlanCode,
    start_date: NaiveDate,
    end_date: DerivedField<NaiveDate>,
    status: MembershipStatus,
}

impl MembershipForm {
    pub fn create(engine: DerivationEngine, today: NaiveDate) -> Self {
        let plan_type = PlanCode::default();
        let end_date = engine.derive_membership_end(today, plan_type);
        Self {
            engine,
            membership_id: None,
            user_id: None,
            trainer_id: None,
            gym_id: None,
            plan_type,
            start_date: today,
            end_date: DerivedField::computed(end_date),
            status: MembershipStatus::Active,
        }
    }

    /// Load a stored membership.
    /// Its end date counts as derived; a missing one is derived right away.
    pub fn edit(engine: DerivationEngine, membership: &MembershipRecord) -> Self {
        let end_date = membership.end_date().unwrap_or_else(|| {
            engine.derive_membership_end(*membership.start_date(), *membership.plan_type())
        });
        Self {
            engine,
            membership_id: Some(*membership.membership_id()),
            user_id: Some(*membership.user_id()),
            trainer_id: *membership.trainer_id(),
            gym_id: *membership.gym_id(),
            plan_type: *membership.plan_type(),
            start_date: *membership.start_date(),
            end_date: DerivedField::computed(end_date),
            status: *membership.status(),
        }
    }

    pub fn apply(&mut self, event: MembershipEvent) {
        match event {
            MembershipEvent::SelectMember(user_id) => self.user_id = user_id,
            MembershipEvent::SelectTrainer(trainer_id) => self.trainer_id = trainer_id,
            MembershipEvent::SelectGym(gym_id) => self.gym_id = gym_id,
            MembershipEvent::ChoosePlan(plan_type) => {
                self.plan_type = plan_type;
                self.derive_end_date();
            }
            MembershipEvent::SetStartDate(start_date) => {
                self.start_date = start_date;
                self.derive_end_date();
            }
            MembershipEvent::EditEndDate(end_date) => self.end_date.override_with(end_date),
            MembershipEvent::SetStatus(status) => self.status = status,
        }
    }

    fn derive_end_date(&mut self) {
        let end_date = self
            .engine
            .derive_membership_end(self.start_date, self.plan_type);
        let policy = *self.engine.end_date_policy();
        if !self.end_date.recompute(end_date, policy) {
            debug!(
                "Keeping end date {} typed by the user instead of {end_date}",
                self.end_date.value()
            );
        }
    }

    pub fn membership_id(&self) -> Option<u32> {
        self.membership_id
    }

    pub fn user_id(&self) -> Option<u32> {
        self.user_id
    }

    pub fn trainer_id(&self) -> Option<u32> {
        self.trainer_id
    }

    pub fn gym_id(&self) -> Option<u32> {
        self.gym_id
    }

    pub fn plan_type(&self) -> PlanCode {
        self.plan_type
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> &DerivedField<NaiveDate> {
        &self.end_date
    }

    pub fn status(&self) -> MembershipStatus {
        self.status
    }

    /// The membership as displayed, derived or typed.
    pub fn submit(&self) -> Result<MembershipSubmission, FormError> {
        let user_id = self.user_id.ok_or(MissingMember)?;
        Ok(MembershipSubmission::new(
            user_id,
            self.trainer_id,
            self.gym_id,
            self.plan_type,
            self.start_date,
            *self.end_date.value(),
            self.status,
        ))
    }
}
