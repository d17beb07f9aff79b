use crate::engine::DerivationEngine;
use crate::form::error::FormError;
use crate::form::error::FormError::{
    MembershipNotOwned, MissingMembership, MissingUser, NonPositiveAmount,
};
use crate::form::input::parse_non_negative;
use crate::form::{DerivedField, RecomputePolicy};
use chrono::NaiveDate;
use dto::membership::MembershipRecord;
use dto::payment::{PaymentMethod, PaymentStatus, PaymentSubmission};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentEvent {
    SelectUser(Option<u32>),
    SelectMembership(Option<MembershipRecord>),
    EditAmount(String),
    SetMethod(PaymentMethod),
    SetStatus(PaymentStatus),
    SetPaymentDate(NaiveDate),
}

/// State of the payment create/edit form.
/// The amount is pre-filled with the price of the chosen membership's plan.
#[derive(Debug, Clone)]
pub struct PaymentForm {
    engine: DerivationEngine,
    editing: bool,
    user_id: Option<u32>,
    membership: Option<MembershipRecord>,
    amount: DerivedField<Option<Decimal>>,
    payment_date: NaiveDate,
    method: PaymentMethod,
    status: PaymentStatus,
}

impl PaymentForm {
    pub fn create(engine: DerivationEngine, today: NaiveDate) -> Self {
        Self {
            engine,
            editing: false,
            user_id: None,
            membership: None,
            amount: DerivedField::default(),
            payment_date: today,
            method: PaymentMethod::default(),
            status: PaymentStatus::default(),
        }
    }

    /// Load a stored payment, along with the membership it pays when it still exists.
    pub fn edit(
        engine: DerivationEngine,
        payment: &PaymentSubmission,
        membership: Option<MembershipRecord>,
    ) -> Self {
        if membership.is_none() {
            warn!(
                "Membership {} of the edited payment is unknown",
                payment.membership_id()
            );
        }

        Self {
            engine,
            editing: true,
            user_id: Some(*payment.user_id()),
            membership,
            amount: DerivedField::computed(Some(*payment.amount())),
            payment_date: *payment.payment_date(),
            method: *payment.method(),
            status: *payment.status(),
        }
    }

    pub fn apply(&mut self, event: PaymentEvent) -> Result<(), FormError> {
        match event {
            PaymentEvent::SelectUser(user_id) => {
                self.user_id = user_id;
                self.membership = None;
                if !self.editing {
                    self.amount = DerivedField::default();
                }
            }
            PaymentEvent::SelectMembership(Some(membership)) => {
                let amount = self.engine.derive_payment_amount(*membership.plan_type());
                self.amount
                    .recompute(Some(amount), RecomputePolicy::AlwaysRecompute);
                self.membership = Some(membership);
            }
            PaymentEvent::SelectMembership(None) => self.membership = None,
            PaymentEvent::EditAmount(input) => {
                let amount = parse_non_negative(&input)?;
                self.amount.override_with(Some(amount));
            }
            PaymentEvent::SetMethod(method) => self.method = method,
            PaymentEvent::SetStatus(status) => self.status = status,
            PaymentEvent::SetPaymentDate(payment_date) => self.payment_date = payment_date,
        }

        Ok(())
    }

    pub fn user_id(&self) -> Option<u32> {
        self.user_id
    }

    pub fn membership(&self) -> Option<&MembershipRecord> {
        self.membership.as_ref()
    }

    pub fn amount(&self) -> &DerivedField<Option<Decimal>> {
        &self.amount
    }

    pub fn payment_date(&self) -> NaiveDate {
        self.payment_date
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn submit(&self) -> Result<PaymentSubmission, FormError> {
        let user_id = self.user_id.ok_or(MissingUser)?;
        let membership = self.membership.as_ref().ok_or(MissingMembership)?;
        if *membership.user_id() != user_id {
            return Err(MembershipNotOwned {
                membership_id: *membership.membership_id(),
                user_id,
            });
        }

        let amount = self
            .amount
            .value()
            .filter(|amount| *amount > Decimal::ZERO)
            .ok_or(NonPositiveAmount)?;

        Ok(PaymentSubmission::new(
            user_id,
            *membership.membership_id(),
            amount,
            self.payment_date,
            self.method,
            self.status,
        ))
    }
}
