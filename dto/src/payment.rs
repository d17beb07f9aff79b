use chrono::NaiveDate;
use derive_getters::Getters;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "KHQR")]
    Khqr,
    #[serde(rename = "Cash")]
    Cash,
    #[serde(rename = "ABA")]
    Aba,
    #[serde(rename = "ACLEDA")]
    Acleda,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Pending,
    Failed,
}

/// A payment as sent to, or loaded from, the backend.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSubmission {
    user_id: u32,
    membership_id: u32,
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
    payment_date: NaiveDate,
    #[serde(default)]
    method: PaymentMethod,
    #[serde(default)]
    status: PaymentStatus,
}

impl PaymentSubmission {
    pub fn new(
        user_id: u32,
        membership_id: u32,
        amount: Decimal,
        payment_date: NaiveDate,
        method: PaymentMethod,
        status: PaymentStatus,
    ) -> Self {
        Self {
            user_id,
            membership_id,
            amount,
            payment_date,
            method,
            status,
        }
    }
}
