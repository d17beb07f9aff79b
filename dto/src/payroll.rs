use crate::month_year::MonthYear;
use derive_getters::Getters;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaidStatus {
    #[default]
    Unpaid,
    Paid,
}

/// A trainer payroll as sent to, or loaded from, the backend.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSubmission {
    trainer_id: u32,
    month_year: MonthYear,
    #[serde(with = "rust_decimal::serde::float")]
    total_hours: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    hourly_rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    total_salary: Decimal,
    #[serde(default)]
    paid_status: PaidStatus,
}

impl PayrollSubmission {
    pub fn new(
        trainer_id: u32,
        month_year: MonthYear,
        total_hours: Decimal,
        hourly_rate: Decimal,
        total_salary: Decimal,
        paid_status: PaidStatus,
    ) -> Self {
        Self {
            trainer_id,
            month_year,
            total_hours,
            hourly_rate,
            total_salary,
            paid_status,
        }
    }
}
