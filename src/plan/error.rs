use dto::plan_code::PlanCode;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("A plan lasts at least one day [plan: {0}, duration: {1}]")]
    InvalidDuration(PlanCode, u32),
    #[error("A plan price can't be negative [plan: {0}, price: {1}]")]
    NegativePrice(PlanCode, Decimal),
    #[error("The plan is defined more than once [plan: {0}]")]
    DuplicatePlan(PlanCode),
    #[error("The plan has no definition [plan: {0}]")]
    MissingPlan(PlanCode),
}
