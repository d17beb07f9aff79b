pub mod class_session;
pub mod error;
pub mod gym;
pub mod membership;
pub mod membership_status;
pub mod month_year;
pub mod payment;
pub mod payroll;
pub mod plan_code;
pub mod trainer;
pub mod user;
pub mod worked_hours;
