#[macro_use]
extern crate log;

pub mod configuration;
pub mod date_math;
pub mod directory;
pub mod engine;
pub mod error;
pub mod form;
pub mod hours;
pub mod plan;
pub mod tools;
