use derive_getters::Getters;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    trainer_id: u32,
    user_id: u32,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    hourly_rate: Option<Decimal>,
}

impl Trainer {
    pub fn new(trainer_id: u32, user_id: u32, hourly_rate: Option<Decimal>) -> Self {
        Self {
            trainer_id,
            user_id,
            hourly_rate,
        }
    }

    /// The rate used for payrolls: trainers without a stored rate are paid nothing.
    pub fn rate_or_zero(&self) -> Decimal {
        self.hourly_rate.unwrap_or(Decimal::ZERO)
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use crate::user::tests::TRAINER_USER_ID;

    pub const TRAINER_ID: u32 = 7;

    pub fn get_trainer() -> Trainer {
        Trainer::new(TRAINER_ID, TRAINER_USER_ID, Some(Decimal::from(15)))
    }

    #[test]
    fn should_deserialize_trainer() {
        let json = r#"{"trainerId":7,"userId":40,"hourlyRate":15.5}"#;
        let trainer: Trainer = serde_json::from_str(json).unwrap();

        assert_eq!(
            Trainer::new(7, 40, Some(Decimal::new(155, 1))),
            trainer
        );
    }

    #[test]
    fn should_deserialize_trainer_without_rate() {
        let json = r#"{"trainerId":7,"userId":40,"hourlyRate":null}"#;
        let trainer: Trainer = serde_json::from_str(json).unwrap();

        assert_eq!(None, *trainer.hourly_rate());
        assert_eq!(Decimal::ZERO, trainer.rate_or_zero());
    }
}
