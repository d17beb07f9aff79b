use chrono::{NaiveDate, NaiveTime};
use derive_getters::Getters;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const SECONDS_PER_HOUR: i64 = 3600;

/// A class held by a trainer on a given day.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ClassSession {
    class_id: u32,
    trainer_id: u32,
    class_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

impl ClassSession {
    pub fn new(
        class_id: u32,
        trainer_id: u32,
        class_date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            class_id,
            trainer_id,
            class_date,
            start_time,
            end_time,
        }
    }

    /// Length of the class in hours. A class ending before it starts lasts 0 hours.
    pub fn duration_hours(&self) -> Decimal {
        let seconds = (self.end_time - self.start_time).num_seconds().max(0);
        Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR)
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    pub fn get_class_session(
        class_id: u32,
        trainer_id: u32,
        class_date: NaiveDate,
        start: (u32, u32),
        end: (u32, u32),
    ) -> ClassSession {
        ClassSession::new(
            class_id,
            trainer_id,
            class_date,
            NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        )
    }

    #[parameterized(
        start = {(9, 0), (9, 0), (18, 30), (10, 0)},
        end = {(10, 0), (10, 30), (20, 0), (9, 0)},
        expected_hours = {Decimal::ONE, Decimal::new(15, 1), Decimal::new(15, 1), Decimal::ZERO}
    )]
    fn should_compute_duration(start: (u32, u32), end: (u32, u32), expected_hours: Decimal) {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let session = get_class_session(1, 7, date, start, end);
        assert_eq!(expected_hours, session.duration_hours());
    }

    #[test]
    fn should_deserialize_class_session() {
        let json = r#"{"classId":1,"trainerId":7,"classDate":"2024-03-04","startTime":"09:00:00","endTime":"10:30:00"}"#;
        let session: ClassSession = serde_json::from_str(json).unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(get_class_session(1, 7, date, (9, 0), (10, 30)), session);
    }
}
