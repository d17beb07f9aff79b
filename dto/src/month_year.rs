use crate::error::DtoError;
use crate::error::DtoError::InvalidMonthYear;
use chrono::{Datelike, NaiveDate};
use derive_getters::Getters;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;

static MONTH_YEAR_REGEX: OnceLock<Regex> = OnceLock::new();

/// A calendar month, written `YYYY-MM` when exchanged with the backend.
#[derive(
    Debug, Getters, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(try_from = "String", into = "String")]
pub struct MonthYear {
    year: i32,
    month: u32,
}

impl MonthYear {
    pub fn new(year: i32, month: u32) -> Result<Self, DtoError> {
        if !(1..=12).contains(&month) || !(0..=9999).contains(&year) {
            return Err(InvalidMonthYear(format!("{year}-{month}")));
        }

        Ok(Self { year, month })
    }

    /// The month the given date belongs to.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl Display for MonthYear {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthYear {
    type Err = DtoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let regex = MONTH_YEAR_REGEX
            .get_or_init(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("Regex is valid"));
        let captures = regex
            .captures(value.trim())
            .ok_or_else(|| InvalidMonthYear(value.to_owned()))?;

        let year = captures[1]
            .parse::<i32>()
            .map_err(|_| InvalidMonthYear(value.to_owned()))?;
        let month = captures[2]
            .parse::<u32>()
            .map_err(|_| InvalidMonthYear(value.to_owned()))?;

        Self::new(year, month).map_err(|_| InvalidMonthYear(value.to_owned()))
    }
}

impl TryFrom<String> for MonthYear {
    type Error = DtoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthYear> for String {
    fn from(value: MonthYear) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        value = {"2024-03", "1999-12", "2025-01"},
        expected = {(2024, 3), (1999, 12), (2025, 1)}
    )]
    fn should_parse_month_year(value: &str, expected: (i32, u32)) {
        let month_year = value.parse::<MonthYear>().unwrap();
        assert_eq!(expected, (*month_year.year(), *month_year.month()));
        assert_eq!(value, month_year.to_string());
    }

    #[parameterized(value = {"2024-3", "2024-13", "2024-00", "24-03", "2024/03", "", "march"})]
    fn should_fail_to_parse_malformed_month_year(value: &str) {
        assert_eq!(
            Err(InvalidMonthYear(value.to_owned())),
            value.parse::<MonthYear>()
        );
    }

    #[test]
    fn should_tell_whether_date_is_in_month() {
        let month_year = MonthYear::new(2024, 3).unwrap();

        assert!(month_year.contains(&NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(month_year.contains(&NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
        assert!(!month_year.contains(&NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
        assert!(!month_year.contains(&NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()));
    }

    #[test]
    fn should_build_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 23).unwrap();
        let month_year = MonthYear::of(date);

        assert_eq!("2024-11", month_year.to_string());
        assert!(month_year.contains(&date));
    }

    #[test]
    fn should_round_trip_through_json_string() {
        let month_year: MonthYear = serde_json::from_str(r#""2024-03""#).unwrap();
        assert_eq!(MonthYear::new(2024, 3).unwrap(), month_year);
        assert_eq!(r#""2024-03""#, serde_json::to_string(&month_year).unwrap());
        assert!(serde_json::from_str::<MonthYear>(r#""2024-3""#).is_err());
    }
}
