use chrono::{Days, NaiveDate};

/// Calendar date `days` days after `date`.
/// Saturates at [NaiveDate::MAX] instead of overflowing.
pub fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or_else(|| {
            warn!("Adding {days} days to {date} overflows the calendar, saturating.");
            NaiveDate::MAX
        })
}
