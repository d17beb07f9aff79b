use crate::hours::error::HoursLookupError;
use crate::hours::error::HoursLookupError::NoRecords;
use crate::hours::{HoursKey, HoursLookupGateway};
use dto::class_session::ClassSession;
use dto::worked_hours::WorkedHours;
use rust_decimal::Decimal;

/// Worked hours computed from the class schedule already known locally.
pub struct ScheduleHoursGateway {
    sessions: Vec<ClassSession>,
}

impl ScheduleHoursGateway {
    pub fn new(sessions: Vec<ClassSession>) -> Self {
        Self { sessions }
    }

    fn sessions_of<'a>(&'a self, key: &'a HoursKey) -> impl Iterator<Item = &'a ClassSession> {
        self.sessions.iter().filter(move |session| {
            session.trainer_id() == key.trainer_id()
                && key.month_year().contains(session.class_date())
        })
    }
}

impl HoursLookupGateway for ScheduleHoursGateway {
    /// A month without any session is reported as [NoRecords], not as zero hours.
    async fn worked_hours(&self, key: &HoursKey) -> Result<WorkedHours, HoursLookupError> {
        let mut sessions = self.sessions_of(key).peekable();
        if sessions.peek().is_none() {
            debug!(
                "No class held by trainer {} in {}.",
                key.trainer_id(),
                key.month_year()
            );
            return Err(NoRecords);
        }

        let total_hours: Decimal = sessions.map(ClassSession::duration_hours).sum();
        Ok(WorkedHours::new(Some(total_hours)))
    }
}
