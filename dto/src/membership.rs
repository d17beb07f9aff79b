use crate::membership_status::MembershipStatus;
use crate::plan_code::PlanCode;
use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A membership as stored by the backend.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Hash, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MembershipRecord {
    membership_id: u32,
    user_id: u32,
    #[serde(default)]
    trainer_id: Option<u32>,
    #[serde(default)]
    gym_id: Option<u32>,
    plan_type: PlanCode,
    start_date: NaiveDate,
    #[serde(default)]
    end_date: Option<NaiveDate>,
    #[serde(default)]
    status: MembershipStatus,
}

impl MembershipRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        membership_id: u32,
        user_id: u32,
        trainer_id: Option<u32>,
        gym_id: Option<u32>,
        plan_type: PlanCode,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        status: MembershipStatus,
    ) -> Self {
        Self {
            membership_id,
            user_id,
            trainer_id,
            gym_id,
            plan_type,
            start_date,
            end_date,
            status,
        }
    }
}

impl PartialOrd for MembershipRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Memberships are ordered by start date, then by id.
impl Ord for MembershipRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start_date
            .cmp(&other.start_date)
            .then(self.membership_id.cmp(&other.membership_id))
    }
}

/// A membership as sent to the backend on create or update.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MembershipSubmission {
    user_id: u32,
    trainer_id: Option<u32>,
    gym_id: Option<u32>,
    plan_type: PlanCode,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: MembershipStatus,
}

impl MembershipSubmission {
    pub fn new(
        user_id: u32,
        trainer_id: Option<u32>,
        gym_id: Option<u32>,
        plan_type: PlanCode,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: MembershipStatus,
    ) -> Self {
        Self {
            user_id,
            trainer_id,
            gym_id,
            plan_type,
            start_date,
            end_date,
            status,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use crate::user::tests::MEMBER_ID;
    use parameterized::{ide, parameterized};

    ide!();

    pub const MEMBERSHIP_ID: u32 = 101;

    impl MembershipRecord {
        pub fn new_test(membership_id: u32, user_id: u32, plan_type: PlanCode) -> Self {
            MembershipRecord {
                membership_id,
                user_id,
                trainer_id: None,
                gym_id: None,
                plan_type,
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                end_date: None,
                status: MembershipStatus::Active,
            }
        }
    }

    pub fn get_expected_membership() -> MembershipRecord {
        MembershipRecord {
            membership_id: MEMBERSHIP_ID,
            user_id: MEMBER_ID,
            trainer_id: Some(7),
            gym_id: Some(3),
            plan_type: PlanCode::ThreeMonth,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 31),
            status: MembershipStatus::Active,
        }
    }

    #[test]
    fn should_deserialize_membership() {
        let json = r#"{"membershipId":101,"userId":12,"trainerId":7,"gymId":3,"planType":"3-month","startDate":"2024-01-01","endDate":"2024-03-31","status":"active"}"#;
        let membership: MembershipRecord = serde_json::from_str(json).unwrap();

        assert_eq!(get_expected_membership(), membership);
    }

    #[test]
    fn should_deserialize_membership_without_optional_fields() {
        let json = r#"{"membershipId":5,"userId":12,"planType":"daily","startDate":"2024-01-01"}"#;
        let membership: MembershipRecord = serde_json::from_str(json).unwrap();

        assert_eq!(MembershipRecord::new_test(5, 12, PlanCode::Daily), membership);
    }

    #[test]
    fn should_fail_to_deserialize_unknown_plan() {
        let json = r#"{"membershipId":5,"userId":12,"planType":"weekly","startDate":"2024-01-01"}"#;
        assert!(serde_json::from_str::<MembershipRecord>(json).is_err());
    }

    #[test]
    fn should_serialize_submission_with_null_references() {
        let submission = MembershipSubmission::new(
            MEMBER_ID,
            None,
            None,
            PlanCode::Yearly,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            MembershipStatus::Active,
        );

        assert_eq!(
            r#"{"userId":12,"trainerId":null,"gymId":null,"planType":"yearly","startDate":"2024-01-01","endDate":"2024-12-31","status":"active"}"#,
            serde_json::to_string(&submission).unwrap()
        );
    }

    #[parameterized(
        ids = {(1, 2), (2, 1), (1, 1)},
        expected_result = {Ordering::Less, Ordering::Greater, Ordering::Equal}
    )]
    fn should_sort_memberships_with_same_start_date(ids: (u32, u32), expected_result: Ordering) {
        let membership1 = MembershipRecord::new_test(ids.0, MEMBER_ID, PlanCode::Daily);
        let membership2 = MembershipRecord::new_test(ids.1, MEMBER_ID, PlanCode::Daily);
        assert_eq!(Some(expected_result), membership1.partial_cmp(&membership2));
    }
}
