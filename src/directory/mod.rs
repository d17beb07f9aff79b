use crate::tools::normalize;
use derive_getters::Getters;
use dto::gym::Gym;
use dto::membership::MembershipRecord;
use dto::trainer::Trainer;
use dto::user::User;
use serde::Serialize;
use std::collections::BTreeMap;

const UNKNOWN_USER_LABEL: &str = "Unknown";
const UNKNOWN_TRAINER_USER_LABEL: &str = "Unknown Trainer";
const MISSING_TRAINER_LABEL: &str = "Trainer not found";

/// An entry of a selection list.
#[derive(Debug, Getters, Serialize, Clone, PartialEq, Eq)]
pub struct SelectOption {
    value: u32,
    label: String,
}

impl SelectOption {
    pub fn new(value: u32, label: String) -> Self {
        Self { value, label }
    }
}

/// Users, trainers, gyms and memberships loaded by the console,
/// indexed by id to resolve the labels forms display.
#[derive(Debug, Default, Clone)]
pub struct Directory {
    users: BTreeMap<u32, User>,
    trainers: BTreeMap<u32, Trainer>,
    gyms: BTreeMap<u32, Gym>,
    memberships: BTreeMap<u32, MembershipRecord>,
}

impl Directory {
    pub fn new(
        users: Vec<User>,
        trainers: Vec<Trainer>,
        gyms: Vec<Gym>,
        memberships: Vec<MembershipRecord>,
    ) -> Self {
        Self {
            users: index_by(users, |user| *user.user_id()),
            trainers: index_by(trainers, |trainer| *trainer.trainer_id()),
            gyms: index_by(gyms, |gym| *gym.gym_id()),
            memberships: index_by(memberships, |membership| *membership.membership_id()),
        }
    }

    pub fn user(&self, user_id: u32) -> Option<&User> {
        self.users.get(&user_id)
    }

    pub fn trainer(&self, trainer_id: u32) -> Option<&Trainer> {
        self.trainers.get(&trainer_id)
    }

    pub fn membership(&self, membership_id: u32) -> Option<&MembershipRecord> {
        self.memberships.get(&membership_id)
    }

    pub fn gym_name(&self, gym_id: u32) -> Option<&str> {
        self.gyms.get(&gym_id).map(|gym| gym.name().as_str())
    }

    /// Every user, labelled `#<id> - <first name> <last name>`.
    pub fn member_options(&self) -> Vec<SelectOption> {
        self.users
            .values()
            .map(|user| {
                SelectOption::new(
                    *user.user_id(),
                    format!("#{} - {}", user.user_id(), user.full_name()),
                )
            })
            .collect()
    }

    pub fn trainer_users(&self) -> Vec<&User> {
        self.users.values().filter(|user| user.is_trainer()).collect()
    }

    /// Every trainer, labelled with the full name of its user.
    pub fn trainer_options(&self) -> Vec<SelectOption> {
        self.trainers
            .values()
            .map(|trainer| {
                let label = self
                    .user(*trainer.user_id())
                    .map(User::full_name)
                    .unwrap_or_else(|| UNKNOWN_USER_LABEL.to_owned());
                SelectOption::new(*trainer.trainer_id(), label)
            })
            .collect()
    }

    pub fn trainer_name(&self, trainer_id: u32) -> String {
        match self.trainer(trainer_id) {
            None => MISSING_TRAINER_LABEL.to_owned(),
            Some(trainer) => self
                .user(*trainer.user_id())
                .map(User::full_name)
                .unwrap_or_else(|| UNKNOWN_TRAINER_USER_LABEL.to_owned()),
        }
    }

    /// Memberships owned by a user, oldest first.
    pub fn memberships_for_user(&self, user_id: u32) -> Vec<&MembershipRecord> {
        let mut memberships: Vec<&MembershipRecord> = self
            .memberships
            .values()
            .filter(|membership| *membership.user_id() == user_id)
            .collect();
        memberships.sort();
        memberships
    }

    /// Memberships owned by a user, labelled `#<id> - <plan> (<start> -> <end>)`.
    pub fn membership_options_for_user(&self, user_id: u32) -> Vec<SelectOption> {
        self.memberships_for_user(user_id)
            .into_iter()
            .map(|membership| {
                let end_date = membership
                    .end_date()
                    .map(|end_date| end_date.to_string())
                    .unwrap_or_else(|| "-".to_owned());
                SelectOption::new(
                    *membership.membership_id(),
                    format!(
                        "#{} - {} ({} -> {end_date})",
                        membership.membership_id(),
                        membership.plan_type(),
                        membership.start_date()
                    ),
                )
            })
            .collect()
    }
}

/// Options whose label contains the query, ignoring case and accents.
pub fn filter_options<'a>(options: &'a [SelectOption], query: &str) -> Vec<&'a SelectOption> {
    let query = normalize(query);
    options
        .iter()
        .filter(|option| query.is_empty() || normalize(option.label()).contains(&query))
        .collect()
}

fn index_by<T, F>(values: Vec<T>, key: F) -> BTreeMap<u32, T>
where
    F: Fn(&T) -> u32,
{
    values
        .into_iter()
        .map(|value| (key(&value), value))
        .collect()
}
