use derive_getters::Getters;
use serde::{Deserialize, Serialize};

const TRAINER_ROLE_ID: u32 = 3;
const TRAINER_ROLE_NAME: &str = "TRAINER";

/// A user of the gyms, as listed by the backend.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    user_id: u32,
    first_name: String,
    last_name: String,
    #[serde(default)]
    role_id: Option<u32>,
    #[serde(default)]
    role_name: Option<String>,
}

impl User {
    pub fn new(
        user_id: u32,
        first_name: String,
        last_name: String,
        role_id: Option<u32>,
        role_name: Option<String>,
    ) -> Self {
        Self {
            user_id,
            first_name,
            last_name,
            role_id,
            role_name,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }

    /// Trainers are recognized either by their role id or their role name.
    pub fn is_trainer(&self) -> bool {
        self.role_id == Some(TRAINER_ROLE_ID) || self.role_name.as_deref() == Some(TRAINER_ROLE_NAME)
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    pub const MEMBER_ID: u32 = 12;
    pub const TRAINER_USER_ID: u32 = 40;

    pub fn get_member() -> User {
        User::new(
            MEMBER_ID,
            "Jon".to_owned(),
            "Doe".to_owned(),
            Some(2),
            Some("MEMBER".to_owned()),
        )
    }

    pub fn get_trainer_user() -> User {
        User::new(
            TRAINER_USER_ID,
            "Alice".to_owned(),
            "Smith".to_owned(),
            Some(TRAINER_ROLE_ID),
            None,
        )
    }

    #[parameterized(
        role_id = {Some(3), None, Some(2), None, Some(1)},
        role_name = {None, Some("TRAINER"), Some("MEMBER"), None, Some("trainer")},
        expected_result = {true, true, false, false, false}
    )]
    fn should_recognize_trainer(
        role_id: Option<u32>,
        role_name: Option<&str>,
        expected_result: bool,
    ) {
        let user = User::new(
            1,
            "".to_owned(),
            "".to_owned(),
            role_id,
            role_name.map(str::to_owned),
        );
        assert_eq!(expected_result, user.is_trainer());
    }

    #[test]
    fn should_build_full_name() {
        assert_eq!("Jon Doe", get_member().full_name());

        let no_last_name = User::new(1, "Jon".to_owned(), "".to_owned(), None, None);
        assert_eq!("Jon", no_last_name.full_name());
    }

    #[test]
    fn should_deserialize_user_without_role() {
        let json = r#"{"userId":5,"firstName":"Jane","lastName":"Roe"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(
            User::new(5, "Jane".to_owned(), "Roe".to_owned(), None, None),
            user
        );
    }
}
