use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Gym {
    gym_id: u32,
    name: String,
}

impl Gym {
    pub fn new(gym_id: u32, name: String) -> Self {
        Self { gym_id, name }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub const GYM_ID: u32 = 3;

    pub fn get_gym() -> Gym {
        Gym::new(GYM_ID, "Downtown Gym".to_owned())
    }
}
