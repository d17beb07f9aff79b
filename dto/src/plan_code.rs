use crate::error::DtoError;
use crate::error::DtoError::UnknownPlanCode;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Membership plans sold by the gyms.
/// Serialized with the values the backend stores.
#[derive(
    Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum PlanCode {
    #[serde(rename = "daily")]
    Daily,
    #[default]
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "3-month")]
    ThreeMonth,
    #[serde(rename = "yearly")]
    Yearly,
}

impl PlanCode {
    pub const ALL: [PlanCode; 4] = [
        PlanCode::Daily,
        PlanCode::Monthly,
        PlanCode::ThreeMonth,
        PlanCode::Yearly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanCode::Daily => "daily",
            PlanCode::Monthly => "monthly",
            PlanCode::ThreeMonth => "3-month",
            PlanCode::Yearly => "yearly",
        }
    }
}

impl Display for PlanCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlanCode {
    type Err = DtoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        PlanCode::ALL
            .into_iter()
            .find(|code| code.as_str() == value.trim())
            .ok_or_else(|| UnknownPlanCode(value.to_owned()))
    }
}
