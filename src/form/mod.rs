use crate::form::error::FormError;
use crate::form::error::FormError::UnknownRecomputePolicy;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub mod error;
pub mod input;
pub mod membership;
pub mod payment;
pub mod payroll;

/// What happens to a derived field the user edited by hand when its inputs change.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RecomputePolicy {
    /// The new derived value replaces the manual edit.
    #[default]
    AlwaysRecompute,
    /// Once edited by hand, the field is no longer derived.
    PreserveOverride,
}

impl Display for RecomputePolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RecomputePolicy::AlwaysRecompute => write!(f, "always-recompute"),
            RecomputePolicy::PreserveOverride => write!(f, "preserve-override"),
        }
    }
}

impl FromStr for RecomputePolicy {
    type Err = FormError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "always-recompute" => Ok(RecomputePolicy::AlwaysRecompute),
            "preserve-override" => Ok(RecomputePolicy::PreserveOverride),
            _ => Err(UnknownRecomputePolicy(value.to_owned())),
        }
    }
}

/// A pre-filled but editable value.
/// Remembers whether the value shown was computed or typed by the user.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DerivedField<T> {
    value: T,
    overridden: bool,
}

impl<T> DerivedField<T> {
    pub fn computed(value: T) -> Self {
        Self {
            value,
            overridden: false,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_overridden(&self) -> bool {
        self.overridden
    }

    pub fn override_with(&mut self, value: T) {
        self.value = value;
        self.overridden = true;
    }

    /// Store a freshly derived value.
    /// Returns false when the policy keeps the user's value instead.
    pub fn recompute(&mut self, value: T, policy: RecomputePolicy) -> bool {
        if self.overridden && policy == RecomputePolicy::PreserveOverride {
            return false;
        }

        self.value = value;
        self.overridden = false;
        true
    }
}
