use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FormError {
    #[error("Not a valid non-negative number: {0}")]
    InvalidNumericInput(String),
    #[error("A member must be selected.")]
    MissingMember,
    #[error("A user must be selected.")]
    MissingUser,
    #[error("A membership must be selected.")]
    MissingMembership,
    #[error("Membership {membership_id} doesn't belong to user {user_id}.")]
    MembershipNotOwned { membership_id: u32, user_id: u32 },
    #[error("Amount must be greater than zero.")]
    NonPositiveAmount,
    #[error("A trainer must be selected.")]
    MissingTrainer,
    #[error("Unknown end date policy: {0}")]
    UnknownRecomputePolicy(String),
}
