use crate::form::RecomputePolicy;
use crate::tools::env_args::retrieve_parsed_arg_value;
use crate::tools::error::ToolsError;
use crate::tools::error::ToolsError::InvalidArgValue;
use derive_getters::Getters;
use std::time::Duration;

const END_DATE_POLICY_ARG: &str = "--end-date-policy";
const HOURS_LOOKUP_TIMEOUT_ARG: &str = "--hours-lookup-timeout";
const DEFAULT_HOURS_LOOKUP_TIMEOUT_SECONDS: u64 = 5;

#[derive(Debug, Getters, Clone, Copy, PartialEq, Eq)]
pub struct DerivationConfiguration {
    end_date_policy: RecomputePolicy,
    hours_lookup_timeout: Duration,
}

impl Default for DerivationConfiguration {
    fn default() -> Self {
        Self {
            end_date_policy: RecomputePolicy::default(),
            hours_lookup_timeout: Duration::from_secs(DEFAULT_HOURS_LOOKUP_TIMEOUT_SECONDS),
        }
    }
}

impl DerivationConfiguration {
    pub fn new(end_date_policy: RecomputePolicy, hours_lookup_timeout: Duration) -> Self {
        Self {
            end_date_policy,
            hours_lookup_timeout,
        }
    }

    /// Read `--end-date-policy` and `--hours-lookup-timeout` (in seconds) from the app args.
    pub fn from_args() -> Result<Self, ToolsError> {
        let end_date_policy =
            retrieve_parsed_arg_value(END_DATE_POLICY_ARG, RecomputePolicy::default())?;
        let timeout_seconds = retrieve_parsed_arg_value(
            HOURS_LOOKUP_TIMEOUT_ARG,
            DEFAULT_HOURS_LOOKUP_TIMEOUT_SECONDS,
        )?;
        if timeout_seconds == 0 {
            warn!("{HOURS_LOOKUP_TIMEOUT_ARG} must be at least one second");
            return Err(InvalidArgValue {
                arg: HOURS_LOOKUP_TIMEOUT_ARG.to_owned(),
                value: timeout_seconds.to_string(),
            });
        }

        let configuration =
            Self::new(end_date_policy, Duration::from_secs(timeout_seconds));
        debug!("Derivation configuration: {configuration:?}");
        Ok(configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::env_args::with_env_args;

    #[test]
    fn should_use_defaults_when_args_are_missing() {
        let configuration = with_env_args(vec![], DerivationConfiguration::from_args);
        assert_eq!(Ok(DerivationConfiguration::default()), configuration);
    }

    #[test]
    fn should_read_configuration_from_args() {
        let args = vec![
            format!("{END_DATE_POLICY_ARG}=preserve-override"),
            format!("{HOURS_LOOKUP_TIMEOUT_ARG}=2"),
        ];
        let configuration = with_env_args(args, DerivationConfiguration::from_args).unwrap();

        assert_eq!(
            &RecomputePolicy::PreserveOverride,
            configuration.end_date_policy()
        );
        assert_eq!(&Duration::from_secs(2), configuration.hours_lookup_timeout());
    }

    #[test]
    fn fail_when_policy_is_unknown() {
        let args = vec![format!("{END_DATE_POLICY_ARG}=sometimes")];
        let error = with_env_args(args, DerivationConfiguration::from_args).unwrap_err();

        assert_eq!(
            InvalidArgValue {
                arg: END_DATE_POLICY_ARG.to_owned(),
                value: "sometimes".to_owned()
            },
            error
        );
    }

    #[test]
    fn fail_when_timeout_is_not_a_number() {
        let args = vec![format!("{HOURS_LOOKUP_TIMEOUT_ARG}=-3")];
        let result = with_env_args(args, DerivationConfiguration::from_args);

        assert!(result.is_err());
    }

    #[test]
    fn fail_when_timeout_is_zero() {
        let args = vec![format!("{HOURS_LOOKUP_TIMEOUT_ARG}=0")];
        let error = with_env_args(args, DerivationConfiguration::from_args).unwrap_err();

        assert_eq!(
            InvalidArgValue {
                arg: HOURS_LOOKUP_TIMEOUT_ARG.to_owned(),
                value: "0".to_owned()
            },
            error
        );
    }
}
