use crate::tools::env_args::retrieve_arg_value;
use derive_getters::Getters;

const API_URL_ARG: &str = "--api-url";
const API_TOKEN_ARG: &str = "--api-token";
const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Where the backend answering worked hours lives, and how to authenticate to it.
#[derive(Debug, Getters, Clone, PartialEq)]
pub struct Configuration {
    base_url: String,
    token: Option<String>,
}

impl Configuration {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            token,
        }
    }

    /// Read `--api-url` and `--api-token` from the app args.
    pub fn from_args() -> Self {
        let base_url = retrieve_arg_value(API_URL_ARG).unwrap_or(DEFAULT_API_URL.to_owned());
        let token = retrieve_arg_value(API_TOKEN_ARG).filter(|token| !token.trim().is_empty());
        Self::new(base_url, token)
    }
}
