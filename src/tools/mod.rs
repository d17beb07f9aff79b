use diacritics::remove_diacritics;
use std::fmt::Debug;

pub mod env_args;
pub mod error;
pub mod web;

pub fn log_message<E: Debug>(message: &str) -> impl FnOnce(E) {
    move |e| error!("{message}\n{e:#?}")
}

pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}

/// Lowercase, trim and strip accents, so that "Élodie " and "elodie" compare equal.
pub fn normalize(value: &str) -> String {
    remove_diacritics(value.trim()).to_lowercase()
}
