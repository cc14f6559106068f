//! Account field validation
//!
//! Static per-field rules. Violations come back as messages for the form,
//! they never block a mutation.

use crate::types::{AccountErrors, AccountType, WorkingAccount};

pub const MAX_TAGS_LENGTH: usize = 50;
pub const MAX_LOGIN_LENGTH: usize = 100;
pub const MAX_PASSWORD_LENGTH: usize = 100;

pub const TAGS_TOO_LONG: &str = "Метки не должны превышать 50 символов";
pub const LOGIN_REQUIRED: &str = "Логин обязателен для заполнения";
pub const LOGIN_TOO_LONG: &str = "Логин не должен превышать 100 символов";
pub const PASSWORD_REQUIRED: &str = "Пароль обязателен для заполнения";
pub const PASSWORD_TOO_LONG: &str = "Пароль не должен превышать 100 символов";

/// Validate a working account
///
/// Pure: the input is only read. The result contains only violated fields.
#[must_use]
pub fn validate_account(account: &WorkingAccount) -> AccountErrors {
    let mut errors = AccountErrors::default();

    if char_len(&account.tags) > MAX_TAGS_LENGTH {
        errors.tags = Some(TAGS_TOO_LONG.to_string());
    }

    if account.login.trim().is_empty() {
        errors.login = Some(LOGIN_REQUIRED.to_string());
    } else if char_len(&account.login) > MAX_LOGIN_LENGTH {
        errors.login = Some(LOGIN_TOO_LONG.to_string());
    }

    // LDAP accounts never carry a password, whatever the field still holds
    if account.account_type == AccountType::Local {
        match account.password.as_deref() {
            None => errors.password = Some(PASSWORD_REQUIRED.to_string()),
            Some(password) if password.trim().is_empty() => {
                errors.password = Some(PASSWORD_REQUIRED.to_string());
            }
            Some(password) if char_len(password) > MAX_PASSWORD_LENGTH => {
                errors.password = Some(PASSWORD_TOO_LONG.to_string());
            }
            Some(_) => {}
        }
    }

    errors
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}
