//! Account type definitions
//!
//! Two shapes of the same account: [`WorkingAccount`] is what the edit form
//! works on, [`PersistedAccount`] is what goes into the key/value store.

use serde::{Deserialize, Serialize};

/// Separator between tags in the editable tag string
pub const TAG_SEPARATOR: char = ';';

/// Account type
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Local account, authenticates with a password
    #[default]
    Local,
    /// Directory account, never stores a password
    Ldap,
}

/// Validated field of a working account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountField {
    Tags,
    Login,
    Password,
}

/// Per-field validation messages
///
/// `None` means the field is currently valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountErrors {
    pub tags: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
}

impl AccountErrors {
    /// No field has a violation
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_none() && self.login.is_none() && self.password.is_none()
    }

    /// Message for a single field
    #[must_use]
    pub fn get(&self, field: AccountField) -> Option<&str> {
        match field {
            AccountField::Tags => self.tags.as_deref(),
            AccountField::Login => self.login.as_deref(),
            AccountField::Password => self.password.as_deref(),
        }
    }

    /// Overwrite the message of a single field, leaving the others untouched
    pub fn set(&mut self, field: AccountField, message: Option<String>) {
        match field {
            AccountField::Tags => self.tags = message,
            AccountField::Login => self.login = message,
            AccountField::Password => self.password = message,
        }
    }

    /// Take the message of `field` from `other`
    pub fn copy_field(&mut self, other: &Self, field: AccountField) {
        self.set(field, other.get(field).map(str::to_string));
    }
}

/// Edit-time account record
///
/// Lives only in memory; the stored form is [`PersistedAccount`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingAccount {
    /// Raw, semicolon-delimited tag text
    pub tags: String,
    pub account_type: AccountType,
    pub login: String,
    /// Only meaningful for local accounts; `None` for LDAP after a type switch
    pub password: Option<String>,
    /// UI-only reveal toggle, never persisted
    pub show_password: bool,
    pub errors: AccountErrors,
}

impl WorkingAccount {
    /// The empty local account appended by "add account"
    #[must_use]
    pub fn blank() -> Self {
        Self {
            tags: String::new(),
            account_type: AccountType::Local,
            login: String::new(),
            password: Some(String::new()),
            show_password: false,
            errors: AccountErrors::default(),
        }
    }
}

impl From<&PersistedAccount> for WorkingAccount {
    /// Loaded records start with empty errors; they are not validated on load.
    fn from(saved: &PersistedAccount) -> Self {
        let password = saved
            .password
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or_default()
            .to_string();

        Self {
            tags: join_tags(&saved.tags),
            account_type: saved.account_type,
            login: saved.login.clone(),
            password: Some(password),
            show_password: false,
            errors: AccountErrors::default(),
        }
    }
}

/// Single structured tag
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersistedTag {
    pub text: String,
}

/// Storage-time account record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersistedAccount {
    pub tags: Vec<PersistedTag>,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub login: String,
    /// Always `None` (JSON `null`) for LDAP accounts
    #[serde(default)]
    pub password: Option<String>,
}

impl From<&WorkingAccount> for PersistedAccount {
    fn from(account: &WorkingAccount) -> Self {
        let password = match account.account_type {
            AccountType::Local => account.password.clone(),
            AccountType::Ldap => None,
        };

        Self {
            tags: parse_tags(&account.tags),
            account_type: account.account_type,
            login: account.login.clone(),
            password,
        }
    }
}

/// Split raw tag text into trimmed, non-empty tags, keeping their order
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<PersistedTag> {
    raw.split(TAG_SEPARATOR)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(|tag| PersistedTag {
            text: tag.to_string(),
        })
        .collect()
}

/// Join structured tags back into editable text (no re-trimming)
#[must_use]
pub fn join_tags(tags: &[PersistedTag]) -> String {
    tags.iter()
        .map(|tag| tag.text.as_str())
        .collect::<Vec<_>>()
        .join(&TAG_SEPARATOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tags: &[PersistedTag]) -> Vec<&str> {
        tags.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn parse_tags_trims_and_drops_empty_segments() {
        let tags = parse_tags("  admin ;;ops;  ; dev  ;");
        assert_eq!(texts(&tags), vec!["admin", "ops", "dev"]);
    }

    #[test]
    fn parse_tags_empty_input() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" ; ;; ").is_empty());
    }

    #[test]
    fn join_tags_uses_bare_separator() {
        let tags = parse_tags("a ; b;c");
        assert_eq!(join_tags(&tags), "a;b;c");
        assert_eq!(join_tags(&[]), "");
    }

    #[test]
    fn persisted_from_local_keeps_password() {
        let mut account = WorkingAccount::blank();
        account.tags = "x; y".to_string();
        account.login = "root".to_string();
        account.password = Some("secret".to_string());

        let saved = PersistedAccount::from(&account);
        assert_eq!(texts(&saved.tags), vec!["x", "y"]);
        assert_eq!(saved.account_type, AccountType::Local);
        assert_eq!(saved.login, "root");
        assert_eq!(saved.password.as_deref(), Some("secret"));
    }

    #[test]
    fn persisted_from_ldap_drops_password() {
        let mut account = WorkingAccount::blank();
        account.account_type = AccountType::Ldap;
        account.password = Some("leftover".to_string());

        assert_eq!(PersistedAccount::from(&account).password, None);
    }

    #[test]
    fn working_from_persisted_defaults_password_to_empty() {
        let saved = PersistedAccount {
            tags: parse_tags("a;b"),
            account_type: AccountType::Ldap,
            login: "user".to_string(),
            password: None,
        };

        let account = WorkingAccount::from(&saved);
        assert_eq!(account.tags, "a;b");
        assert_eq!(account.account_type, AccountType::Ldap);
        assert_eq!(account.password.as_deref(), Some(""));
        assert!(!account.show_password);
        assert!(account.errors.is_empty());
    }

    #[test]
    fn persisted_json_shape() {
        let saved = PersistedAccount {
            tags: parse_tags("ops"),
            account_type: AccountType::Ldap,
            login: "ivan".to_string(),
            password: None,
        };

        let json = serde_json::to_value(&saved).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "tags": [{ "text": "ops" }],
                "type": "ldap",
                "login": "ivan",
                "password": null
            })
        );
    }

    #[test]
    fn ui_state_never_reaches_stored_json() {
        let mut account = WorkingAccount::blank();
        account.login = "root".to_string();
        account.show_password = true;
        account.errors.password = Some("required".to_string());

        let json = serde_json::to_value(PersistedAccount::from(&account)).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 4);
        assert!(json.get("showPassword").is_none());
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn errors_set_only_touches_one_field() {
        let mut errors = AccountErrors {
            login: Some("required".to_string()),
            ..AccountErrors::default()
        };
        errors.set(AccountField::Tags, Some("too long".to_string()));
        errors.set(AccountField::Login, None);

        assert_eq!(errors.get(AccountField::Tags), Some("too long"));
        assert_eq!(errors.get(AccountField::Login), None);
        assert!(!errors.is_empty());
    }
}
