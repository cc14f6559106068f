//! Type definition module

mod account;

pub use account::{
    join_tags, parse_tags, AccountErrors, AccountField, AccountType, PersistedAccount,
    PersistedTag, WorkingAccount, TAG_SEPARATOR,
};
