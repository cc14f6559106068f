//! Session account store
//!
//! Keeps the editable account list and its storage projection together and
//! writes the projection through to the key/value store after every
//! mutation. Storage failures are logged and swallowed: the in-memory state
//! stays as the user left it.

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::validation::validate_account;
use crate::services::StoreContext;
use crate::types::{
    AccountErrors, AccountField, AccountType, PersistedAccount, WorkingAccount,
};

/// Session-scoped account store
pub struct AccountsStore {
    ctx: Arc<StoreContext>,
    /// Editable records, in display order
    accounts: Vec<WorkingAccount>,
    /// Storage projection of `accounts`, index-aligned
    saved_accounts: Vec<PersistedAccount>,
}

impl AccountsStore {
    /// Create the store and load whatever the key/value store holds
    #[must_use]
    pub fn new(ctx: Arc<StoreContext>) -> Self {
        let mut store = Self {
            ctx,
            accounts: Vec::new(),
            saved_accounts: Vec::new(),
        };
        store.load_from_storage();
        store
    }

    // ===== Read access =====

    #[must_use]
    pub fn context(&self) -> &Arc<StoreContext> {
        &self.ctx
    }

    #[must_use]
    pub fn accounts(&self) -> &[WorkingAccount] {
        &self.accounts
    }

    #[must_use]
    pub fn saved_accounts(&self) -> &[PersistedAccount] {
        &self.saved_accounts
    }

    #[must_use]
    pub fn account(&self, index: usize) -> Option<&WorkingAccount> {
        self.accounts.get(index)
    }

    #[must_use]
    pub fn accounts_count(&self) -> usize {
        self.accounts.len()
    }

    /// Every account passes a fresh validation (stored `errors` are ignored)
    #[must_use]
    pub fn has_valid_accounts(&self) -> bool {
        self.accounts
            .iter()
            .all(|account| validate_account(account).is_empty())
    }

    /// Validate an account without touching the store
    #[must_use]
    pub fn validate_account(account: &WorkingAccount) -> AccountErrors {
        validate_account(account)
    }

    // ===== Persistence =====

    /// Replace both lists with the stored accounts
    ///
    /// Absent or empty value leaves the lists alone, as does a read or parse
    /// failure (logged). Loaded records are not validated.
    pub fn load_from_storage(&mut self) {
        match self.read_saved_accounts() {
            Ok(Some(saved)) => {
                self.accounts = saved.iter().map(WorkingAccount::from).collect();
                self.saved_accounts = saved;
                log::info!("Loaded {} account(s) from storage", self.accounts.len());
            }
            Ok(None) => {
                log::debug!("No stored accounts under '{}'", self.ctx.storage_key());
            }
            Err(e) => e.log("Failed to load accounts from storage"),
        }
    }

    /// Write the persisted list as-is; failures are logged, never rolled back
    pub fn save_to_storage(&self) {
        if let Err(e) = self.write_saved_accounts() {
            e.log("Failed to save accounts to storage");
        }
    }

    /// Rebuild the persisted list from the working list, then write it
    pub fn save_accounts(&mut self) {
        self.saved_accounts = self.accounts.iter().map(PersistedAccount::from).collect();
        self.save_to_storage();
    }

    fn read_saved_accounts(&self) -> CoreResult<Option<Vec<PersistedAccount>>> {
        let raw = self
            .ctx
            .key_value_store()
            .get(self.ctx.storage_key())?
            .filter(|raw| !raw.is_empty());

        let Some(raw) = raw else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn write_saved_accounts(&self) -> CoreResult<()> {
        let json = serde_json::to_string(&self.saved_accounts)?;
        self.ctx
            .key_value_store()
            .set(self.ctx.storage_key(), &json)?;
        log::debug!("Saved {} account(s) to storage", self.saved_accounts.len());
        Ok(())
    }

    // ===== List mutations =====

    /// Append an empty local account, validated immediately
    pub fn add_account(&mut self) {
        let mut account = WorkingAccount::blank();
        account.errors = validate_account(&account);
        self.accounts.push(account);
        self.save_accounts();
    }

    /// Remove the account at `index` from both lists and write the persisted list
    ///
    /// Each list is spliced on its own; the persisted list is not rebuilt first.
    /// The write happens even when `index` is out of range.
    pub fn delete_account(&mut self, index: usize) {
        if index < self.accounts.len() {
            self.accounts.remove(index);
        }
        if index < self.saved_accounts.len() {
            self.saved_accounts.remove(index);
        }
        self.save_to_storage();
    }

    /// Flip the password reveal toggle (UI-only, not persisted)
    pub fn toggle_password(&mut self, index: usize) {
        if let Some(account) = self.accounts.get_mut(index) {
            account.show_password = !account.show_password;
        }
    }

    // ===== Field edits =====

    pub fn on_tags_change(&mut self, index: usize, value: impl Into<String>) {
        let value = value.into();
        self.update_field(index, AccountField::Tags, |account| account.tags = value);
    }

    pub fn on_login_change(&mut self, index: usize, value: impl Into<String>) {
        let value = value.into();
        self.update_field(index, AccountField::Login, |account| account.login = value);
    }

    pub fn on_password_change(&mut self, index: usize, value: impl Into<String>) {
        let value = value.into();
        self.update_field(index, AccountField::Password, |account| {
            account.password = Some(value);
        });
    }

    /// Switch account type
    ///
    /// LDAP drops the password; local starts over with an empty one. All
    /// three errors are recomputed.
    pub fn on_type_change(&mut self, index: usize, value: AccountType) {
        let Some(account) = self.accounts.get_mut(index) else {
            return;
        };

        account.account_type = value;
        match value {
            AccountType::Ldap => {
                account.password = None;
                account.errors.password = None;
            }
            AccountType::Local => account.password = Some(String::new()),
        }
        account.errors = validate_account(account);

        self.save_accounts();
    }

    /// Apply an edit, refresh only `field`'s error, then persist
    fn update_field(
        &mut self,
        index: usize,
        field: AccountField,
        apply: impl FnOnce(&mut WorkingAccount),
    ) {
        let Some(account) = self.accounts.get_mut(index) else {
            return;
        };

        apply(account);
        let fresh = validate_account(account);
        account.errors.copy_field(&fresh, field);

        self.save_accounts();
    }
}
