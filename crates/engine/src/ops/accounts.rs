//! Account registration, login and the current-session pointer.

use crate::{Account, EngineError, ResultEngine};

use super::{Engine, normalize_required_name};

impl Engine {
    /// Register a new account and make it the current session.
    ///
    /// Usernames are unique and compared case-sensitively.
    pub fn register(
        &self,
        username: &str,
        credential: &str,
        display_name: &str,
    ) -> ResultEngine<Account> {
        let username = normalize_required_name(username, "username")?;
        let display_name = normalize_required_name(display_name, "display name")?;
        if credential.is_empty() {
            return Err(EngineError::InvalidInput(
                "credential must not be empty".to_string(),
            ));
        }

        let mut accounts = self.load_accounts()?;
        if accounts.iter().any(|account| account.username == username) {
            return Err(EngineError::DuplicateUsername(username));
        }

        let account = Account::new(username, credential.to_string(), display_name);
        accounts.push(account.clone());
        self.save_accounts(&accounts)?;
        self.save_session_id(&account.id)?;
        Ok(account)
    }

    /// Log into an existing account, making it the current session.
    ///
    /// Both fields must match exactly; a failed login leaves the current
    /// session untouched.
    pub fn login(&self, username: &str, credential: &str) -> ResultEngine<Account> {
        let accounts = self.load_accounts()?;
        let account = accounts
            .into_iter()
            .find(|account| account.username == username && account.credential == credential)
            .ok_or(EngineError::InvalidCredentials)?;

        self.save_session_id(&account.id)?;
        Ok(account)
    }

    /// Clear the current session. Idempotent.
    pub fn logout(&self) -> ResultEngine<()> {
        self.clear_session()
    }

    /// The account the current session points at, if any.
    ///
    /// Resolved against the accounts collection on every read so the
    /// session never serves a stale copy of the record.
    pub fn current_account(&self) -> ResultEngine<Option<Account>> {
        let Some(id) = self.load_session_id()? else {
            return Ok(None);
        };
        let accounts = self.load_accounts()?;
        Ok(accounts.into_iter().find(|account| account.id == id))
    }
}
