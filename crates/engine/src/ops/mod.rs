use serde::{Serialize, de::DeserializeOwned};

use crate::{
    Account, EngineError, LedgerEntry, ResultEngine,
    store::{Collection, MemoryStore, RecordStore, StoreError},
};

mod accounts;
mod balances;
mod entries;
mod payments;

pub use balances::{CounterpartyDetail, CounterpartyTotals, Summary};

/// The engine owning every account and ledger operation.
///
/// All state lives behind the injected [`RecordStore`]; each operation is a
/// synchronous read-modify-write cycle against it. The engine assumes a
/// single logical actor per store.
#[derive(Debug)]
pub struct Engine {
    store: Box<dyn RecordStore>,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    fn load<T: DeserializeOwned>(&self, collection: Collection) -> ResultEngine<Vec<T>> {
        match self.store.read(collection)? {
            Some(payload) => {
                let records = serde_json::from_str(&payload).map_err(StoreError::Corrupt)?;
                Ok(records)
            }
            None => Ok(Vec::new()),
        }
    }

    fn save<T: Serialize>(&self, collection: Collection, records: &[T]) -> ResultEngine<()> {
        let payload = serde_json::to_string(records).map_err(StoreError::Corrupt)?;
        self.store.write(collection, &payload)?;
        Ok(())
    }

    fn load_accounts(&self) -> ResultEngine<Vec<Account>> {
        self.load(Collection::Accounts)
    }

    fn save_accounts(&self, accounts: &[Account]) -> ResultEngine<()> {
        self.save(Collection::Accounts, accounts)
    }

    fn load_entries(&self) -> ResultEngine<Vec<LedgerEntry>> {
        self.load(Collection::Entries)
    }

    fn save_entries(&self, entries: &[LedgerEntry]) -> ResultEngine<()> {
        self.save(Collection::Entries, entries)
    }

    // The session holds only the account id; the record is resolved against
    // the accounts collection on read.
    fn load_session_id(&self) -> ResultEngine<Option<String>> {
        match self.store.read(Collection::Session)? {
            Some(payload) => {
                let id = serde_json::from_str(&payload).map_err(StoreError::Corrupt)?;
                Ok(Some(id))
            }
            None => Ok(None),
        }
    }

    fn save_session_id(&self, account_id: &str) -> ResultEngine<()> {
        let payload = serde_json::to_string(account_id).map_err(StoreError::Corrupt)?;
        self.store.write(Collection::Session, &payload)?;
        Ok(())
    }

    fn clear_session(&self) -> ResultEngine<()> {
        self.store.delete(Collection::Session)?;
        Ok(())
    }
}

fn normalize_required_name(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidInput(format!(
            "{label} must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    store: Option<Box<dyn RecordStore>>,
}

impl EngineBuilder {
    /// Pass the record store backing the engine.
    #[must_use]
    pub fn store(mut self, store: Box<dyn RecordStore>) -> EngineBuilder {
        self.store = Some(store);
        self
    }

    /// Construct `Engine`.
    ///
    /// Falls back to a throwaway in-memory store when none was injected.
    pub fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            store: self
                .store
                .unwrap_or_else(|| Box::new(MemoryStore::new())),
        })
    }
}
