//! Core ledger engine.
//!
//! Tracks informal debts and credits between one account holder and named
//! counterparties: entry creation, partial payment application, settlement
//! status and balance aggregation. All state lives behind an injected
//! [`RecordStore`], so the same engine runs against an in-memory fake in
//! tests and a file-backed store in an application.

pub use account::Account;
pub use commands::NewEntryCmd;
pub use entry::{Direction, EntryStatus, LedgerEntry};
pub use error::EngineError;
pub use money::MoneyCents;
pub use ops::{CounterpartyDetail, CounterpartyTotals, Engine, EngineBuilder, Summary};
pub use store::{Collection, JsonFileStore, MemoryStore, RecordStore, StoreError};

mod account;
mod commands;
mod entry;
mod error;
mod money;
mod ops;
mod store;

type ResultEngine<T> = Result<T, EngineError>;
