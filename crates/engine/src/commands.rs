//! Command structs for engine operations.
//!
//! These types group parameters for write operations, keeping call sites
//! readable and avoiding long argument lists.

use chrono::{DateTime, Utc};

use crate::{Direction, MoneyCents};

/// Create a ledger entry.
#[derive(Clone, Debug)]
pub struct NewEntryCmd {
    pub account_id: String,
    pub direction: Direction,
    pub amount: MoneyCents,
    pub currency: String,
    pub counterparty: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

impl NewEntryCmd {
    #[must_use]
    pub fn new(
        account_id: impl Into<String>,
        direction: Direction,
        amount: MoneyCents,
        currency: impl Into<String>,
        counterparty: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            direction,
            amount,
            currency: currency.into(),
            counterparty: counterparty.into(),
            description: None,
            due_date: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}
