//! The module contains the `LedgerEntry` type, a single recorded debt or
//! credit between the account holder and a named counterparty.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::MoneyCents;

/// Which way an obligation runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The counterparty owes the account holder.
    Credit,
    /// The account holder owes the counterparty.
    Debt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Credit => f.write_str("credit"),
            Direction::Debt => f.write_str("debt"),
        }
    }
}

/// Settlement state of an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Pending,
    Settled,
}

/// A recorded obligation with its cumulative payment state.
///
/// Immutable except for `paid_amount` and `status`, which only move through
/// payment application and the status override. The counterparty name is a
/// plain grouping key, not a reference to another account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: String,
    pub owner_account_id: String,
    pub direction: Direction,
    pub amount: MoneyCents,
    pub paid_amount: MoneyCents,
    pub currency: String,
    pub counterparty: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub status: EntryStatus,
}

impl LedgerEntry {
    pub(crate) fn new(
        owner_account_id: String,
        direction: Direction,
        amount: MoneyCents,
        currency: String,
        counterparty: String,
        description: String,
        due_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            owner_account_id,
            direction,
            amount,
            paid_amount: MoneyCents::ZERO,
            currency,
            counterparty,
            description,
            created_at: Utc::now(),
            due_date,
            status: EntryStatus::Pending,
        }
    }

    /// Face amount minus cumulative payments, floored at zero.
    #[must_use]
    pub fn remaining(&self) -> MoneyCents {
        (self.amount - self.paid_amount).max(MoneyCents::ZERO)
    }

    /// Returns `true` while the entry still counts toward active totals.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == EntryStatus::Pending
    }
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.direction, self.amount, self.currency, self.counterparty
        )
    }
}
