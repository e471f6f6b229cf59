//! Payment application and the administrative status override.

use std::cmp;

use crate::{EngineError, EntryStatus, LedgerEntry, MoneyCents, ResultEngine};

use super::Engine;

impl Engine {
    /// Apply a partial or full payment to an entry.
    ///
    /// The cumulative paid amount is clamped at the face amount: an
    /// overpayment settles the entry and the excess is discarded, never
    /// recorded. Settled entries take no further payments.
    pub fn apply_payment(&self, entry_id: &str, amount: MoneyCents) -> ResultEngine<LedgerEntry> {
        if !amount.is_positive() {
            return Err(EngineError::InvalidPayment(
                "payment must be positive".to_string(),
            ));
        }

        let mut entries = self.load_entries()?;
        let entry = entries
            .iter_mut()
            .find(|entry| entry.id == entry_id)
            .ok_or_else(|| EngineError::EntryNotFound(entry_id.to_string()))?;

        if entry.status == EntryStatus::Settled {
            return Err(EngineError::InvalidPayment(
                "entry is already settled".to_string(),
            ));
        }

        entry.paid_amount = cmp::min(entry.paid_amount + amount, entry.amount);
        if entry.paid_amount >= entry.amount {
            entry.status = EntryStatus::Settled;
        }

        let updated = entry.clone();
        self.save_entries(&entries)?;
        Ok(updated)
    }

    /// Force an entry's settlement status.
    ///
    /// Forcing `Settled` also forces the paid amount up to the face amount.
    /// Forcing `Pending` keeps the paid amount as is: a reopened entry may
    /// stay partially paid, so "pending" does not imply "nothing paid yet"
    /// after this call.
    pub fn set_status(&self, entry_id: &str, status: EntryStatus) -> ResultEngine<LedgerEntry> {
        let mut entries = self.load_entries()?;
        let entry = entries
            .iter_mut()
            .find(|entry| entry.id == entry_id)
            .ok_or_else(|| EngineError::EntryNotFound(entry_id.to_string()))?;

        entry.status = status;
        if status == EntryStatus::Settled {
            entry.paid_amount = entry.amount;
        }

        let updated = entry.clone();
        self.save_entries(&entries)?;
        Ok(updated)
    }
}
