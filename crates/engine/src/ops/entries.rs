//! Ledger entry lifecycle: listing, creation, deletion.

use crate::{EngineError, LedgerEntry, NewEntryCmd, ResultEngine};

use super::{Engine, normalize_optional_text, normalize_required_name};

impl Engine {
    /// All entries owned by `account_id`, newest first.
    ///
    /// Recomputed from the store on every call.
    pub fn list_entries(&self, account_id: &str) -> ResultEngine<Vec<LedgerEntry>> {
        let mut entries: Vec<LedgerEntry> = self
            .load_entries()?
            .into_iter()
            .filter(|entry| entry.owner_account_id == account_id)
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    /// Record a new debt or credit entry.
    ///
    /// The entry starts unpaid and pending; the face amount must be
    /// positive and counterparty and currency must be non-empty.
    pub fn add_entry(&self, cmd: NewEntryCmd) -> ResultEngine<LedgerEntry> {
        if !cmd.amount.is_positive() {
            return Err(EngineError::InvalidInput(
                "amount must be positive".to_string(),
            ));
        }
        let counterparty = normalize_required_name(&cmd.counterparty, "counterparty")?;
        let currency = normalize_required_name(&cmd.currency, "currency")?;
        let description = normalize_optional_text(cmd.description.as_deref()).unwrap_or_default();

        let entry = LedgerEntry::new(
            cmd.account_id,
            cmd.direction,
            cmd.amount,
            currency,
            counterparty,
            description,
            cmd.due_date,
        );

        let mut entries = self.load_entries()?;
        entries.push(entry.clone());
        self.save_entries(&entries)?;
        Ok(entry)
    }

    /// Remove an entry. Deleting an unknown id is a deliberate no-op.
    pub fn delete_entry(&self, entry_id: &str) -> ResultEngine<()> {
        let mut entries = self.load_entries()?;
        entries.retain(|entry| entry.id != entry_id);
        self.save_entries(&entries)?;
        Ok(())
    }
}
