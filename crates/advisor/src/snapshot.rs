//! The bounded financial snapshot forwarded to the advice service.
//!
//! Amounts cross into major-unit strings here; this is the presentation
//! boundary of the fixed-point money kept by the engine.

use engine::{Direction, LedgerEntry, MoneyCents};
use serde::Serialize;

/// Upper bound on how many pending entries the snapshot samples.
pub const SAMPLE_LIMIT: usize = 5;

/// One sampled pending entry.
#[derive(Clone, Debug, Serialize)]
pub struct SampledEntry {
    pub direction: Direction,
    pub total: String,
    pub paid: String,
    pub remaining: String,
    pub currency: String,
    pub counterparty: String,
}

/// Aggregate totals plus a capped sample of pending entries.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    pub display_name: String,
    pub pending_count: usize,
    pub total_debt_remaining: String,
    pub total_credit_remaining: String,
    pub sample: Vec<SampledEntry>,
}

impl Snapshot {
    /// Collect the advice inputs from the given entries.
    ///
    /// Only pending entries count. Totals add raw amounts across currency
    /// labels; the prompt tells the service as much.
    #[must_use]
    pub fn collect(entries: &[LedgerEntry], display_name: &str) -> Self {
        let pending: Vec<&LedgerEntry> =
            entries.iter().filter(|entry| entry.is_pending()).collect();

        let mut total_debt = MoneyCents::ZERO;
        let mut total_credit = MoneyCents::ZERO;
        for entry in &pending {
            match entry.direction {
                Direction::Credit => total_credit += entry.remaining(),
                Direction::Debt => total_debt += entry.remaining(),
            }
        }

        let sample = pending
            .iter()
            .take(SAMPLE_LIMIT)
            .map(|entry| SampledEntry {
                direction: entry.direction,
                total: entry.amount.to_string(),
                paid: entry.paid_amount.to_string(),
                remaining: entry.remaining().to_string(),
                currency: entry.currency.clone(),
                counterparty: entry.counterparty.clone(),
            })
            .collect();

        Self {
            display_name: display_name.to_string(),
            pending_count: pending.len(),
            total_debt_remaining: total_debt.to_string(),
            total_credit_remaining: total_credit.to_string(),
            sample,
        }
    }

    /// Render the prompt forwarded to the text-generation service.
    #[must_use]
    pub fn prompt(&self) -> String {
        let sample =
            serde_json::to_string_pretty(&self.sample).unwrap_or_else(|_| "[]".to_string());

        format!(
            "You are the financial advisor of a personal debt ledger. \
             The user's name is {name}.\n\
             \n\
             Current position (remaining balances, summed across currencies \
             without conversion):\n\
             - total remaining debt they owe: {debt}\n\
             - total remaining credit owed to them: {credit}\n\
             - pending entries: {count}\n\
             \n\
             A sample of the pending entries, with currencies and partial \
             payments:\n\
             {sample}\n\
             \n\
             Please:\n\
             1. Give a quick summary of their position.\n\
             2. If any debts are partially paid, encourage finishing them off.\n\
             3. Suggest one practical tip for handling the mixed currencies, \
             if there are any.\n\
             \n\
             Keep the answer short and useful, under 200 words.\n",
            name = self.display_name,
            debt = self.total_debt_remaining,
            credit = self.total_credit_remaining,
            count = self.pending_count,
            sample = sample,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{Engine, EntryStatus, MemoryStore, NewEntryCmd};

    fn engine_with_store() -> Engine {
        Engine::builder()
            .store(Box::new(MemoryStore::new()))
            .build()
            .unwrap()
    }

    #[test]
    fn sample_is_capped_but_count_is_not() {
        let engine = engine_with_store();
        let account = engine.register("alice", "pw", "Alice").unwrap();
        for i in 0..8 {
            engine
                .add_entry(NewEntryCmd::new(
                    &account.id,
                    Direction::Debt,
                    MoneyCents::new(10_00 + i),
                    "SAR",
                    format!("Person {i}"),
                ))
                .unwrap();
        }

        let entries = engine.list_entries(&account.id).unwrap();
        let snapshot = Snapshot::collect(&entries, "Alice");
        assert_eq!(snapshot.pending_count, 8);
        assert_eq!(snapshot.sample.len(), SAMPLE_LIMIT);
    }

    #[test]
    fn totals_skip_settled_entries() {
        let engine = engine_with_store();
        let account = engine.register("alice", "pw", "Alice").unwrap();

        let settled = engine
            .add_entry(NewEntryCmd::new(
                &account.id,
                Direction::Credit,
                MoneyCents::new(100_00),
                "SAR",
                "Ahmed",
            ))
            .unwrap();
        engine
            .apply_payment(&settled.id, MoneyCents::new(100_00))
            .unwrap();

        let partial = engine
            .add_entry(NewEntryCmd::new(
                &account.id,
                Direction::Debt,
                MoneyCents::new(50_00),
                "USD",
                "Sara",
            ))
            .unwrap();
        engine
            .apply_payment(&partial.id, MoneyCents::new(20_00))
            .unwrap();

        let entries = engine.list_entries(&account.id).unwrap();
        assert!(entries.iter().any(|e| e.status == EntryStatus::Settled));

        let snapshot = Snapshot::collect(&entries, "Alice");
        assert_eq!(snapshot.pending_count, 1);
        assert_eq!(snapshot.total_credit_remaining, "0.00");
        assert_eq!(snapshot.total_debt_remaining, "30.00");
        assert_eq!(snapshot.sample.len(), 1);
        assert_eq!(snapshot.sample[0].remaining, "30.00");
    }

    #[test]
    fn prompt_carries_name_and_bounds() {
        let snapshot = Snapshot::collect(&[], "Alice");
        let prompt = snapshot.prompt();
        assert!(prompt.contains("Alice"));
        assert!(prompt.contains("under 200 words"));
        assert!(prompt.contains("pending entries: 0"));
    }
}
