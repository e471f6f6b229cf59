//! Balance aggregation: global totals, per-counterparty totals and the
//! per-counterparty detail view.
//!
//! Only pending entries contribute to totals; settled entries count zero.
//! Totals add raw minor-unit amounts across currency labels without
//! conversion, a documented limitation of the bookkeeping model.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Direction, LedgerEntry, MoneyCents, ResultEngine};

use super::Engine;

/// Global pending totals for one account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_credit: MoneyCents,
    pub total_debt: MoneyCents,
    pub net: MoneyCents,
}

/// Pending totals for a single counterparty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterpartyTotals {
    pub counterparty: String,
    pub credit: MoneyCents,
    pub debt: MoneyCents,
    pub net: MoneyCents,
}

/// Every entry for one counterparty plus its pending totals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterpartyDetail {
    pub entries: Vec<LedgerEntry>,
    pub total_credit: MoneyCents,
    pub total_debt: MoneyCents,
    pub net: MoneyCents,
}

fn accumulate(credit: &mut MoneyCents, debt: &mut MoneyCents, entry: &LedgerEntry) {
    if !entry.is_pending() {
        return;
    }
    match entry.direction {
        Direction::Credit => *credit += entry.remaining(),
        Direction::Debt => *debt += entry.remaining(),
    }
}

impl Engine {
    /// Global pending totals for `account_id`.
    pub fn summary(&self, account_id: &str) -> ResultEngine<Summary> {
        let entries = self.list_entries(account_id)?;
        let mut total_credit = MoneyCents::ZERO;
        let mut total_debt = MoneyCents::ZERO;
        for entry in &entries {
            accumulate(&mut total_credit, &mut total_debt, entry);
        }

        Ok(Summary {
            total_credit,
            total_debt,
            net: total_credit - total_debt,
        })
    }

    /// Pending totals grouped by counterparty, ordered by descending `|net|`.
    ///
    /// Grouping walks every entry, so a counterparty whose entries are all
    /// settled still shows up, with zero totals. The sort is stable: ties
    /// keep first-encounter order over the newest-first listing.
    pub fn counterparty_summaries(
        &self,
        account_id: &str,
    ) -> ResultEngine<Vec<CounterpartyTotals>> {
        let entries = self.list_entries(account_id)?;
        let mut totals: Vec<CounterpartyTotals> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for entry in &entries {
            let slot = *index.entry(entry.counterparty.clone()).or_insert_with(|| {
                totals.push(CounterpartyTotals {
                    counterparty: entry.counterparty.clone(),
                    credit: MoneyCents::ZERO,
                    debt: MoneyCents::ZERO,
                    net: MoneyCents::ZERO,
                });
                totals.len() - 1
            });
            let group = &mut totals[slot];
            accumulate(&mut group.credit, &mut group.debt, entry);
        }

        for group in &mut totals {
            group.net = group.credit - group.debt;
        }
        totals.sort_by(|a, b| b.net.abs().cmp(&a.net.abs()));
        Ok(totals)
    }

    /// Every entry for `counterparty` (any status, newest first) plus the
    /// pending-only totals.
    ///
    /// An unknown name yields an empty detail with zero totals.
    pub fn counterparty_detail(
        &self,
        account_id: &str,
        counterparty: &str,
    ) -> ResultEngine<CounterpartyDetail> {
        let entries: Vec<LedgerEntry> = self
            .list_entries(account_id)?
            .into_iter()
            .filter(|entry| entry.counterparty == counterparty)
            .collect();

        let mut total_credit = MoneyCents::ZERO;
        let mut total_debt = MoneyCents::ZERO;
        for entry in &entries {
            accumulate(&mut total_credit, &mut total_debt, entry);
        }

        Ok(CounterpartyDetail {
            entries,
            total_credit,
            total_debt,
            net: total_credit - total_debt,
        })
    }
}
