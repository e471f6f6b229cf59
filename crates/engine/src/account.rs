//! Account records (minimal entity).
//!
//! The ledger keys entries by the owning account id; the session pointer
//! stores the same id.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account. Immutable after registration; never deleted.
///
/// The credential is an opaque string compared for equality. Hardening the
/// credential storage is out of scope for the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub username: String,
    pub credential: String,
    pub display_name: String,
}

impl Account {
    pub(crate) fn new(username: String, credential: String, display_name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            credential,
            display_name,
        }
    }
}
