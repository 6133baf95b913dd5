//! Persisted share record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::design::DesignOptions;
use super::invoice::InvoiceSnapshot;

/// An immutable, point-in-time copy of an invoice plus its presentation
/// options, addressable by a short id. Created once by the store, read any
/// number of times, deleted by the purge sweep once past retention. There
/// is no update operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShareRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub invoice: InvoiceSnapshot,
    pub design: Option<DesignOptions>,
}
