//! Server-identified rows of an editable collection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned row identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RowId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A record plus the identity the data source assigned to it.
///
/// Rows without a `row_id` can only be replaced wholesale, never targeted
/// by a field mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row<T> {
    #[serde(rename = "rowID", default, skip_serializing_if = "Option::is_none")]
    pub row_id: Option<RowId>,
    #[serde(flatten)]
    pub record: T,
}

impl<T> Row<T> {
    pub fn new(row_id: impl Into<RowId>, record: T) -> Self {
        Self {
            row_id: Some(row_id.into()),
            record,
        }
    }

    /// A row that has not been assigned an identity yet.
    pub fn unidentified(record: T) -> Self {
        Self {
            row_id: None,
            record,
        }
    }

    pub fn is_identified(&self) -> bool {
        self.row_id.is_some()
    }
}
