//! In-memory editing of server-identified rows.

use std::collections::HashSet;
use std::sync::Arc;

use prw_model::{Row, RowId};
use tracing::{debug, warn};

use crate::error::{FormError, Result};
use crate::record::{FieldValue, FormRecord};

/// Editable snapshot of a row collection.
///
/// Rows are shared behind [`Arc`]s. A mutation swaps in a new snapshot in
/// which only the edited row is a fresh allocation; every other row is the
/// same instance as before, so consumers can compare by pointer. A mutation
/// that matches no row leaves the snapshot itself untouched.
#[derive(Debug)]
pub struct RowCollectionEditor<T> {
    rows: Arc<[Arc<Row<T>>]>,
}

impl<T> Clone for RowCollectionEditor<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<T> Default for RowCollectionEditor<T> {
    fn default() -> Self {
        Self {
            rows: Arc::from(Vec::new()),
        }
    }
}

impl<T: FormRecord> RowCollectionEditor<T> {
    /// Load rows as delivered by the data source.
    ///
    /// Identified rows must have distinct ids; unidentified rows are kept but
    /// can only be replaced wholesale.
    pub fn hydrate(rows: Vec<Row<T>>) -> Result<Self> {
        let mut editor = Self::default();
        editor.replace_all(rows)?;
        Ok(editor)
    }

    /// Replace the whole collection, as after the owner reloads from the server.
    /// On error the current rows are kept.
    pub fn replace_all(&mut self, rows: Vec<Row<T>>) -> Result<()> {
        let mut seen = HashSet::with_capacity(rows.len());
        for id in rows.iter().filter_map(|r| r.row_id) {
            if !seen.insert(id) {
                warn!(row_id = %id, "duplicate row id in collection");
                return Err(FormError::DuplicateRowId(id));
            }
        }

        let unidentified = rows.len() - seen.len();
        debug!(rows = rows.len(), unidentified, "row collection loaded");
        self.rows = rows.into_iter().map(Arc::new).collect();
        Ok(())
    }

    /// Current snapshot.
    #[inline]
    pub fn rows(&self) -> &Arc<[Arc<Row<T>>]> {
        &self.rows
    }

    pub fn get(&self, row_id: RowId) -> Option<&Arc<Row<T>>> {
        self.rows.iter().find(|r| r.row_id == Some(row_id))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row<T>> {
        self.rows.iter().map(|row| &**row)
    }

    /// Write `value` into `field` of the row with `row_id`.
    ///
    /// Returns the edited row for the caller to persist, or `None` when no row
    /// has that id. A value of the wrong kind for `field` is an error and
    /// leaves the collection unchanged.
    pub fn mutate(
        &mut self,
        row_id: impl Into<RowId>,
        field: T::Field,
        value: impl Into<FieldValue>,
    ) -> Result<Option<Arc<Row<T>>>> {
        let row_id = row_id.into();
        let Some(idx) = self.rows.iter().position(|r| r.row_id == Some(row_id)) else {
            debug!(row_id = %row_id, "no row to mutate");
            return Ok(None);
        };

        let mut edited = (*self.rows[idx]).clone();
        edited.record.set(field, value.into())?;
        let edited = Arc::new(edited);

        self.rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| if i == idx { Arc::clone(&edited) } else { Arc::clone(row) })
            .collect();
        debug!(row_id = %row_id, field = T::field_name(field), "row mutated");
        Ok(Some(edited))
    }
}
