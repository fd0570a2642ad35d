//! Contracts of the row-oriented storage a [`ColumnStore`](crate::ColumnStore) binds to.

use rs_core::{Result, ScalarType};

use crate::slot::Slot;
use crate::tree::LeafType;

/// Column metadata reported by a [`RowSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    /// Column name (unique within the source).
    pub name: String,
    /// Declared leaf type.
    pub leaf_type: LeafType,
}

/// Readable row storage with a positionable cursor.
pub trait RowSource {
    /// Columns in storage order. Index `i` of this list is the column index
    /// slots are bound to.
    fn columns(&self) -> Vec<ColumnInfo>;

    /// Number of materialized rows.
    fn entries(&self) -> i64;

    /// Copy row `entry` into every bound slot.
    ///
    /// Returns the number of bytes read; `0` or negative signals end of data or
    /// a failed read.
    fn read_entry(&mut self, entry: i64, slots: &mut [Slot]) -> i32;
}

/// Writable row storage.
pub trait RowSink {
    /// Add a column and return its index.
    fn add_column(&mut self, name: &str, ty: ScalarType) -> Result<usize>;

    /// Append the slot values as a new row. Returns a storage status code.
    fn commit_row(&mut self, slots: &[Slot]) -> i32;

    /// Persist committed rows. Returns a storage status code.
    fn persist(&mut self) -> i32;
}
