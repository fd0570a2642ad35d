//! In-memory row table with typed leaves.
//!
//! [`MemTree`] plays the part of the external tabular storage: it is both a
//! [`RowSource`] (discover mode) and a [`RowSink`] (declare mode). Status codes
//! follow the usual tree conventions: reads and commits report the number of
//! bytes touched, a read past the last entry reports `0`, and a failure is
//! negative.

use std::fmt;

use rs_core::{Error, Result, Scalar, ScalarType};
use serde::{Deserialize, Serialize};

use crate::slot::Slot;
use crate::source::{ColumnInfo, RowSink, RowSource};

/// Leaf data type as declared by the storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeafType {
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 32-bit unsigned integer.
    U32,
    /// 64-bit unsigned integer.
    U64,
    /// 16-bit signed integer.
    I16,
    /// 8-bit signed integer.
    I8,
    /// Boolean (1 byte).
    Bool,
}

impl LeafType {
    /// Size in bytes of one element.
    pub fn byte_size(self) -> usize {
        match self {
            LeafType::F32 | LeafType::I32 | LeafType::U32 => 4,
            LeafType::F64 | LeafType::I64 | LeafType::U64 => 8,
            LeafType::I16 => 2,
            LeafType::I8 | LeafType::Bool => 1,
        }
    }

    /// Scalar type a column store binds this leaf as, if supported.
    pub fn scalar_type(self) -> Option<ScalarType> {
        match self {
            LeafType::Bool => Some(ScalarType::Bool),
            LeafType::I32 | LeafType::I64 => Some(ScalarType::Int),
            LeafType::F64 => Some(ScalarType::Double),
            LeafType::F32 | LeafType::U32 | LeafType::U64 | LeafType::I16 | LeafType::I8 => None,
        }
    }

    /// Variant used to hold values of this leaf in memory.
    pub fn storage_type(self) -> ScalarType {
        match self {
            LeafType::Bool => ScalarType::Bool,
            LeafType::F32 | LeafType::F64 => ScalarType::Double,
            LeafType::I32
            | LeafType::I64
            | LeafType::U32
            | LeafType::U64
            | LeafType::I16
            | LeafType::I8 => ScalarType::Int,
        }
    }

    /// Leaf created for a declared column of type `ty`.
    pub fn for_scalar(ty: ScalarType) -> Self {
        match ty {
            ScalarType::Bool => LeafType::Bool,
            ScalarType::Int => LeafType::I64,
            ScalarType::Double => LeafType::F64,
        }
    }
}

impl fmt::Display for LeafType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LeafType::F32 => "f32",
            LeafType::F64 => "f64",
            LeafType::I32 => "i32",
            LeafType::I64 => "i64",
            LeafType::U32 => "u32",
            LeafType::U64 => "u64",
            LeafType::I16 => "i16",
            LeafType::I8 => "i8",
            LeafType::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// A single column of a [`MemTree`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemColumn {
    /// Column name.
    pub name: String,
    /// Declared leaf type.
    pub leaf_type: LeafType,
    /// One value per entry.
    pub values: Vec<Scalar>,
}

/// An in-memory tree: named typed columns of equal length.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemTree {
    /// Tree name.
    pub name: String,
    columns: Vec<MemColumn>,
    #[serde(default)]
    persisted: usize,
}

impl MemTree {
    /// Create an empty tree.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), columns: Vec::new(), persisted: 0 }
    }

    /// Add a pre-filled column (builder style).
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        leaf_type: LeafType,
        values: Vec<Scalar>,
    ) -> Result<Self> {
        let name = name.into();
        if !self.columns.is_empty() && values.len() != self.entry_count() {
            return Err(Error::Schema(format!(
                "column '{name}' has {} values, tree has {} entries",
                values.len(),
                self.entry_count()
            )));
        }
        self.push_column(MemColumn { name, leaf_type, values })?;
        Ok(self)
    }

    /// Check a deserialized tree: unique names, equal lengths, values matching leaf types.
    pub fn validate(&self) -> Result<()> {
        let n = self.entry_count();
        for (i, col) in self.columns.iter().enumerate() {
            if self.columns[..i].iter().any(|c| c.name == col.name) {
                return Err(Error::Schema(format!("duplicate column '{}'", col.name)));
            }
            if col.values.len() != n {
                return Err(Error::Schema(format!(
                    "column '{}' has {} values, expected {n}",
                    col.name,
                    col.values.len()
                )));
            }
            let want = col.leaf_type.storage_type();
            if let Some(bad) = col.values.iter().find(|v| v.scalar_type() != want) {
                return Err(Error::TypeMismatch { expected: want, found: bad.scalar_type() });
            }
        }
        if self.persisted > n {
            return Err(Error::Schema(format!(
                "{} persisted entries > {n} entries",
                self.persisted
            )));
        }
        Ok(())
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Entries persisted by the last [`RowSink::persist`] call.
    pub fn persisted_entries(&self) -> usize {
        self.persisted
    }

    /// All columns, in declaration order.
    pub fn column_data(&self) -> &[MemColumn] {
        &self.columns
    }

    /// Find a column by name.
    pub fn find_column(&self, name: &str) -> Option<&MemColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// List all column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    fn row_bytes(&self) -> usize {
        self.columns.iter().map(|c| c.leaf_type.byte_size()).sum()
    }

    fn push_column(&mut self, column: MemColumn) -> Result<usize> {
        if self.find_column(&column.name).is_some() {
            return Err(Error::Schema(format!("duplicate column '{}'", column.name)));
        }
        self.columns.push(column);
        Ok(self.columns.len() - 1)
    }
}

fn status(bytes: usize) -> i32 {
    i32::try_from(bytes).unwrap_or(i32::MAX)
}

impl RowSource for MemTree {
    fn columns(&self) -> Vec<ColumnInfo> {
        self.columns
            .iter()
            .map(|c| ColumnInfo { name: c.name.clone(), leaf_type: c.leaf_type })
            .collect()
    }

    fn entries(&self) -> i64 {
        i64::try_from(self.entry_count()).unwrap_or(i64::MAX)
    }

    fn read_entry(&mut self, entry: i64, slots: &mut [Slot]) -> i32 {
        let Ok(row) = usize::try_from(entry) else {
            return 0;
        };
        if row >= self.entry_count() {
            return 0;
        }
        let mut bytes = 0;
        for slot in slots.iter_mut() {
            let Some(col) = self.columns.get(slot.column()) else {
                return -1;
            };
            if slot.set(col.values[row]).is_err() {
                return -1;
            }
            bytes += col.leaf_type.byte_size();
        }
        status(bytes)
    }
}

impl RowSink for MemTree {
    fn add_column(&mut self, name: &str, ty: ScalarType) -> Result<usize> {
        let leaf_type = LeafType::for_scalar(ty);
        let values = vec![leaf_type.storage_type().zero(); self.entry_count()];
        self.push_column(MemColumn { name: name.to_string(), leaf_type, values })
    }

    fn commit_row(&mut self, slots: &[Slot]) -> i32 {
        let mut row: Vec<Scalar> =
            self.columns.iter().map(|c| c.leaf_type.storage_type().zero()).collect();
        for slot in slots {
            let Some(col) = self.columns.get(slot.column()) else {
                return -1;
            };
            let value = slot.value();
            if value.scalar_type() != col.leaf_type.storage_type() {
                return -1;
            }
            row[slot.column()] = value;
        }
        for (col, value) in self.columns.iter_mut().zip(row) {
            col.values.push(value);
        }
        status(self.row_bytes())
    }

    fn persist(&mut self) -> i32 {
        let fresh = self.entry_count() - self.persisted;
        self.persisted = self.entry_count();
        status(fresh * self.row_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemTree {
        MemTree::new("events")
            .with_column("pt", LeafType::F64, vec![10.0.into(), 20.0.into()])
            .unwrap()
            .with_column("njet", LeafType::I32, vec![Scalar::Int(2), Scalar::Int(3)])
            .unwrap()
    }

    #[test]
    fn leaf_sizes() {
        assert_eq!(LeafType::F64.byte_size(), 8);
        assert_eq!(LeafType::I16.byte_size(), 2);
        assert_eq!(LeafType::Bool.byte_size(), 1);
    }

    #[test]
    fn supported_leaves() {
        assert_eq!(LeafType::I32.scalar_type(), Some(ScalarType::Int));
        assert_eq!(LeafType::F64.scalar_type(), Some(ScalarType::Double));
        assert_eq!(LeafType::F32.scalar_type(), None);
        assert_eq!(LeafType::U64.scalar_type(), None);
    }

    #[test]
    fn with_column_checks_length_and_names() {
        let t = sample();
        assert_eq!(t.entry_count(), 2);
        assert_eq!(t.column_names(), vec!["pt", "njet"]);
        assert!(t.clone().with_column("eta", LeafType::F64, vec![1.0.into()]).is_err());
        assert!(t.with_column("pt", LeafType::F64, vec![1.0.into(), 2.0.into()]).is_err());
    }

    #[test]
    fn validate_rejects_wrong_storage_type() {
        let json = r#"{"name":"t","columns":[{"name":"a","leaf_type":"f64","values":[1]}]}"#;
        let t: MemTree = serde_json::from_str(json).unwrap();
        assert!(matches!(t.validate(), Err(Error::TypeMismatch { .. })));
    }

    #[test]
    fn add_column_backfills_existing_entries() {
        let mut t = sample();
        let idx = t.add_column("flag", ScalarType::Bool).unwrap();
        assert_eq!(idx, 2);
        assert_eq!(t.column_data()[2].values, vec![Scalar::Bool(false); 2]);
        assert!(t.add_column("pt", ScalarType::Double).is_err());
    }

    #[test]
    fn persist_reports_fresh_bytes() {
        let mut t = sample();
        assert_eq!(t.persist(), 2 * 12);
        assert_eq!(t.persisted_entries(), 2);
        assert_eq!(t.persist(), 0);
    }
}
