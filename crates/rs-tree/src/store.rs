//! Typed column view over row storage.

use rs_core::{Error, Result, Scalar};

use crate::column::{ColumnSpec, Schema};
use crate::slot::Slot;
use crate::source::{RowSink, RowSource};

/// A schema plus one bound [`Slot`] per column, over a backing storage `S`.
///
/// The store owns its storage; [`ColumnStore::into_inner`] releases it. Slots
/// are aligned with the schema for the store's whole lifetime.
#[derive(Debug)]
pub struct ColumnStore<S> {
    storage: S,
    schema: Schema,
    slots: Vec<Slot>,
}

impl<S> ColumnStore<S> {
    /// Column layout.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Column names in schema order.
    pub fn column_names(&self) -> Vec<&str> {
        self.slots.iter().map(Slot::name).collect()
    }

    /// All bound slots in schema order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Mutable access to one slot.
    pub fn get(&mut self, name: &str) -> Result<&mut Slot> {
        let idx = self.index_of(name)?;
        Ok(&mut self.slots[idx])
    }

    /// Snapshot of one slot's current value.
    pub fn get_copy(&self, name: &str) -> Result<Scalar> {
        let idx = self.index_of(name)?;
        Ok(self.slots[idx].value())
    }

    /// Backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Release the store and hand back its storage.
    pub fn into_inner(self) -> S {
        self.storage
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.schema.position(name).ok_or_else(|| Error::NoSuchColumn(name.to_string()))
    }
}

impl<S: RowSource> ColumnStore<S> {
    /// Attach to an existing source, inferring the schema from its declared
    /// leaf types.
    ///
    /// Columns whose leaf type has no scalar counterpart are skipped with a
    /// warning; this never fails.
    pub fn discover(source: S) -> Self {
        let mut schema = Schema::new();
        let mut slots = Vec::new();
        for (column, info) in source.columns().into_iter().enumerate() {
            let Some(ty) = info.leaf_type.scalar_type() else {
                log::warn!("{} has an unknown type : {}", info.name, info.leaf_type);
                continue;
            };
            if schema.push(ColumnSpec::new(info.name.clone(), ty)).is_err() {
                log::warn!("{} is reported twice by the source; keeping the first", info.name);
                continue;
            }
            slots.push(Slot::bind(info.name, column, ty));
        }
        log::debug!("discovered {} columns", slots.len());
        Self { storage: source, schema, slots }
    }

    /// Rows currently materialized in the source.
    pub fn row_count(&self) -> i64 {
        self.storage.entries()
    }

    /// Load row `index` into every slot. Returns bytes read; `0` or negative
    /// at end of data or on failure.
    pub fn load_row(&mut self, index: i64) -> i32 {
        self.storage.read_entry(index, &mut self.slots)
    }
}

impl<S: RowSink> ColumnStore<S> {
    /// Declare a new schema from encoded specs (`"<name>/<T>"`) on `sink`.
    ///
    /// Every spec is validated before the sink is touched.
    pub fn declare_into<T: AsRef<str>>(mut sink: S, specs: &[T]) -> Result<Self> {
        let mut schema = Schema::new();
        for spec in specs {
            schema.push(ColumnSpec::parse(spec.as_ref())?)?;
        }
        let mut slots = Vec::with_capacity(schema.len());
        for col in &schema {
            let column = sink.add_column(&col.name, col.scalar_type)?;
            slots.push(Slot::bind(col.name.clone(), column, col.scalar_type));
        }
        log::debug!("declared {} columns", slots.len());
        Ok(Self { storage: sink, schema, slots })
    }

    /// Commit the current slot values as a new row. The sink's status is
    /// returned as is.
    pub fn append_row(&mut self) -> i32 {
        self.storage.commit_row(&self.slots)
    }

    /// Persist the sink. The sink's status is returned as is.
    pub fn flush(&mut self) -> i32 {
        self.storage.persist()
    }
}

impl<S: RowSink + Default> ColumnStore<S> {
    /// Declare a new schema on a fresh, empty sink.
    pub fn declare<T: AsRef<str>>(specs: &[T]) -> Result<Self> {
        Self::declare_into(S::default(), specs)
    }
}
