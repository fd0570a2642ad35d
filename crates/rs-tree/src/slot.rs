//! Typed value slots bound to storage columns.

use rs_core::{Error, Result, Scalar, ScalarType};

/// A scalar slot bound to one column of the backing storage.
///
/// The slot's type is fixed when it is bound; [`Slot::set`] refuses values of
/// any other type. Slots are move-only: two slots must never stand for the same
/// bound column.
#[derive(Debug)]
pub struct Slot {
    name: String,
    column: usize,
    value: Scalar,
}

impl Slot {
    pub(crate) fn bind(name: impl Into<String>, column: usize, ty: ScalarType) -> Self {
        Self { name: name.into(), column, value: ty.zero() }
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index of the bound column in the backing storage.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Fixed type of this slot.
    pub fn scalar_type(&self) -> ScalarType {
        self.value.scalar_type()
    }

    /// Current value.
    pub fn value(&self) -> Scalar {
        self.value
    }

    /// Overwrite the current value. Fails with `TypeMismatch` if `value` is of
    /// another type than the slot.
    pub fn set(&mut self, value: impl Into<Scalar>) -> Result<()> {
        let value = value.into();
        if value.scalar_type() != self.scalar_type() {
            return Err(Error::TypeMismatch {
                expected: self.scalar_type(),
                found: value.scalar_type(),
            });
        }
        self.value = value;
        Ok(())
    }

    /// Read as bool.
    pub fn as_bool(&self) -> Result<bool> {
        self.value.as_bool()
    }

    /// Read as integer.
    pub fn as_int(&self) -> Result<i64> {
        self.value.as_int()
    }

    /// Read as double.
    pub fn as_double(&self) -> Result<f64> {
        self.value.as_double()
    }
}
