//! Column specs (`"<name>/<T>"`) and schemas.

use std::fmt;
use std::str::FromStr;

use rs_core::{Error, Result, ScalarType};

/// A named, typed column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Column name.
    pub name: String,
    /// Column type.
    pub scalar_type: ScalarType,
}

impl ColumnSpec {
    /// Create a spec directly.
    pub fn new(name: impl Into<String>, scalar_type: ScalarType) -> Self {
        Self { name: name.into(), scalar_type }
    }

    /// Parse an encoded spec `"<name>/<T>"` with `T` one of `B`, `I`, `D`.
    ///
    /// The encoded form must be at least 3 characters long, so the name is
    /// never empty.
    pub fn parse(spec: &str) -> Result<Self> {
        if spec.chars().count() < 3 {
            return Err(Error::Schema(format!("column spec '{spec}' is too short")));
        }
        let mut chars = spec.chars();
        let code = chars.next_back();
        let sep = chars.next_back();
        let Some(scalar_type) = code.and_then(ScalarType::from_code) else {
            return Err(Error::Schema(format!("unknown type code in column spec '{spec}'")));
        };
        if sep != Some('/') {
            return Err(Error::Schema(format!("column spec '{spec}' lacks a '/' separator")));
        }
        Ok(Self { name: chars.as_str().to_string(), scalar_type })
    }
}

impl FromStr for ColumnSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.scalar_type.code())
    }
}

/// Ordered list of columns with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<ColumnSpec>,
}

impl Schema {
    /// Empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column; `SchemaError` if the name is taken.
    pub fn push(&mut self, column: ColumnSpec) -> Result<()> {
        if self.position(&column.name).is_some() {
            return Err(Error::Schema(format!("duplicate column '{}'", column.name)));
        }
        self.columns.push(column);
        Ok(())
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Index of a column by name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Look up a column by name.
    pub fn get(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ColumnSpec> {
        self.columns.iter()
    }

    /// Column types in declaration order.
    pub fn types(&self) -> Vec<ScalarType> {
        self.columns.iter().map(|c| c.scalar_type).collect()
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a ColumnSpec;
    type IntoIter = std::slice::Iter<'a, ColumnSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_specs() {
        let s = ColumnSpec::parse("energy/D").unwrap();
        assert_eq!(s.name, "energy");
        assert_eq!(s.scalar_type, ScalarType::Double);
        assert_eq!(ColumnSpec::parse("n/I").unwrap().scalar_type, ScalarType::Int);
        assert_eq!(ColumnSpec::parse("ok/B").unwrap().to_string(), "ok/B");
    }

    #[test]
    fn parse_rejects_short_and_unknown() {
        assert!(matches!(ColumnSpec::parse("ab"), Err(Error::Schema(_))));
        assert!(matches!(ColumnSpec::parse("x/Z"), Err(Error::Schema(_))));
        assert!(matches!(ColumnSpec::parse("xyD"), Err(Error::Schema(_))));
        assert!(matches!(ColumnSpec::parse(""), Err(Error::Schema(_))));
    }

    #[test]
    fn error_names_the_spec() {
        let err = ColumnSpec::parse("x/Z").unwrap_err();
        assert!(err.to_string().contains("x/Z"));
    }

    #[test]
    fn schema_rejects_duplicates() {
        let mut schema = Schema::new();
        schema.push(ColumnSpec::new("a", ScalarType::Int)).unwrap();
        assert!(schema.push(ColumnSpec::new("a", ScalarType::Double)).is_err());
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.position("a"), Some(0));
    }
}
