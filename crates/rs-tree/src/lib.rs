//! # rs-tree
//!
//! Typed columnar view over row-oriented storage.
//!
//! A [`ColumnStore`] binds one [`Slot`] per column of a [`RowSource`] /
//! [`RowSink`] and moves all slots together with a single row cursor.
//!
//! ## Example
//!
//! ```
//! use rs_tree::{ColumnStore, MemTree};
//!
//! let mut store = ColumnStore::<MemTree>::declare(&["pt/D", "njet/I"]).unwrap();
//! store.get("pt").unwrap().set(42.0).unwrap();
//! store.get("njet").unwrap().set(3_i64).unwrap();
//! store.append_row();
//!
//! let mut store = ColumnStore::discover(store.into_inner());
//! store.load_row(0);
//! assert_eq!(store.get_copy("pt").unwrap().as_double().unwrap(), 42.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod column;
pub mod slot;
pub mod source;
pub mod store;
pub mod tree;

pub use column::{ColumnSpec, Schema};
pub use slot::Slot;
pub use source::{ColumnInfo, RowSink, RowSource};
pub use store::ColumnStore;
pub use tree::{LeafType, MemColumn, MemTree};
